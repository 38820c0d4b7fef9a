mod app;
mod cli;

fn main() {
    // Keep the appender guard alive for the whole process so buffered
    // log lines are flushed on exit
    let _log_guard = promptdash::logging::init();

    let cli = cli::parse();
    app::run(cli);
}
