// Patterns screen: run habit analysis across saved prompts, browse the logs

use crate::ui::components::Footer;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct PatternsScreen;

impl PatternsScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        super::events::render_tab_bar(frame, chunks[0], state.current_screen);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(70), // Analysis result
                Constraint::Percentage(30), // Analysis logs
            ])
            .split(chunks[1]);

        Self::render_analysis(frame, columns[0], state);
        Self::render_logs(frame, columns[1], state);

        Footer::patterns(state.patterns.history.len()).render(chunks[2], frame.buffer_mut());
    }

    fn render_analysis(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Analytical Habit Review ");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = vec![Line::from("")];

        if state.patterns.analyzing {
            lines.push(Line::from(Span::styled(
                "Scanning habits...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        } else if state.prompts.is_empty() {
            lines.push(Line::from(Span::styled(
                "No saved prompts to analyze. Save some drafts first.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    "[A]",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " to analyze your {} most recent prompts.",
                    state.analysis_window.min(state.prompts.len())
                )),
            ]));
        }

        if let Some(ref analysis) = state.patterns.last_analysis {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "BEHAVIORAL PATTERN ANALYSIS",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for text_line in analysis.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_logs(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let items: Vec<ListItem> = state
            .patterns
            .history
            .iter()
            .map(|entry| {
                let lines = vec![
                    Line::from(Span::styled(
                        entry.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                        Style::default().fg(Color::Magenta),
                    )),
                    Line::from(entry.text.clone()),
                ];
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Analysis Logs "))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut state.patterns.list_state);
    }
}
