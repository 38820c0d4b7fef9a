// Registry screen: active drafts, saved prompts, and registry stats

use crate::ui::components::Footer;
use crate::ui::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct RegistryScreen;

impl RegistryScreen {
    pub fn render(frame: &mut Frame, state: &mut AppState) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Tab bar
                Constraint::Length(3), // Search box
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        super::events::render_tab_bar(frame, chunks[0], state.current_screen);
        Self::render_search(frame, chunks[1], state);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(38), // Record list
                Constraint::Percentage(40), // Record details
                Constraint::Percentage(22), // Stats
            ])
            .split(chunks[2]);

        Self::render_record_list(frame, columns[0], state);
        Self::render_details(frame, columns[1], state);
        Self::render_stats(frame, columns[2], state);

        let total = state.prompts.len();
        let drafts = state.drafts().len();
        Footer::registry(total, drafts).render(chunks[3], frame.buffer_mut());
    }

    fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
        let (border_style, cursor) = if state.search_editing {
            (Style::default().fg(Color::Yellow), "█")
        } else {
            (Style::default().fg(Color::DarkGray), "")
        };

        let content = Line::from(vec![
            Span::raw(state.search_query.clone()),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Search (title & content) "),
        );

        frame.render_widget(paragraph, area);
    }

    fn render_record_list(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let rows = state.registry_rows();
        let row_count = rows.len();

        let title = if state.fetch_in_progress {
            " Records - loading... ".to_string()
        } else {
            format!(" Records ({}) ", row_count)
        };

        let items: Vec<ListItem> = rows
            .iter()
            .map(|p| {
                let (tag, tag_color) = if p.is_draft() {
                    ("DRAFT", Color::Yellow)
                } else {
                    ("SAVED", Color::Blue)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", tag),
                        Style::default().fg(tag_color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(p.title.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        state.registry.clamp_selection(row_count);
        frame.render_stateful_widget(list, area, &mut state.registry.list_state);
    }

    fn render_details(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" Details ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = state.registry_rows();
        let selected = state
            .registry
            .list_state
            .selected()
            .and_then(|i| rows.get(i).copied());

        let Some(record) = selected else {
            frame.render_widget(
                Paragraph::new("No records found.")
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        };

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                record.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                record
                    .created_at
                    .format("Created %Y-%m-%d %H:%M UTC")
                    .to_string(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "RAW PROMPT",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        for text_line in record.raw_content.lines() {
            lines.push(Line::from(text_line.to_string()));
        }

        if let Some(ref optimized) = record.optimized_content {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "OPTIMIZED VERSION",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )));
            for text_line in optimized.lines() {
                lines.push(Line::from(text_line.to_string()));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" System Stats ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let stat = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<16}", label), Style::default().fg(Color::Gray)),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        };

        let lines = vec![
            Line::from(""),
            stat("Total Registry", state.prompts.len().to_string()),
            stat("Active Drafts", state.drafts().len().to_string()),
            stat("Saved", state.saved().len().to_string()),
            stat("Analysis Runs", state.patterns.history.len().to_string()),
            Line::from(""),
            Line::from(Span::styled(
                format!("API: {}", state.api_base_url),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
