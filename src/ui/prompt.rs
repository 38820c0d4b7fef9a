// Prompt workspace screen: draft editor, optimized output, feedback history

use crate::ui::components::Footer;
use crate::ui::state::{AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct PromptScreen;

impl PromptScreen {
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
                Constraint::Percentage(22), // Saved prompts sidebar
                Constraint::Percentage(53), // Workspace
                Constraint::Percentage(25), // Feedback history
            ])
            .split(chunks[1]);

        Self::render_sidebar(frame, columns[0], state);
        Self::render_workspace(frame, columns[1], state);
        Self::render_feedback_history(frame, columns[2], state);

        Footer::prompt(state.prompt.active_draft_id.is_some())
            .render(chunks[2], frame.buffer_mut());
    }

    fn render_sidebar(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let title = if state.search_query.is_empty() {
            "Saved Prompts".to_string()
        } else {
            format!("Saved Prompts (filter: {})", state.search_query)
        };

        let items: Vec<ListItem> = state
            .filtered_prompts()
            .iter()
            .take(state.sidebar_limit)
            .map(|p| {
                let style = if p.is_draft() {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(p.title.clone(), style)))
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

        frame.render_stateful_widget(list, area, &mut state.prompt.sidebar_state);
    }

    fn render_workspace(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let has_result = state.prompt.optimized.is_some() || state.prompt.advice.is_some();

        let constraints = if has_result {
            vec![Constraint::Min(8), Constraint::Percentage(45)]
        } else {
            vec![Constraint::Min(8)]
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Self::render_editor(frame, rows[0], state);

        if has_result {
            Self::render_result(frame, rows[1], state);
        }
    }

    fn render_editor(frame: &mut Frame, area: Rect, state: &mut AppState) {
        let editing = state.prompt.input_mode == InputMode::Editing;

        let title = match (&state.prompt.active_draft_id, state.prompt.optimizing) {
            (_, true) => " Draft - optimizing... ".to_string(),
            (Some(_), _) => " Editing Active Draft ".to_string(),
            (None, _) => " Draft ".to_string(),
        };

        let border_style = if editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        state.prompt.draft.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

        frame.render_widget(&state.prompt.draft, area);
    }

    fn render_result(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Optimized Content & Advice ");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = Vec::new();

        if let Some(ref advice) = state.prompt.advice {
            lines.push(Line::from(Span::styled(
                "STRATEGIC ADVICE",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(advice.clone()));
            lines.push(Line::from(""));
        }

        if let Some(ref optimized) = state.prompt.optimized {
            lines.push(Line::from(Span::styled(
                "CO-STAR REWRITE",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )));
            for text_line in optimized.lines() {
                lines.push(Line::from(text_line.to_string()));
            }

            if !state.prompt.can_save_to_registry() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Draft changed since optimization - press O to re-optimize before saving.",
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn render_feedback_history(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Feedback History ");

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.prompt.feedback_history.is_empty() {
            frame.render_widget(
                Paragraph::new("No feedback yet. Optimize a draft to start.")
                    .style(Style::default().fg(Color::DarkGray))
                    .wrap(Wrap { trim: false }),
                inner,
            );
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for entry in &state.prompt.feedback_history {
            lines.push(Line::from(Span::styled(
                entry.timestamp.format("%H:%M  %Y-%m-%d").to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(entry.text.clone()));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}
