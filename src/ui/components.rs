// Reusable UI components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn from_controls(prefix: String, controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw(prefix)];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    pub fn prompt(active_draft: bool) -> Self {
        let prefix = if active_draft {
            "EDITING ACTIVE DRAFT  |  ".to_string()
        } else {
            String::new()
        };

        Self::from_controls(
            prefix,
            &[
                ("[E]", "dit"),
                ("[O]", "ptimize"),
                ("[S]", "ave Registry"),
                ("[D]", "raft Save"),
                ("[X]", " Cancel Draft"),
                ("[1-3]", " Tabs"),
                ("[H]", "elp"),
                ("[Q]", "uit"),
            ],
        )
    }

    pub fn patterns(run_count: usize) -> Self {
        Self::from_controls(
            format!("Analysis Runs: {}  |  ", run_count),
            &[
                ("[A]", "nalyze"),
                ("[↑/↓]", " Navigate"),
                ("[D]", "elete Log"),
                ("[1-3]", " Tabs"),
                ("[H]", "elp"),
                ("[Q]", "uit"),
            ],
        )
    }

    pub fn registry(total: usize, drafts: usize) -> Self {
        Self::from_controls(
            format!("Registry: {}, Drafts: {}  |  ", total, drafts),
            &[
                ("[↑/↓]", " Navigate"),
                ("[Enter]", " Edit"),
                ("[/]", " Search"),
                ("[D]", "elete"),
                ("[R]", "efresh"),
                ("[1-3]", " Tabs"),
                ("[H]", "elp"),
                ("[Q]", "uit"),
            ],
        )
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}
