// Help modal implementation

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Debug, Clone)]
pub struct HelpModalState {
    pub current_section: HelpSection,
    pub scroll_offset: u16,
    pub max_scroll: u16,
    pub app_version: String,
    pub api_base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSection {
    About,
    PromptWorkflow,
    Registry,
    KeyboardShortcuts,
}

impl HelpSection {
    pub fn next(self) -> Self {
        match self {
            Self::About => Self::PromptWorkflow,
            Self::PromptWorkflow => Self::Registry,
            Self::Registry => Self::KeyboardShortcuts,
            Self::KeyboardShortcuts => Self::About,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::About => Self::KeyboardShortcuts,
            Self::PromptWorkflow => Self::About,
            Self::Registry => Self::PromptWorkflow,
            Self::KeyboardShortcuts => Self::Registry,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::About => "About",
            Self::PromptWorkflow => "Prompt Workflow",
            Self::Registry => "Registry",
            Self::KeyboardShortcuts => "Keyboard Shortcuts",
        }
    }

    pub fn all_sections() -> Vec<Self> {
        vec![
            Self::About,
            Self::PromptWorkflow,
            Self::Registry,
            Self::KeyboardShortcuts,
        ]
    }
}

pub struct HelpModal;

impl HelpModal {
    pub fn render(frame: &mut Frame, state: &mut HelpModalState) {
        let area = frame.area();

        let modal_width = ((area.width * 80) / 100).max(60);
        let modal_height = ((area.height * 80) / 100).max(16);

        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width.min(area.width),
            height: modal_height.min(area.height),
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!("Help - {}", state.current_section.title()))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Section tabs
                Constraint::Min(8),    // Content area
                Constraint::Length(1), // Footer/navigation hints
            ])
            .split(inner);

        Self::render_tabs(frame, chunks[0], state.current_section);

        let content = Self::section_content(state);
        let content_height = content.len() as u16;
        let viewport_height = chunks[1].height;

        state.max_scroll = content_height.saturating_sub(viewport_height);
        state.scroll_offset = state.scroll_offset.min(state.max_scroll);

        let visible_content: Vec<Line> = content
            .into_iter()
            .skip(state.scroll_offset as usize)
            .take(viewport_height as usize)
            .collect();

        let paragraph = Paragraph::new(visible_content)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, chunks[1]);

        Self::render_footer(frame, chunks[2]);
    }

    fn render_tabs(frame: &mut Frame, area: Rect, current: HelpSection) {
        let mut spans = Vec::new();

        let sections = HelpSection::all_sections();
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            let style = if *section == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            spans.push(Span::styled(section.title(), style));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
            area,
        );
    }

    fn render_footer(frame: &mut Frame, area: Rect) {
        let hints = vec![
            Span::styled("[Tab/Arrows]", Style::default().fg(Color::Yellow)),
            Span::raw(" Switch  "),
            Span::styled("[jk]", Style::default().fg(Color::Yellow)),
            Span::raw(" Scroll  "),
            Span::styled("[Esc/H]", Style::default().fg(Color::Yellow)),
            Span::raw(" Close"),
        ];

        frame.render_widget(Paragraph::new(Line::from(hints)), area);
    }

    fn section_content(state: &HelpModalState) -> Vec<Line<'static>> {
        match state.current_section {
            HelpSection::About => vec![
                Line::from(""),
                Line::from(format!("promptdash v{}", state.app_version)),
                Line::from(""),
                Line::from("A terminal client for a prompt registry: draft prompts, request"),
                Line::from("an AI-driven rewrite, analyze habits across saved prompts, and"),
                Line::from("browse the registry."),
                Line::from(""),
                Line::from(format!("API: {}", state.api_base_url)),
                Line::from(""),
                Line::from("All optimization and analysis happens on the remote service;"),
                Line::from("this client only holds view state and a thin HTTP wrapper."),
            ],
            HelpSection::PromptWorkflow => vec![
                Line::from(""),
                Line::from("1. Press E (or Enter) to edit the draft, Esc to stop editing."),
                Line::from("2. Press O to request an optimized rewrite. The result and any"),
                Line::from("   strategic advice appear below the editor, and a feedback"),
                Line::from("   entry is logged in the right column."),
                Line::from("3. Press S to save the optimized prompt to the registry. This is"),
                Line::from("   only enabled while the draft still matches the text that was"),
                Line::from("   optimized - edit the draft and you must optimize again."),
                Line::from("4. Press D to save the draft without optimizing. If a draft from"),
                Line::from("   the registry is being edited, D updates it in place."),
                Line::from("5. Press X to cancel the active draft and clear the editor."),
            ],
            HelpSection::Registry => vec![
                Line::from(""),
                Line::from("The registry screen lists active drafts first, then saved"),
                Line::from("prompts, newest first."),
                Line::from(""),
                Line::from("Enter loads the selected record into the editor. Drafts become"),
                Line::from("the active draft (D updates them); saved records only load"),
                Line::from("their raw content."),
                Line::from(""),
                Line::from("Press / to search. The filter is a case-insensitive substring"),
                Line::from("match over titles and raw content, applied locally."),
                Line::from(""),
                Line::from("Delete removes the record remotely and refreshes the list."),
            ],
            HelpSection::KeyboardShortcuts => vec![
                Line::from(""),
                Line::from("Global (normal mode)"),
                Line::from("  1 / 2 / 3   Switch to Prompt / Patterns / Registry"),
                Line::from("  Tab         Cycle screens"),
                Line::from("  H           Toggle this help"),
                Line::from("  Q, Ctrl+C   Quit (confirms if requests are in flight)"),
                Line::from(""),
                Line::from("Prompt"),
                Line::from("  E, Enter    Edit draft    Esc  Stop editing"),
                Line::from("  O           Optimize      S    Save to registry"),
                Line::from("  D           Save draft    X    Cancel active draft"),
                Line::from("  Up / Down   Move sidebar  Spc  Load sidebar selection"),
                Line::from(""),
                Line::from("Patterns"),
                Line::from("  A           Analyze       D    Delete selected log entry"),
                Line::from(""),
                Line::from("Registry"),
                Line::from("  Enter       Edit record   /    Search"),
                Line::from("  D, Del      Delete        R    Refresh"),
            ],
        }
    }
}
