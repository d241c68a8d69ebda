use crate::ui::theme::{
    ACCENT_BLUE, ACCENT_RED, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the header reports about the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    Ready,
    Processing,
    CoolingDown,
}

impl HeaderStatus {
    fn label(self) -> &'static str {
        match self {
            HeaderStatus::Ready => "ready",
            HeaderStatus::Processing => "processing",
            HeaderStatus::CoolingDown => "cooling down",
        }
    }
}

pub struct Header<'a> {
    model: &'a str,
    status: HeaderStatus,
}

impl<'a> Header<'a> {
    pub fn new(model: &'a str, status: HeaderStatus) -> Self {
        Self { model, status }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_color) = match self.status {
            HeaderStatus::Ready => ("●", STATUS_OK),
            HeaderStatus::Processing => ("●", ACCENT_BLUE),
            HeaderStatus::CoolingDown => ("●", STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Technician Notes",
                Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " AI Rewriter",
                Style::default().fg(ACCENT_RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.model.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled(format!(" {}", self.status.label()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
