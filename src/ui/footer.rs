use crate::rewriter::RewriterState;
use crate::ui::theme::{DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints that follow what the form can do right now, and a count of the
/// notes typed so far.
pub struct Footer<'a> {
    state: &'a RewriterState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a RewriterState) -> Self {
        Self { state }
    }

    /// `(label, enabled)` for each shortcut, in display order.
    fn hints(&self) -> Vec<(&'static str, bool)> {
        let rewrite = if self.state.is_cooling_down() {
            "Ctrl+R: Rewrite (wait)"
        } else {
            "Ctrl+R: Rewrite"
        };
        vec![
            (rewrite, self.state.can_submit()),
            ("Ctrl+Y: Copy", !self.state.output().is_empty()),
            ("Ctrl+L: Clear", true),
            ("PgUp/PgDn: Scroll", !self.state.output().is_empty()),
            ("Ctrl+Q: Quit", true),
        ]
    }

    fn counts(&self) -> String {
        let input = self.state.input();
        let chars = input.chars().count();
        let lines = input.lines().count().max(1);
        format!("{} chars · {} lines · v{} ", chars, lines, VERSION)
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let counts = self.counts();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(counts.chars().count() as u16),
            ])
            .split(inner);

        let enabled = Style::default().fg(HEADER_TEXT);
        let disabled = Style::default().fg(DISABLED_TEXT);
        let mut spans = vec![Span::raw(" ")];
        for (i, (label, is_enabled)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", disabled));
            }
            spans.push(Span::styled(label, if is_enabled { enabled } else { disabled }));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

        frame.render_widget(
            Paragraph::new(counts)
                .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
                .alignment(Alignment::Right),
            columns[1],
        );
    }
}
