use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{form_sections, layout_regions};
use crate::ui::theme::{
    ACCENT_BLUE, BUTTON_BG, BUTTON_SECONDARY_BG, DISABLED_TEXT, ERROR_TEXT, HEADER_TEXT,
    PANEL_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

const INPUT_PLACEHOLDER: &str =
    "Enter technician notes here (e.g., check engine light on. scan shows p0456. replaced cap.)";

const OUTPUT_PLACEHOLDER: &str = "Professional notes will appear here...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.model(), app.header_status());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let state = app.rewriter();
    let sections = form_sections(body, state.error().is_some());

    draw_input(frame, app, sections.input);
    draw_controls(frame, app, sections.controls);
    if let Some(error) = state.error() {
        let banner = Paragraph::new(format!(" {}", error))
            .style(Style::default().fg(ERROR_TEXT))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(STATUS_ERROR)),
            );
        frame.render_widget(banner, sections.error);
    }
    draw_output(frame, app, sections.output);

    Footer::new(state).render(frame, footer);
}

fn panel(title: Line<'static>) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.rewriter();
    let title = Line::from(Span::styled(
        " Raw Technician Notes ",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ));
    let block = panel(title);
    let inner = block.inner(area);

    // The input is not soft-wrapped: scroll both ways to keep the caret in view.
    let (line, col) = state.cursor_line_col();
    let top = line.saturating_sub(inner.height.max(1) as usize - 1);
    let left = col.saturating_sub(inner.width.max(1) as usize - 1);

    let paragraph = if state.input().is_empty() {
        Paragraph::new(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(DISABLED_TEXT),
        ))
        .wrap(Wrap { trim: false })
    } else {
        let style = if state.is_loading() {
            Style::default().fg(DISABLED_TEXT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Paragraph::new(state.input().to_string())
            .style(style)
            .scroll((clamp_u16(top), clamp_u16(left)))
    };
    frame.render_widget(paragraph.block(block), area);

    if !state.is_loading() && inner.width > 0 && inner.height > 0 {
        let x = inner.x + clamp_u16(col - left);
        let y = inner.y + clamp_u16(line - top);
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn button(label: &str, enabled: bool, background: ratatui::style::Color) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DISABLED_TEXT).bg(BUTTON_SECONDARY_BG)
    };
    Span::styled(format!(" {} ", label), style)
}

fn draw_controls(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.rewriter();
    let rewrite_label = if state.is_loading() {
        let frame_index = app.animation_tick() as usize % SPINNER.len();
        format!("{} Processing...", SPINNER[frame_index])
    } else {
        "Rewrite Notes".to_string()
    };

    let mut spans = vec![
        Span::raw(" "),
        button(&rewrite_label, state.can_submit(), BUTTON_BG),
        Span::raw("  "),
        button("Clear", true, BUTTON_SECONDARY_BG),
    ];
    if state.is_cooling_down() {
        spans.push(Span::styled(
            "  waiting before next request",
            Style::default().fg(DISABLED_TEXT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_output(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.rewriter();
    let mut title = vec![Span::styled(
        " Professional Notes ",
        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
    )];
    if state.is_copied() {
        title.push(Span::styled("✓ Copied ", Style::default().fg(STATUS_OK)));
    } else if !state.output().is_empty() {
        title.push(Span::styled(
            "Ctrl+Y: Copy ",
            Style::default().fg(DISABLED_TEXT),
        ));
    }
    let block = panel(Line::from(title));

    let paragraph = if state.output().is_empty() {
        Paragraph::new(Span::styled(
            OUTPUT_PLACEHOLDER,
            Style::default().fg(DISABLED_TEXT),
        ))
    } else {
        Paragraph::new(state.output().to_string())
            .style(Style::default().fg(HEADER_TEXT))
            .scroll((state.output_scroll(), 0))
    };
    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
