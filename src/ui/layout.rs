use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// The form's panels, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSections {
    pub input: Rect,
    pub controls: Rect,
    pub error: Rect,
    pub output: Rect,
}

/// Split the body into input, button row, error banner and output.
///
/// The error banner collapses to zero height when there is nothing to show.
pub fn form_sections(body: Rect, show_error: bool) -> FormSections {
    let error_height = if show_error { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Min(3),
        ])
        .split(body);

    FormSections {
        input: chunks[0],
        controls: chunks[1],
        error: chunks[2],
        output: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 2));
        assert_eq!(header.height, 2);
        assert_eq!(footer.height, 0);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn error_banner_only_takes_space_when_shown() {
        let body = Rect::new(0, 3, 80, 18);
        assert_eq!(form_sections(body, false).error.height, 0);
        let with_error = form_sections(body, true);
        assert_eq!(with_error.error.height, 3);
        assert!(with_error.output.height >= 3);
        assert_eq!(with_error.controls.height, 1);
    }
}
