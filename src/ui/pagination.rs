//! Rendering and hit-testing for the pagination bar.
//!
//! Both halves share one cell-width function so a mouse click lands on
//! exactly the button drawn under it.

use ratatui::prelude::*;

use crate::pagination::PageButton;

fn cell_text(button: &PageButton) -> String {
    match button {
        PageButton::Page { label, .. } => format!(" {} ", label),
        PageButton::Ellipsis => " ... ".to_string(),
    }
}

/// Render the buttons as a single left-aligned line.
pub(crate) fn line(buttons: &[PageButton]) -> Line<'static> {
    let spans: Vec<Span<'static>> = buttons
        .iter()
        .map(|button| {
            let style = match button {
                PageButton::Page {
                    is_active: true, ..
                } => Style::default().fg(Color::Cyan).bold(),
                PageButton::Page { .. } => Style::default().fg(Color::Gray),
                PageButton::Ellipsis => Style::default().fg(Color::DarkGray),
            };
            Span::styled(cell_text(button), style)
        })
        .collect();
    Line::from(spans)
}

/// Map a click at `(column, row)` to the jump target of the button under
/// it. Cell text is ASCII, so one byte is one terminal column. Ellipsis
/// cells and clicks outside the bar return `None`.
pub(crate) fn hit_test(
    buttons: &[PageButton],
    area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    if row != area.y || column < area.x || column >= area.x.saturating_add(area.width) {
        return None;
    }

    let mut offset = area.x;
    for button in buttons {
        let width = cell_text(button).len() as u16;
        if column < offset + width {
            return button.target_index();
        }
        offset += width;
    }
    None
}
