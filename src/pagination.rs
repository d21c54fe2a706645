//! Bounded-width pagination window.
//!
//! With a large question count the bar cannot show every page number, so
//! [`compute_window`] picks a contiguous run of labels around the current
//! question and pins the first and last label on either side, with
//! ellipsis markers standing in for the skipped ranges.

use crate::error::QuizError;

/// One cell of the pagination bar, recomputed every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageButton {
    /// A clickable page number. `label` is 1-based for display,
    /// `target_index` is the 0-based question index to jump to.
    Page {
        label: usize,
        target_index: usize,
        is_active: bool,
    },
    /// Non-clickable placeholder for skipped labels.
    Ellipsis,
}

impl PageButton {
    fn page(label: usize, current_index: usize) -> Self {
        PageButton::Page {
            label,
            target_index: label - 1,
            is_active: label == current_index + 1,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageButton::Page { is_active: true, .. })
    }

    /// The jump target, or `None` for an ellipsis.
    pub fn target_index(&self) -> Option<usize> {
        match self {
            PageButton::Page { target_index, .. } => Some(*target_index),
            PageButton::Ellipsis => None,
        }
    }
}

/// Compute the ordered list of page buttons for the pagination bar.
///
/// When everything fits (`total_count <= max_visible`) every label is
/// shown. Otherwise a window of exactly `max_visible` labels is centered
/// on the current question and clamped to the label range; label 1 and
/// label `total_count` are pinned outside it, with an ellipsis whenever
/// the pinned label is not adjacent to the window. Exactly one button is
/// active. Output is deterministic, and a single step of `current_index`
/// moves the window edges by at most one label.
pub fn compute_window(
    total_count: usize,
    current_index: usize,
    max_visible: usize,
) -> Result<Vec<PageButton>, QuizError> {
    if total_count == 0 {
        return Err(QuizError::InvalidInput(
            "total_count must be at least 1".to_string(),
        ));
    }
    if current_index >= total_count {
        return Err(QuizError::InvalidInput(format!(
            "current_index {} out of range ({} pages)",
            current_index, total_count
        )));
    }
    if max_visible == 0 {
        return Err(QuizError::InvalidInput(
            "max_visible must be at least 1".to_string(),
        ));
    }

    if total_count <= max_visible {
        let buttons = (1..=total_count)
            .map(|label| PageButton::page(label, current_index))
            .collect();
        return Ok(buttons);
    }

    let (start, end) = window_bounds(total_count, current_index + 1, max_visible);

    let mut buttons = Vec::with_capacity(max_visible + 4);

    if start > 1 {
        buttons.push(PageButton::page(1, current_index));
        if start > 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }

    for label in start..=end {
        buttons.push(PageButton::page(label, current_index));
    }

    if end < total_count {
        if end < total_count - 1 {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::page(total_count, current_index));
    }

    Ok(buttons)
}

/// The contiguous label window: centered on the current label, then
/// clamped to `[1, total_count]`. The shift is a fixed half-width, so the
/// edges track the current label one step at a time. Caller guarantees
/// `total_count > max_visible >= 1`.
fn window_bounds(total_count: usize, current_label: usize, max_visible: usize) -> (usize, usize) {
    let half = max_visible / 2;
    let start = current_label
        .saturating_sub(half)
        .max(1)
        .min(total_count - max_visible + 1);
    (start, start + max_visible - 1)
}
