//! Reading-order reconstruction for a single page of positioned fragments.
//!
//! Fragments are ordered top-to-bottom, then left-to-right within a visual
//! line. A line is anchored on its highest fragment; a fragment joins the line
//! only while its baseline is within [`LINE_TOLERANCE`] of that anchor, so no
//! two fragments on one line differ by more than the tolerance.
//!
//! Ordering is done in two stable passes (band by `y`, then sort each band by
//! `x`) so the comparator is always a total order and the output is
//! deterministic for any input, including fragments at identical positions.

use crate::extraction::fragment::TextFragment;

/// Maximum baseline difference, in PDF units, for two fragments to share a line.
pub const LINE_TOLERANCE: f64 = 5.0;

/// Rebuilds one page's text: one output line per detected visual line,
/// fragments on the same line joined by a single space.
pub fn reconstruct_page(fragments: &[TextFragment]) -> String {
    let mut text = String::new();

    for (line_index, line) in group_into_lines(fragments).iter().enumerate() {
        if line_index > 0 {
            text.push('\n');
        }
        for fragment in line {
            if !text.is_empty() && !text.ends_with(char::is_whitespace) {
                text.push(' ');
            }
            text.push_str(fragment.text());
        }
    }

    text
}

/// Groups fragments into visual lines, top line first, each line sorted by `x`.
/// Whitespace-only fragments carry no content and are dropped.
fn group_into_lines(fragments: &[TextFragment]) -> Vec<Vec<&TextFragment>> {
    let mut ordered: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| !f.text().trim().is_empty())
        .collect();
    ordered.sort_by(|a, b| b.y().total_cmp(&a.y()));

    let mut lines: Vec<Vec<&TextFragment>> = Vec::new();
    let mut anchor_y: Option<f64> = None;

    for fragment in ordered {
        match (lines.last_mut(), anchor_y) {
            (Some(line), Some(y)) if y - fragment.y() <= LINE_TOLERANCE => line.push(fragment),
            _ => {
                anchor_y = Some(fragment.y());
                lines.push(vec![fragment]);
            }
        }
    }

    for line in &mut lines {
        line.sort_by(|a, b| a.x().total_cmp(&b.x()));
    }

    lines
}
