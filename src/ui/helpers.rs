use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::Book;

/// ASCII textures used to decorate book covers in the grid. The real covers
/// are remote images the terminal cannot show, so each record gets a woven
/// placeholder instead. The pattern is picked by hashing the record id, which
/// keeps a book's cover stable across sessions and reorderings.
const COVER_ART: &[&[&str]] = &[
    &["~*~*", "*~*~"],
    &[".::.", "::.."],
    &["\\||/", "/||\\"],
    &["-==-", "==--"],
    &["o..o", "..oo"],
    &["((()", "()))"],
    &["^-^-", "-^-^"],
    &["####", "    "],
    &["<..>", ">..<"],
    &["||__", "__||"],
    &["%%..", "..%%"],
    &["+..+", ".++."],
];

/// Pick the cover texture for a record. A small FNV-1a over the id bytes is
/// plenty; the only requirement is determinism.
pub(crate) fn cover_pattern_for(id: &str) -> &'static [&'static str] {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    COVER_ART[(hash % COVER_ART.len() as u64) as usize]
}

/// Repeat a short ASCII motif until it fills the requested width.
pub(crate) fn repeat_pattern_row(row: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if row.is_empty() {
        return " ".repeat(width);
    }
    let mut repeated = row.repeat(width / row.len() + 2);
    repeated.truncate(width);
    repeated
}

/// Render a book title centered inside square brackets, truncating long
/// titles with an ellipsis so the brackets always survive.
pub(crate) fn title_label_line(title: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return " ".repeat(width);
    }

    let mut text = trimmed.to_string();
    // "[ " + text + " ]" must fit in `width`.
    let max_text = width.saturating_sub(4);
    if text.chars().count() > max_text {
        text = text.chars().take(max_text.saturating_sub(1)).collect();
        text.push('\u{2026}');
    }

    let mut decorated = format!("[ {} ]", text);
    if decorated.chars().count() > width {
        decorated = decorated.chars().take(width).collect();
    }

    let used = decorated.chars().count();
    let padding = width - used;
    let left = padding / 2;
    let mut line = String::with_capacity(width);
    line.push_str(&" ".repeat(left));
    line.push_str(&decorated);
    line.push_str(&" ".repeat(padding - left));
    line
}

/// Build the textual payload for a book card: the woven cover fills most of
/// the space, the bracketed title sits near the bottom, and one dim line of
/// the description closes the card.
pub(crate) fn build_cover_lines(
    book: &Book,
    inner_width: u16,
    inner_height: u16,
    selected: bool,
) -> Vec<Line<'static>> {
    let width = inner_width as usize;
    let height = inner_height as usize;
    if width == 0 || height == 0 {
        return vec![Line::from("")];
    }

    let pattern = cover_pattern_for(&book.id);
    let pattern_style = if selected {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Reserve the last rows for the title and, space permitting, the blurb.
    let text_rows = if height >= 3 { 2 } else { 1 };
    let pattern_rows = height - text_rows;

    let mut lines = Vec::with_capacity(height);
    for row_idx in 0..pattern_rows {
        let base = pattern[row_idx % pattern.len()];
        lines.push(Line::from(Span::styled(
            repeat_pattern_row(base, width),
            pattern_style,
        )));
    }

    let label = title_label_line(&book.title, width);
    if selected {
        lines.push(Line::from(Span::styled(
            label,
            Style::default().add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(label));
    }

    if text_rows == 2 {
        lines.push(Line::from(Span::styled(
            book.short_description(width),
            Style::default().fg(Color::Gray),
        )));
    }

    lines
}

/// Produce a rectangle centered within `area` that spans the requested
/// percent of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_pattern_is_deterministic_per_id() {
        let a = cover_pattern_for("book1");
        let b = cover_pattern_for("book1");
        assert_eq!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn repeat_pattern_row_fills_the_width_exactly() {
        assert_eq!(repeat_pattern_row("ab", 5), "ababa");
        assert_eq!(repeat_pattern_row("", 3), "   ");
        assert_eq!(repeat_pattern_row("xyz", 0), "");
    }

    #[test]
    fn title_label_is_always_the_requested_width() {
        for width in [6usize, 10, 21, 40] {
            let line = title_label_line("Shadows of Desire", width);
            assert_eq!(line.chars().count(), width);
        }
    }

    #[test]
    fn title_label_truncates_long_titles_with_ellipsis() {
        let line = title_label_line("An Extremely Long Working Title", 14);
        assert!(line.contains('\u{2026}'));
        assert_eq!(line.chars().count(), 14);
    }
}
