//! Shared rendering helpers.

pub mod contact;
pub mod footer;
pub mod nav;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
};
use starfolio_core::theme;

/// Terminals narrower than this use the stacked, compact layout.
pub const MOBILE_BREAKPOINT: u16 = 96;

/// Widest content column on large terminals.
pub const MAX_CONTENT_WIDTH: u16 = 100;

pub fn is_mobile(width: u16) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Centered content column with side margins.
pub fn content_column(area: Rect) -> Rect {
    let margin = if is_mobile(area.width) { 2 } else { 6 };
    let width = area
        .width
        .saturating_sub(margin * 2)
        .min(MAX_CONTENT_WIDTH)
        .max(1);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    column
}

/// Greedy word wrap by character count.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad or cut `lines` to exactly `rows` entries.
pub fn fit(mut lines: Vec<Line<'static>>, rows: usize) -> Vec<Line<'static>> {
    lines.truncate(rows);
    lines.resize(rows, Line::default());
    lines
}

/// `// 01. LABEL` heading used by every section.
pub fn section_heading(number: usize, label: &str) -> Line<'static> {
    Line::from(format!("// {number:02}. {}", label.to_uppercase()))
        .style(Style::new().fg(theme::PRIMARY).bold())
}

/// Place two columns of lines side by side, `left_width` columns apart.
pub fn side_by_side(
    left: Vec<Line<'static>>,
    right: Vec<Line<'static>>,
    left_width: usize,
) -> Vec<Line<'static>> {
    let rows = left.len().max(right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    (0..rows)
        .map(|_| {
            let mut line = left.next().unwrap_or_default();
            let pad = left_width.saturating_sub(line.width());
            line.spans.push(Span::raw(" ".repeat(pad)));
            if let Some(r) = right.next() {
                line.spans.extend(r.spans);
            }
            line
        })
        .collect()
}

/// Bottom help line listing the active key bindings.
pub fn help_line(bindings: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 2);
    for (key, action) in bindings {
        spans.push(Span::styled(*key, Style::new().fg(theme::PRIMARY).bold()));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::new().fg(theme::TEXT_DARK),
        ));
    }
    Line::from(spans).centered()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("overlong", 3), vec!["overlong"]);
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit(vec![Line::from("a")], 3).len(), 3);
        assert_eq!(fit(vec![Line::from("a"); 5], 2).len(), 2);
    }

    #[test]
    fn test_side_by_side_aligns_right_column() {
        let lines = side_by_side(
            vec![Line::from("ab")],
            vec![Line::from("cd"), Line::from("ef")],
            4,
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "ab  cd");
        assert_eq!(lines[1].to_string(), "    ef");
    }

    #[test]
    fn test_mobile_breakpoint() {
        assert!(is_mobile(95));
        assert!(!is_mobile(96));
    }

    #[test]
    fn test_content_column_is_capped_and_centered() {
        let column = content_column(Rect::new(0, 0, 200, 10));
        assert_eq!(column.width, MAX_CONTENT_WIDTH);
        assert_eq!(column.x, 50);
    }
}
