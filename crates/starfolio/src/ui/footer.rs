use ratatui::{
    style::{Style, Stylize},
    text::Line,
};
use starfolio_core::theme;

pub const BRAND: &str = "EDUARDO.KAMO";
pub const COPYRIGHT: &str = "© 2026 Eduardo Kamo";

/// Footer block: a rule, the brand and the copyright line.
pub fn footer_lines(width: usize) -> Vec<Line<'static>> {
    vec![
        Line::from("─".repeat(width)).style(Style::new().fg(theme::TEXT_DARK)),
        Line::from(BRAND)
            .style(Style::new().fg(theme::PRIMARY).bold())
            .centered(),
        Line::from(COPYRIGHT)
            .style(Style::new().fg(theme::TEXT_DARK))
            .centered(),
    ]
}
