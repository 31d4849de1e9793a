//! Top navigation bar.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};
use starfolio_core::{Language, theme};

const BRAND: &str = "EK.";
const GAP: u16 = 2;

/// Navigation bar state for one frame.
#[derive(Debug, Clone)]
pub struct NavBar<'a> {
    pub labels: Vec<&'a str>,
    pub active: usize,
    /// Solid backdrop once the page has scrolled.
    pub solid: bool,
    pub language: Language,
    /// Collapse to the active label only.
    pub compact: bool,
}

impl<'a> NavBar<'a> {
    /// Label text of item `index`, including its shortcut digit.
    fn item_text(&self, index: usize) -> String {
        format!("{} {}", index + 1, self.labels[index])
    }

    /// Column ranges of the clickable items, relative to the bar's left edge.
    pub fn item_ranges(&self) -> Vec<(usize, Range<u16>)> {
        let mut x = BRAND.chars().count() as u16 + GAP * 2;
        let indices: Vec<usize> = if self.compact {
            vec![self.active]
        } else {
            (0..self.labels.len()).collect()
        };
        indices
            .into_iter()
            .map(|index| {
                let width = self.item_text(index).chars().count() as u16;
                let range = x..x + width;
                x += width + GAP;
                (index, range)
            })
            .collect()
    }

    /// Item under `column` (relative to the bar), if any.
    pub fn hit(&self, column: u16) -> Option<usize> {
        self.item_ranges()
            .into_iter()
            .find(|(_, range)| range.contains(&column))
            .map(|(index, _)| index)
    }

    fn line(&self) -> Line<'static> {
        let gap = " ".repeat(GAP as usize);
        let mut spans = vec![
            Span::styled(BRAND, Style::new().fg(theme::PRIMARY).bold()),
            Span::raw(gap.repeat(2)),
        ];
        for (index, _) in self.item_ranges() {
            let style = if index == self.active {
                Style::new().fg(theme::PRIMARY).bold().underlined()
            } else {
                Style::new().fg(theme::TEXT_MUTED)
            };
            spans.push(Span::styled(self.item_text(index), style));
            spans.push(Span::raw(gap.clone()));
        }
        if self.compact {
            spans.push(Span::styled(
                format!("[1-{}]", self.labels.len()),
                Style::new().fg(theme::TEXT_DARK),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for &NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        if self.solid {
            buf.set_style(area, Style::new().bg(theme::BACKGROUND));
        }
        self.line().render(area, buf);

        let language = format!("{} {}", self.language.flag(), self.language.code());
        Line::from(language)
            .style(Style::new().fg(theme::SILVER))
            .right_aligned()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfolio_core::nav_items;

    fn bar(compact: bool) -> NavBar<'static> {
        NavBar {
            labels: nav_items(Language::Pt).to_vec(),
            active: 2,
            solid: false,
            language: Language::Pt,
            compact,
        }
    }

    #[test]
    fn test_item_ranges_follow_labels() {
        let nav = bar(false);
        let ranges = nav.item_ranges();
        assert_eq!(ranges.len(), 5);
        // "EK." + 4 spaces, then "1 Home"
        assert_eq!(ranges[0], (0, 7..13));
        assert_eq!(ranges[1].1.start, 15);
    }

    #[test]
    fn test_hit() {
        let nav = bar(false);
        assert_eq!(nav.hit(0), None);
        assert_eq!(nav.hit(7), Some(0));
        assert_eq!(nav.hit(14), None);
        assert_eq!(nav.hit(15), Some(1));
    }

    #[test]
    fn test_compact_shows_only_active() {
        let nav = bar(true);
        let ranges = nav.item_ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!(nav.hit(ranges[0].1.start), Some(2));
    }

    #[test]
    fn test_renders_labels() {
        let nav = bar(false);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 1));
        (&nav).render(buf.area, &mut buf);
        let row: String = (0..100).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with("EK.    1 Home  2 Sobre  3 Projetos"));
        assert!(row.trim_end().ends_with("PT"));
    }
}
