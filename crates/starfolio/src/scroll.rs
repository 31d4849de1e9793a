//! Scroll position of the single-page variant.
//!
//! Offsets are logical pixels; one terminal row is [`ROW_HEIGHT`] of them, so
//! the section boundaries land on whole rows.

use starfolio_core::{SCROLLED_THRESHOLD, Section, TOP_BUTTON_THRESHOLD};

pub const ROW_HEIGHT: f32 = 20.0;
/// Mouse wheel notch or arrow key.
pub const LINE_STEP: f32 = 100.0;
/// PgUp / PgDn.
pub const PAGE_STEP: f32 = 800.0;
/// Rows of the contact section and footer below the last boundary.
pub const CONTACT_ROWS: usize = 40;

/// First row and row count of a section in the page.
pub fn section_rows(section: Section) -> (usize, usize) {
    let start = (section.start_offset() / ROW_HEIGHT) as usize;
    let len = match Section::from_index(section.index() + 1) {
        Some(next) => (next.start_offset() / ROW_HEIGHT) as usize - start,
        None => CONTACT_ROWS,
    };
    (start, len)
}

/// Total height of the page in rows.
pub fn page_rows() -> usize {
    let (start, len) = section_rows(Section::Contact);
    start + len
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    offset: f32,
    max: f32,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            max: Section::Contact.start_offset(),
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Fit the scroll range to a view of `rows` rows. The contact section
    /// start always stays reachable.
    pub fn set_view_rows(&mut self, rows: u16) {
        let page = page_rows() as f32 * ROW_HEIGHT;
        let view = f32::from(rows) * ROW_HEIGHT;
        self.max = (page - view).max(Section::Contact.start_offset());
        self.offset = self.offset.min(self.max);
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0.0;
    }

    pub fn jump_to(&mut self, section: Section) {
        self.offset = section.start_offset().clamp(0.0, self.max);
    }

    pub fn active_section(&self) -> Section {
        Section::from_scroll_offset(self.offset)
    }

    /// The nav bar switches to a solid backdrop.
    pub fn scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    pub fn show_top_button(&self) -> bool {
        self.offset > TOP_BUTTON_THRESHOLD
    }

    /// First page row in view.
    pub fn top_row(&self) -> usize {
        (self.offset / ROW_HEIGHT) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_rows_follow_boundaries() {
        assert_eq!(section_rows(Section::Home), (0, 25));
        assert_eq!(section_rows(Section::About), (25, 40));
        assert_eq!(section_rows(Section::Projects), (65, 50));
        assert_eq!(section_rows(Section::Skills), (115, 40));
        assert_eq!(section_rows(Section::Contact), (155, CONTACT_ROWS));
        assert_eq!(page_rows(), 195);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut scroll = ScrollState::new();
        scroll.set_view_rows(30);
        scroll.scroll_by(-LINE_STEP);
        assert_eq!(scroll.offset(), 0.0);

        scroll.scroll_by(100_000.0);
        assert_eq!(scroll.offset(), 195.0 * ROW_HEIGHT - 30.0 * ROW_HEIGHT);
    }

    #[test]
    fn test_tall_view_still_reaches_contact() {
        let mut scroll = ScrollState::new();
        scroll.set_view_rows(120);
        scroll.jump_to(Section::Contact);
        assert_eq!(scroll.active_section(), Section::Contact);
    }

    #[test]
    fn test_jump_and_flags() {
        let mut scroll = ScrollState::new();
        scroll.set_view_rows(40);
        assert!(!scroll.scrolled());

        scroll.jump_to(Section::About);
        assert_eq!(scroll.offset(), 500.0);
        assert_eq!(scroll.active_section(), Section::About);
        assert!(scroll.scrolled());
        assert!(scroll.show_top_button());
        assert_eq!(scroll.top_row(), 25);

        scroll.scroll_to_top();
        assert_eq!(scroll.active_section(), Section::Home);
        assert!(!scroll.show_top_button());
    }

    #[test]
    fn test_steps_cross_boundaries() {
        let mut scroll = ScrollState::new();
        scroll.set_view_rows(40);
        for _ in 0..5 {
            scroll.scroll_by(LINE_STEP);
        }
        assert_eq!(scroll.active_section(), Section::About);
        scroll.scroll_by(PAGE_STEP);
        assert_eq!(scroll.active_section(), Section::Projects);
    }
}
