//! Fade-in-once tracking for the sections of the single page.

use starfolio_core::Section;

/// Fraction of a section that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Fraction of the span `[start, start + len)` that lies inside the view.
pub fn visible_fraction(start: usize, len: usize, view_start: usize, view_len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    let top = start.max(view_start);
    let bottom = (start + len).min(view_start + view_len);
    bottom.saturating_sub(top) as f32 / len as f32
}

/// Remembers which sections have been seen. Once revealed, a section stays visible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: [bool; Section::ALL.len()],
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how much of `section` is visible. Returns true if this reveals it.
    pub fn observe(&mut self, section: Section, fraction: f32) -> bool {
        let slot = &mut self.revealed[section.index()];
        if !*slot && fraction >= REVEAL_THRESHOLD {
            *slot = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed[section.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(0, 10, 0, 40), 1.0);
        assert_eq!(visible_fraction(50, 10, 0, 40), 0.0);
        assert_eq!(visible_fraction(30, 20, 0, 40), 0.5);
        assert_eq!(visible_fraction(0, 20, 15, 40), 0.25);
    }

    #[test]
    fn test_reveal_needs_threshold() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.observe(Section::About, 0.1));
        assert!(!tracker.is_revealed(Section::About));
        assert!(tracker.observe(Section::About, 0.15));
        assert!(tracker.is_revealed(Section::About));
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut tracker = RevealTracker::new();
        tracker.observe(Section::Skills, 1.0);
        assert!(!tracker.observe(Section::Skills, 0.0));
        assert!(tracker.is_revealed(Section::Skills));
        assert!(!tracker.is_revealed(Section::Contact));
    }
}
