//! Character-by-character reveal of a line of text.

use std::time::Duration;

use crate::timer::{TimerId, Timers};

const STEP: Duration = Duration::from_millis(60);

/// Types out a fixed string one character per 60 ms.
#[derive(Debug)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
    timers: Timers<()>,
    interval: Option<TimerId>,
}

impl Typewriter {
    /// Start typing at `now`.
    pub fn new(text: &'static str, now: Duration) -> Self {
        let mut timers = Timers::new();
        let interval = Some(timers.schedule_interval(now, STEP, ()));
        Self {
            text,
            shown: 0,
            timers,
            interval,
        }
    }

    pub fn tick(&mut self, now: Duration) {
        let total = self.text.chars().count();
        for () in self.timers.drain_due(now) {
            self.shown = (self.shown + 1).min(total);
        }
        if self.shown >= total {
            self.dispose();
        }
    }

    /// The part typed so far.
    pub fn visible(&self) -> &'static str {
        match self.text.char_indices().nth(self.shown) {
            Some((index, _)) => &self.text[..index],
            None => self.text,
        }
    }

    pub fn is_done(&self) -> bool {
        self.interval.is_none()
    }

    pub fn dispose(&mut self) {
        if let Some(id) = self.interval.take() {
            self.timers.cancel(id);
        }
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_step() {
        let mut writer = Typewriter::new("DEV", Duration::ZERO);
        assert_eq!(writer.visible(), "");

        writer.tick(Duration::from_millis(60));
        assert_eq!(writer.visible(), "D");
        writer.tick(Duration::from_millis(120));
        assert_eq!(writer.visible(), "DE");
        assert!(!writer.is_done());

        writer.tick(Duration::from_millis(180));
        assert_eq!(writer.visible(), "DEV");
        assert!(writer.is_done());

        writer.tick(Duration::from_secs(10));
        assert_eq!(writer.visible(), "DEV");
    }

    #[test]
    fn test_handles_multibyte_text() {
        let mut writer = Typewriter::new("Olá", Duration::ZERO);
        writer.tick(Duration::from_millis(60));
        writer.tick(Duration::from_millis(120));
        writer.tick(Duration::from_millis(180));
        assert_eq!(writer.visible(), "Olá");
    }

    #[test]
    fn test_dispose_stops_typing() {
        let mut writer = Typewriter::new("DEV", Duration::ZERO);
        writer.dispose();
        writer.tick(Duration::from_secs(1));
        assert_eq!(writer.visible(), "");
        assert!(writer.is_done());
    }
}
