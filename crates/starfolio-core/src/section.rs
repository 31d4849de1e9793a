//! Page sections (one-page variant) and routes (routed variant).

use crate::Language;
use crate::i18n::{nav_items, translate};

/// Offset past which the navigation bar gets a solid backdrop.
pub const SCROLLED_THRESHOLD: f32 = 40.0;

/// Offset past which the scroll-to-top affordance is shown.
pub const TOP_BUTTON_THRESHOLD: f32 = 400.0;

/// A section of the single scrolling page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Classify a vertical scroll offset (logical px) into the active section.
    ///
    /// Thresholds are hand-tuned to the section heights and have no hysteresis.
    pub fn from_scroll_offset(offset: f32) -> Self {
        if offset < 500.0 {
            Section::Home
        } else if offset < 1300.0 {
            Section::About
        } else if offset < 2300.0 {
            Section::Projects
        } else if offset < 3100.0 {
            Section::Skills
        } else {
            Section::Contact
        }
    }

    /// Scroll offset at which this section starts.
    pub fn start_offset(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::About => 500.0,
            Section::Projects => 1300.0,
            Section::Skills => 2300.0,
            Section::Contact => 3100.0,
        }
    }

    /// Stable anchor id, independent of language.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "sobre",
            Section::Projects => "projetos",
            Section::Skills => "skills",
            Section::Contact => "contato",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Skills => 3,
            Section::Contact => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Navigation label in the given language.
    pub fn label(self, lang: Language) -> &'static str {
        nav_items(lang)[self.index()]
    }
}

/// A page of the routed variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Work,
    Contact,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Work, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Work => "/work",
            Route::Contact => "/contact",
        }
    }

    /// Translation key of the navigation link.
    pub fn nav_key(self) -> &'static str {
        match self {
            Route::Home => "nav.home",
            Route::About => "nav.about",
            Route::Work => "nav.work",
            Route::Contact => "nav.contact",
        }
    }

    pub fn label(self, lang: Language) -> &'static str {
        translate(lang, self.nav_key())
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn index(self) -> usize {
        match self {
            Route::Home => 0,
            Route::About => 1,
            Route::Work => 2,
            Route::Contact => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_classification_boundaries() {
        assert_eq!(Section::from_scroll_offset(0.0), Section::Home);
        assert_eq!(Section::from_scroll_offset(499.9), Section::Home);
        assert_eq!(Section::from_scroll_offset(500.0), Section::About);
        assert_eq!(Section::from_scroll_offset(1299.0), Section::About);
        assert_eq!(Section::from_scroll_offset(1300.0), Section::Projects);
        assert_eq!(Section::from_scroll_offset(2300.0), Section::Skills);
        assert_eq!(Section::from_scroll_offset(3099.0), Section::Skills);
        assert_eq!(Section::from_scroll_offset(3100.0), Section::Contact);
        assert_eq!(Section::from_scroll_offset(99_999.0), Section::Contact);
    }

    #[test]
    fn test_section_labels_follow_language() {
        assert_eq!(Section::About.label(Language::Pt), "Sobre");
        assert_eq!(Section::About.label(Language::En), "About");
        assert_eq!(Section::Projects.label(Language::Pt), "Projetos");
        assert_eq!(Section::Contact.label(Language::En), "Contact");
    }

    #[test]
    fn test_start_offsets_classify_to_themselves() {
        for section in Section::ALL {
            assert_eq!(Section::from_scroll_offset(section.start_offset()), section);
        }
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/work"), Some(Route::Work));
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::Contact.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Contact);
        assert_eq!(Route::Work.label(Language::Pt), "Projetos");
    }
}
