//! Supported interface languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Interface language. The set is closed; switching is an in-memory change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "PT", alias = "pt")]
    Pt,
    #[serde(rename = "EN", alias = "en")]
    En,
    #[serde(rename = "ES", alias = "es")]
    Es,
}

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// Upper-case locale code shown in the selector.
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "PT",
            Language::En => "EN",
            Language::Es => "ES",
        }
    }

    /// Native display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Pt => "Português",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Pt => "🇧🇷",
            Language::En => "🇺🇸",
            Language::Es => "🇪🇸",
        }
    }

    /// Cycle to the next language.
    pub fn next(self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Es,
            Language::Es => Language::Pt,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language code '{}' (expected PT, EN or ES)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PT" => Ok(Language::Pt),
            "EN" => Ok(Language::En),
            "ES" => Ok(Language::Es),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}
