//! Presentation variant and background style selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which presentation of the portfolio to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// One long page, scrolled, with scroll-driven nav highlighting.
    #[default]
    OnePage,
    /// One page per route with a navigation bar.
    Routed,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::OnePage => "one-page",
            Variant::Routed => "routed",
        }
    }
}

/// Background animation style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundStyle {
    /// Pick the style each variant was designed with.
    #[default]
    Auto,
    /// Stars, comets and orbiting planets with pointer parallax.
    Cosmos,
    /// Twinkling star field with nebula glows.
    Twinkle,
    None,
}

impl BackgroundStyle {
    /// Resolve `Auto` against the active variant.
    pub fn resolve(self, variant: Variant) -> Self {
        match (self, variant) {
            (BackgroundStyle::Auto, Variant::OnePage) => BackgroundStyle::Twinkle,
            (BackgroundStyle::Auto, Variant::Routed) => BackgroundStyle::Cosmos,
            (style, _) => style,
        }
    }

    /// Cycle through the concrete styles.
    pub fn next(self) -> Self {
        match self {
            BackgroundStyle::Auto | BackgroundStyle::None => BackgroundStyle::Cosmos,
            BackgroundStyle::Cosmos => BackgroundStyle::Twinkle,
            BackgroundStyle::Twinkle => BackgroundStyle::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackgroundStyle::Auto => "auto",
            BackgroundStyle::Cosmos => "cosmos",
            BackgroundStyle::Twinkle => "twinkle",
            BackgroundStyle::None => "none",
        }
    }
}

/// Error returned when a variant or style name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    kind: &'static str,
    value: String,
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for Variant {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-page" | "onepage" => Ok(Variant::OnePage),
            "routed" => Ok(Variant::Routed),
            _ => Err(UnknownName {
                kind: "variant",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for BackgroundStyle {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(BackgroundStyle::Auto),
            "cosmos" => Ok(BackgroundStyle::Cosmos),
            "twinkle" => Ok(BackgroundStyle::Twinkle),
            "none" => Ok(BackgroundStyle::None),
            _ => Err(UnknownName {
                kind: "background style",
                value: s.to_string(),
            }),
        }
    }
}
