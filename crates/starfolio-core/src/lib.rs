//! Core types and shared content for the starfolio portfolio.
//!
//! Both presentation variants (the single scrolling page and the routed
//! layout) read their text, sections and portfolio data from here.

mod content;
mod i18n;
mod language;
mod section;
mod style;
pub mod theme;

pub use content::{
    OrbitSkill, Project, Skill, Social, TimelineEntry, WorkItem, ORBIT_SKILLS, PROJECTS, SKILLS,
    SOCIALS, TECH_STACK, TIMELINE, WORK_ITEMS,
};
pub use i18n::{nav_items, translate};
pub use language::Language;
pub use section::{Route, Section, SCROLLED_THRESHOLD, TOP_BUTTON_THRESHOLD};
pub use style::{BackgroundStyle, Variant};
