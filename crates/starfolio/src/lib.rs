//! Terminal portfolio: page state, input handling and the frame driver.
//!
//! The background animation lives in `starfolio-background`; this crate owns
//! everything drawn on top of it and the timers behind it.

pub mod app;
pub mod contact;
pub mod logging;
pub mod one_page;
pub mod reveal;
pub mod routed;
pub mod scroll;
pub mod texture;
pub mod timer;
pub mod typewriter;
pub mod ui;
