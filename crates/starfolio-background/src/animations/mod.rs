//! Background animation entities.

pub mod comet;
pub mod planet;
pub mod pointer;
pub mod star;
pub mod twinkle;
