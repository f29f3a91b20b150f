//! City Guide - quiz session engine and swipe-switch control
//!
//! This library provides the timed, shuffled twelve-question city quiz with
//! its result bands, and the drag toggle that list screens use to open a
//! category or place.

pub mod config;
pub mod content;
pub mod error;
pub mod quiz;
pub mod state;
pub mod tasks;
pub mod toggle;
pub mod utils;

// Re-export commonly used types
pub use config::{Config, EngineConfig};
pub use error::GuideError;
pub use quiz::{Band, QuizEngine, QuizOutcome, QuizView};
pub use toggle::{DragToggle, SwitchList, ToggleConfig};
pub use utils::signals::shutdown_signal;
