//! Error types for construction-time validation
//!
//! The quiz state machine and the toggle control have no runtime error states;
//! these errors only surface when building questions, toggles, configs or
//! timer owners.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuideError {
    #[error("Invalid question: correct index {index} is outside {count} options")]
    InvalidQuestion { index: usize, count: usize },

    #[error("Invalid toggle geometry: width={width}, height={height}")]
    InvalidToggleGeometry { width: f32, height: f32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0} timer needs a Tokio runtime")]
    NoRuntime(&'static str),
}

pub type Result<T> = std::result::Result<T, GuideError>;
