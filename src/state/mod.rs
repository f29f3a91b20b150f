//! State management module
//!
//! Mutable state owned by the quiz engine and by each drag toggle.

pub mod session;
pub mod timer_state;
pub mod toggle_state;

// Re-export main types
pub use session::{QuizPhase, QuizSession, Resolution};
pub use timer_state::TimerHandle;
pub use toggle_state::{KnobMotion, ToggleState};
