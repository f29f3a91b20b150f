//! City quiz module
//!
//! Questions and shuffling, the session state machine, its published view,
//! and result classification.

pub mod engine;
pub mod events;
pub mod question;
pub mod result;
pub mod view;

// Re-export main types
pub use engine::{QuizEngine, ResultsSink};
pub use events::{QuizCommand, QuizEvent};
pub use question::{shuffle_question, Question, RandomSource, ShuffledQuestion, OPTION_COUNT};
pub use result::{Band, QuizOutcome};
pub use view::{OptionMark, OptionView, QuizView};
