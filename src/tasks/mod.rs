//! Background tasks module
//!
//! Timer tasks armed by the quiz engine and the navigation dispatcher, plus
//! the loop that feeds engine events.

pub mod navigation;
pub mod question_timer;
pub mod quiz_loop;

// Re-export main functions
pub use navigation::{DeferredNavigator, NAVIGATION_DELAY};
pub use question_timer::{question_timer_task, settle_task, TICK_PERIOD};
pub use quiz_loop::quiz_event_loop;
