//! Drag toggle control module
//!
//! The swipe switch used as the "open this" affordance on list cards, plus
//! the keyed list that keeps at most one switch on.

pub mod control;
pub mod geometry;
pub mod switch_list;

// Re-export main types
pub use control::DragToggle;
pub use geometry::{ToggleConfig, ToggleGeometry};
pub use switch_list::{Navigator, SwitchList};
