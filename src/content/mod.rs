//! Static guide content
//!
//! The authored quiz questions and the text shown for each result band.

pub mod questions;
pub mod results;

pub use questions::city_questions;
pub use results::ResultContent;
