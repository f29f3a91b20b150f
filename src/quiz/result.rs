//! Final tally of a run and its score band

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score category used to pick result content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    /// Classify a correct-answer count.
    ///
    /// Counts outside `0..=12` fall into the nearest band.
    pub fn classify(correct: i64) -> Self {
        match correct {
            i64::MIN..=4 => Band::Low,
            5..=8 => Band::Mid,
            _ => Band::High,
        }
    }
}

/// Tally handed to the results collaborator when a run finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub correct: u32,
    pub wrong: u32,
    pub total: u32,
    pub finished_at: DateTime<Utc>,
}

impl QuizOutcome {
    pub fn new(correct: u32, wrong: u32, total: u32) -> Self {
        Self {
            correct,
            wrong,
            total,
            finished_at: Utc::now(),
        }
    }

    pub fn band(&self) -> Band {
        Band::classify(i64::from(self.correct))
    }
}
