//! Quiz session state

use crate::quiz::ShuffledQuestion;

/// Where the engine is in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Intro,
    QuestionActive,
    QuestionLocked,
    Finished,
}

/// How the current question was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Correct,
    Wrong,
    TimedOut,
}

/// The single authoritative record of one run
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    pub question_index: usize,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub time_remaining: u32,
    pub locked: bool,
    pub selected_index: Option<usize>,
    pub hint_shown: bool,
    pub shuffled: ShuffledQuestion,
}

impl QuizSession {
    /// Fresh session positioned on the first question
    pub fn new(shuffled: ShuffledQuestion, question_time: u32) -> Self {
        Self {
            question_index: 0,
            correct_count: 0,
            wrong_count: 0,
            time_remaining: question_time,
            locked: false,
            selected_index: None,
            hint_shown: false,
            shuffled,
        }
    }

    /// Move to `index` with a newly shuffled question; counters carry over
    pub fn activate(&mut self, index: usize, shuffled: ShuffledQuestion, question_time: u32) {
        self.question_index = index;
        self.shuffled = shuffled;
        self.time_remaining = question_time;
        self.locked = false;
        self.selected_index = None;
        self.hint_shown = false;
    }

    /// Lock on a pick and score it. Returns `None` if already locked.
    pub fn answer(&mut self, pick: usize) -> Option<Resolution> {
        if self.locked {
            return None;
        }
        self.locked = true;
        self.selected_index = Some(pick);

        if self.shuffled.is_correct(pick) {
            self.correct_count += 1;
            Some(Resolution::Correct)
        } else {
            self.wrong_count += 1;
            Some(Resolution::Wrong)
        }
    }

    /// One second elapsed. Returns `Some(TimedOut)` when the clock hits zero.
    pub fn tick(&mut self) -> Option<Resolution> {
        if self.locked {
            return None;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return None;
        }

        self.locked = true;
        self.selected_index = None;
        self.wrong_count += 1;
        Some(Resolution::TimedOut)
    }

    /// Questions answered or timed out so far
    pub fn resolved(&self) -> u32 {
        self.correct_count + self.wrong_count
    }
}
