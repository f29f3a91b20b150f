//! Questions and per-activation answer shuffling

use rand::Rng;

use crate::error::{GuideError, Result};

/// Every question carries exactly this many options
pub const OPTION_COUNT: usize = 4;

/// An authored multiple-choice question
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub hint: String,
    /// Options in authored order
    pub options: [String; OPTION_COUNT],
    /// Index into `options` as authored
    pub correct_index: usize,
}

impl Question {
    /// Build a question, rejecting a correct index outside the options
    pub fn new(
        prompt: impl Into<String>,
        hint: impl Into<String>,
        options: [&str; OPTION_COUNT],
        correct_index: usize,
    ) -> Result<Self> {
        if correct_index >= OPTION_COUNT {
            return Err(GuideError::InvalidQuestion {
                index: correct_index,
                count: OPTION_COUNT,
            });
        }

        Ok(Self {
            prompt: prompt.into(),
            hint: hint.into(),
            options: options.map(str::to_string),
            correct_index,
        })
    }

    /// The text of the correct option
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Options of a question in display order for one activation
#[derive(Debug, Clone, PartialEq)]
pub struct ShuffledQuestion {
    pub options: [String; OPTION_COUNT],
    /// Position of the originally correct option after shuffling
    pub correct_index: usize,
}

impl ShuffledQuestion {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, pick: usize) -> bool {
        pick == self.correct_index
    }
}

/// Source of uniform indices for the shuffle
pub trait RandomSource {
    /// Uniform index in `0..bound`; `bound` is never zero
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index_below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Fisher-Yates permutation of the options with the correct index remapped
pub fn shuffle_question<R>(question: &Question, random: &mut R) -> ShuffledQuestion
where
    R: RandomSource + ?Sized,
{
    let mut order: [usize; OPTION_COUNT] = [0, 1, 2, 3];
    for i in (1..OPTION_COUNT).rev() {
        let j = random.index_below(i + 1).min(i);
        order.swap(i, j);
    }

    let options = order.map(|source| question.options[source].clone());
    let correct_index = order
        .iter()
        .position(|&source| source == question.correct_index)
        .unwrap_or(question.correct_index);

    ShuffledQuestion {
        options,
        correct_index,
    }
}
