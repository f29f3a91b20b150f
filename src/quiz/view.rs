//! Read-only projection of the engine for the quiz screen

use crate::{
    quiz::Question,
    state::{QuizPhase, QuizSession},
};

/// Highlight of one answer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Idle,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub label: String,
    pub mark: OptionMark,
}

/// Snapshot published after every engine transition
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub phase: QuizPhase,
    /// 1-based; 0 before a run starts
    pub question_number: usize,
    pub total: usize,
    pub prompt: Option<String>,
    /// Present only once revealed
    pub hint: Option<String>,
    pub options: Vec<OptionView>,
    pub time_remaining: u32,
    pub correct: u32,
    pub wrong: u32,
    pub locked: bool,
}

impl QuizView {
    pub fn intro(total: usize) -> Self {
        Self {
            phase: QuizPhase::Intro,
            question_number: 0,
            total,
            prompt: None,
            hint: None,
            options: Vec::new(),
            time_remaining: 0,
            correct: 0,
            wrong: 0,
            locked: false,
        }
    }

    pub fn from_session(phase: QuizPhase, session: &QuizSession, question: &Question, total: usize) -> Self {
        let options = session
            .shuffled
            .options
            .iter()
            .enumerate()
            .map(|(i, label)| OptionView {
                label: label.clone(),
                mark: mark_for(session, i),
            })
            .collect();

        Self {
            phase,
            question_number: session.question_index + 1,
            total,
            prompt: Some(question.prompt.clone()),
            hint: session.hint_shown.then(|| question.hint.clone()),
            options,
            time_remaining: session.time_remaining,
            correct: session.correct_count,
            wrong: session.wrong_count,
            locked: session.locked,
        }
    }

    /// Countdown as `m:ss`
    pub fn clock_text(&self) -> String {
        format!("{}:{:02}", self.time_remaining / 60, self.time_remaining % 60)
    }

    pub fn progress_text(&self) -> String {
        format!("{}/{}", self.question_number, self.total)
    }
}

// A wrong pick also reveals the right answer; a timeout reveals nothing.
fn mark_for(session: &QuizSession, index: usize) -> OptionMark {
    let Some(selected) = session.selected_index.filter(|_| session.locked) else {
        return OptionMark::Idle;
    };

    let is_correct = session.shuffled.is_correct(index);
    if selected == index {
        if is_correct {
            OptionMark::Correct
        } else {
            OptionMark::Wrong
        }
    } else if is_correct {
        OptionMark::Correct
    } else {
        OptionMark::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::ShuffledQuestion;

    fn question() -> Question {
        Question::new("Which?", "Look up", ["a", "b", "c", "d"], 0).unwrap()
    }

    fn session() -> QuizSession {
        let shuffled = ShuffledQuestion {
            options: ["c", "a", "d", "b"].map(String::from),
            correct_index: 1,
        };
        QuizSession::new(shuffled, 30)
    }

    fn marks(view: &QuizView) -> Vec<OptionMark> {
        view.options.iter().map(|o| o.mark).collect()
    }

    #[test]
    fn unlocked_question_has_no_marks_and_hidden_hint() {
        let view = QuizView::from_session(QuizPhase::QuestionActive, &session(), &question(), 12);
        assert_eq!(marks(&view), vec![OptionMark::Idle; 4]);
        assert_eq!(view.hint, None);
        assert_eq!(view.clock_text(), "0:30");
        assert_eq!(view.progress_text(), "1/12");
    }

    #[test]
    fn wrong_pick_marks_pick_and_answer() {
        let mut session = session();
        session.answer(3);
        let view = QuizView::from_session(QuizPhase::QuestionLocked, &session, &question(), 12);
        use OptionMark::*;
        assert_eq!(marks(&view), vec![Idle, Correct, Idle, Wrong]);
    }

    #[test]
    fn timeout_marks_nothing() {
        let mut session = session();
        session.time_remaining = 1;
        session.tick();
        let view = QuizView::from_session(QuizPhase::QuestionLocked, &session, &question(), 12);
        assert_eq!(marks(&view), vec![OptionMark::Idle; 4]);
        assert_eq!(view.clock_text(), "0:00");
    }

    #[test]
    fn revealed_hint_is_shown() {
        let mut session = session();
        session.hint_shown = true;
        let view = QuizView::from_session(QuizPhase::QuestionActive, &session, &question(), 12);
        assert_eq!(view.hint.as_deref(), Some("Look up"));
    }
}
