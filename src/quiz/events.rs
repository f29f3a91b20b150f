//! Inputs consumed by the quiz engine

/// User intents coming from the quiz screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    StartRun,
    SubmitAnswer(usize),
    RevealHint,
    Abort,
    /// Stop the event loop
    Quit,
}

/// Everything that can drive a transition, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Command(QuizCommand),
    /// One second elapsed on the ticker armed under `epoch`
    Tick { epoch: u64 },
    /// The settle delay armed under `epoch` is over
    Settled { epoch: u64 },
}

impl From<QuizCommand> for QuizEvent {
    fn from(command: QuizCommand) -> Self {
        QuizEvent::Command(command)
    }
}
