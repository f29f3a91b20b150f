//! Quiz session state machine

use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::{
    question::{shuffle_question, RandomSource, OPTION_COUNT},
    QuizCommand, QuizEvent, QuizOutcome, QuizView, Question,
};
use crate::{
    config::EngineConfig,
    error::{GuideError, Result},
    state::{QuizPhase, QuizSession, Resolution, TimerHandle},
    tasks::{question_timer_task, settle_task},
};

/// Receives the tally when a run finishes
pub trait ResultsSink {
    fn report_result(&mut self, outcome: &QuizOutcome);
}

impl ResultsSink for mpsc::UnboundedSender<QuizOutcome> {
    fn report_result(&mut self, outcome: &QuizOutcome) {
        if let Err(e) = self.send(outcome.clone()) {
            warn!("Failed to deliver quiz outcome: {}", e);
        }
    }
}

/// Drives one question at a time through answer or timeout, then advances.
///
/// The engine owns both timers. Ticks and settle notifications come back as
/// [`QuizEvent`]s on the channel returned by [`QuizEngine::new`] and are only
/// honoured when their epoch matches the live timer.
pub struct QuizEngine<S> {
    questions: Vec<Question>,
    config: EngineConfig,
    phase: QuizPhase,
    session: Option<QuizSession>,
    random: Box<dyn RandomSource + Send>,
    results: S,
    ticker: TimerHandle,
    settle: TimerHandle,
    events_tx: mpsc::UnboundedSender<QuizEvent>,
    view_tx: watch::Sender<QuizView>,
}

impl<S: ResultsSink> QuizEngine<S> {
    /// Create an engine in `Intro` along with the receiver of its events.
    ///
    /// Must be called within a Tokio runtime; the engine's timers run there.
    pub fn new(
        questions: Vec<Question>,
        config: EngineConfig,
        results: S,
    ) -> Result<(Self, mpsc::UnboundedReceiver<QuizEvent>)> {
        config.validate()?;
        if questions.is_empty() {
            return Err(GuideError::InvalidConfig("quiz has no questions".to_string()));
        }

        let random: Box<dyn RandomSource + Send> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        };
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (view_tx, _) = watch::channel(QuizView::intro(questions.len()));

        let engine = Self {
            questions,
            config,
            phase: QuizPhase::Intro,
            session: None,
            random,
            results,
            ticker: TimerHandle::new("question")?,
            settle: TimerHandle::new("settle")?,
            events_tx,
            view_tx,
        };
        Ok((engine, events_rx))
    }

    /// Replace the shuffle's random source
    pub fn with_random<R>(mut self, random: R) -> Self
    where
        R: RandomSource + Send + 'static,
    {
        self.random = Box::new(random);
        self
    }

    /// Sender for commands into this engine's event stream
    pub fn events(&self) -> mpsc::UnboundedSender<QuizEvent> {
        self.events_tx.clone()
    }

    /// Watch the view published after every transition
    pub fn subscribe(&self) -> watch::Receiver<QuizView> {
        self.view_tx.subscribe()
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn results(&self) -> &S {
        &self.results
    }

    /// Whether a countdown ticker is live
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Whether a settle delay is pending
    pub fn is_settling(&self) -> bool {
        self.settle.is_armed()
    }

    pub fn view(&self) -> QuizView {
        match &self.session {
            Some(session) if self.phase != QuizPhase::Intro => QuizView::from_session(
                self.phase,
                session,
                &self.questions[session.question_index],
                self.total(),
            ),
            _ => QuizView::intro(self.total()),
        }
    }

    /// Apply one event
    pub fn handle(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Command(QuizCommand::StartRun) => self.start_run(),
            QuizEvent::Command(QuizCommand::SubmitAnswer(pick)) => self.submit_answer(pick),
            QuizEvent::Command(QuizCommand::RevealHint) => self.reveal_hint(),
            QuizEvent::Command(QuizCommand::Abort) => self.abort(),
            QuizEvent::Command(QuizCommand::Quit) => self.shutdown(),
            QuizEvent::Tick { epoch } => self.on_tick(epoch),
            QuizEvent::Settled { epoch } => self.on_settled(epoch),
        }
    }

    /// Begin a fresh run from any state
    pub fn start_run(&mut self) {
        self.disarm_all();

        let shuffled = shuffle_question(&self.questions[0], &mut *self.random);
        self.session = Some(QuizSession::new(shuffled, self.config.question_time_secs));
        info!("Quiz run started with {} questions", self.total());

        self.enter_active();
    }

    /// Answer the current question; ignored unless it is still open
    pub fn submit_answer(&mut self, pick: usize) {
        if self.phase != QuizPhase::QuestionActive {
            debug!("Ignoring answer {} in phase {:?}", pick, self.phase);
            return;
        }
        if pick >= OPTION_COUNT {
            warn!("Ignoring out-of-range answer {}", pick);
            return;
        }

        let Some(resolution) = self.session.as_mut().and_then(|s| s.answer(pick)) else {
            return;
        };
        self.lock(resolution);
    }

    pub fn reveal_hint(&mut self) {
        if self.phase != QuizPhase::QuestionActive {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.hint_shown = true;
        }
        self.publish();
    }

    /// Leave the run without reporting a score
    pub fn abort(&mut self) {
        if self.phase == QuizPhase::Intro {
            return;
        }
        self.disarm_all();
        if self.phase != QuizPhase::Finished {
            info!("Quiz run aborted");
        }
        self.session = None;
        self.phase = QuizPhase::Intro;
        self.publish();
    }

    /// Cancel every timer; the engine stays where it is
    pub fn shutdown(&mut self) {
        self.disarm_all();
    }

    fn on_tick(&mut self, epoch: u64) {
        if self.phase != QuizPhase::QuestionActive || !self.ticker.accepts(epoch) {
            debug!("Dropping stale tick (epoch {})", epoch);
            return;
        }

        let timed_out = self.session.as_mut().and_then(QuizSession::tick);
        match timed_out {
            Some(resolution) => self.lock(resolution),
            None => self.publish(),
        }
    }

    fn on_settled(&mut self, epoch: u64) {
        if self.phase != QuizPhase::QuestionLocked || !self.settle.accepts(epoch) {
            debug!("Dropping stale settle (epoch {})", epoch);
            return;
        }
        self.settle.disarm();
        self.advance();
    }

    fn lock(&mut self, resolution: Resolution) {
        self.ticker.disarm();
        self.phase = QuizPhase::QuestionLocked;

        if let Some(session) = &self.session {
            debug!(
                "Question {} resolved: {:?} (correct={}, wrong={})",
                session.question_index + 1,
                resolution,
                session.correct_count,
                session.wrong_count
            );
        }

        let delay = self.config.settle_delay;
        let tx = self.events_tx.clone();
        self.settle.arm(move |epoch| settle_task(epoch, delay, tx));
        self.publish();
    }

    fn advance(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let next = session.question_index + 1;
        if next < self.questions.len() {
            let shuffled = shuffle_question(&self.questions[next], &mut *self.random);
            session.activate(next, shuffled, self.config.question_time_secs);
            self.enter_active();
            return;
        }

        let outcome = QuizOutcome::new(session.correct_count, session.wrong_count, self.questions.len() as u32);
        self.disarm_all();
        self.phase = QuizPhase::Finished;
        info!(
            "Quiz run finished: {}/{} correct",
            outcome.correct, outcome.total
        );
        self.results.report_result(&outcome);
        self.publish();
    }

    fn enter_active(&mut self) {
        self.phase = QuizPhase::QuestionActive;
        if let Some(session) = &self.session {
            debug!("Activating question {}/{}", session.question_index + 1, self.total());
        }

        let tx = self.events_tx.clone();
        self.ticker.arm(move |epoch| question_timer_task(epoch, tx));
        self.publish();
    }

    fn disarm_all(&mut self) {
        self.ticker.disarm();
        self.settle.disarm();
    }

    fn publish(&self) {
        self.view_tx.send_replace(self.view());
    }
}
