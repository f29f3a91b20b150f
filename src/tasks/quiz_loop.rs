//! Event loop that feeds the quiz engine

use tokio::sync::mpsc;
use tracing::info;

use crate::quiz::{QuizCommand, QuizEngine, QuizEvent, ResultsSink};

/// Apply events to the engine in arrival order until `Quit`.
///
/// All timers are disarmed before the engine is handed back.
pub async fn quiz_event_loop<S: ResultsSink>(
    mut engine: QuizEngine<S>,
    mut events_rx: mpsc::UnboundedReceiver<QuizEvent>,
) -> QuizEngine<S> {
    info!("Starting quiz event loop");

    while let Some(event) = events_rx.recv().await {
        if event == QuizEvent::Command(QuizCommand::Quit) {
            break;
        }
        engine.handle(event);
    }

    engine.shutdown();
    info!("Quiz event loop stopped");
    engine
}
