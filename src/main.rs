//! City Guide - play the city quiz in a terminal
//!
//! This is the main entry point for the city-guide application.

use std::io::BufRead;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use city_guide::{
    config::Config,
    content::{city_questions, ResultContent},
    quiz::{OptionMark, QuizCommand, QuizEngine, QuizEvent, QuizOutcome, QuizView},
    state::QuizPhase,
    tasks::quiz_event_loop,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout belongs to the quiz
    tracing_subscriber::fmt()
        .with_env_filter(format!("city_guide={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting city-guide v1.0.0");
    info!(
        "Configuration: time={}s, settle={}ms, seed={:?}",
        config.time, config.settle_ms, config.seed
    );

    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let (engine, events_rx) = QuizEngine::new(city_questions(), config.engine_config(), outcome_tx)?;

    let events = engine.events();
    tokio::spawn(render_task(engine.subscribe(), outcome_rx, config.json));
    std::thread::spawn(move || input_loop(events));

    tokio::select! {
        _ = quiz_event_loop(engine, events_rx) => {}
        result = shutdown_signal() => {
            if let Err(e) = result {
                tracing::error!("Signal handler error: {}", e);
            }
            info!("Shutdown signal received");
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Map typed lines to engine commands
fn parse_command(line: &str) -> Option<QuizCommand> {
    match line.trim().to_lowercase().as_str() {
        "go" | "start" | "again" => Some(QuizCommand::StartRun),
        "h" | "hint" => Some(QuizCommand::RevealHint),
        "b" | "back" => Some(QuizCommand::Abort),
        "q" | "quit" | "exit" => Some(QuizCommand::Quit),
        other => match other.parse::<usize>() {
            Ok(n @ 1..=4) => Some(QuizCommand::SubmitAnswer(n - 1)),
            _ => None,
        },
    }
}

/// Read commands on a dedicated thread; stdin reads block
fn input_loop(events: mpsc::UnboundedSender<QuizEvent>) {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let command = match lines.next() {
            Some(Ok(line)) => match parse_command(&line) {
                Some(command) => command,
                None => {
                    println!("Type 1-4 to answer, h for a hint, b to go back, go to start, q to quit");
                    continue;
                }
            },
            Some(Err(e)) => {
                warn!("Failed to read input: {}", e);
                QuizCommand::Quit
            }
            None => QuizCommand::Quit,
        };

        let quit = command == QuizCommand::Quit;
        if events.send(command.into()).is_err() || quit {
            break;
        }
    }
}

async fn render_task(
    mut views: watch::Receiver<QuizView>,
    mut outcomes: mpsc::UnboundedReceiver<QuizOutcome>,
    json: bool,
) {
    let mut last = views.borrow_and_update().clone();
    print_intro();

    loop {
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = views.borrow_and_update().clone();
                render_view(&last, &view);
                last = view;
            }
            Some(outcome) = outcomes.recv() => print_outcome(&outcome, json),
        }
    }
}

fn print_intro() {
    println!();
    println!("City Quiz");
    println!("Twelve questions. One city. Discover how well you know it.");
    println!("Type `go` to start.");
}

fn render_view(last: &QuizView, view: &QuizView) {
    match view.phase {
        QuizPhase::Intro if last.phase != QuizPhase::Intro => print_intro(),
        QuizPhase::QuestionActive if view.question_number != last.question_number || last.phase != QuizPhase::QuestionActive => {
            println!();
            println!("[{}]  {}", view.progress_text(), view.prompt.as_deref().unwrap_or_default());
            for (i, option) in view.options.iter().enumerate() {
                println!("  {}) {}", i + 1, option.label);
            }
            println!("  {}   correct {}  wrong {}", view.clock_text(), view.correct, view.wrong);
        }
        QuizPhase::QuestionActive => {
            if let (Some(hint), None) = (&view.hint, &last.hint) {
                println!("  Hint: {}", hint);
            }
            if view.time_remaining != last.time_remaining && matches!(view.time_remaining, 10 | 5) {
                println!("  {} left", view.clock_text());
            }
        }
        QuizPhase::QuestionLocked if !last.locked => {
            if view.options.iter().all(|o| o.mark == OptionMark::Idle) {
                println!("  Time is up!");
            }
            for (i, option) in view.options.iter().enumerate() {
                let tag = match option.mark {
                    OptionMark::Correct => "  <- correct",
                    OptionMark::Wrong => "  <- your pick",
                    OptionMark::Idle => "",
                };
                if !tag.is_empty() {
                    println!("  {}) {}{}", i + 1, option.label, tag);
                }
            }
        }
        _ => {}
    }
}

fn print_outcome(outcome: &QuizOutcome, json: bool) {
    let content = ResultContent::for_outcome(outcome);
    println!();
    println!("{}", content.title);
    println!("{}", content.body);
    println!("Type `go` to start again, `b` to {}.", content.continue_label.to_lowercase());

    if json {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to encode outcome: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_answers_and_controls() {
        assert_eq!(parse_command(" 1 "), Some(QuizCommand::SubmitAnswer(0)));
        assert_eq!(parse_command("4"), Some(QuizCommand::SubmitAnswer(3)));
        assert_eq!(parse_command("GO"), Some(QuizCommand::StartRun));
        assert_eq!(parse_command("h"), Some(QuizCommand::RevealHint));
        assert_eq!(parse_command("b"), Some(QuizCommand::Abort));
        assert_eq!(parse_command("quit"), Some(QuizCommand::Quit));
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(parse_command("5"), None);
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("maybe"), None);
    }
}
