//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::error::{GuideError, Result};

/// Default seconds allowed per question
pub const DEFAULT_QUESTION_TIME_SECS: u32 = 30;

/// Default pause between locking an answer and the next question
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(650);

/// Tuning of the quiz engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub question_time_secs: u32,
    pub settle_delay: Duration,
    /// Fixed seed for answer shuffling; entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            question_time_secs: DEFAULT_QUESTION_TIME_SECS,
            settle_delay: DEFAULT_SETTLE_DELAY,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.question_time_secs == 0 {
            return Err(GuideError::InvalidConfig(
                "question time must be at least one second".to_string(),
            ));
        }
        Ok(())
    }
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "city-guide")]
#[command(about = "Play the city quiz in a terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Seconds allowed per question
    #[arg(short, long, default_value_t = DEFAULT_QUESTION_TIME_SECS)]
    pub time: u32,

    /// Pause after each answer, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SETTLE_DELAY.as_millis() as u64)]
    pub settle_ms: u64,

    /// Seed for answer shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Engine tuning derived from the arguments
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            question_time_secs: self.time,
            settle_delay: Duration::from_millis(self.settle_ms),
            seed: self.seed,
        }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_quiz_screen() {
        let config = EngineConfig::default();
        assert_eq!(config.question_time_secs, 30);
        assert_eq!(config.settle_delay, Duration::from_millis(650));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_question_time_is_rejected() {
        let config = EngineConfig {
            question_time_secs: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(GuideError::InvalidConfig(_))));
    }

    #[test]
    fn cli_arguments_map_to_engine_config() {
        let config = Config::try_parse_from(["city-guide", "--time", "10", "--settle-ms", "0", "--seed", "9"]).unwrap();
        let engine = config.engine_config();
        assert_eq!(engine.question_time_secs, 10);
        assert_eq!(engine.settle_delay, Duration::ZERO);
        assert_eq!(engine.seed, Some(9));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn cli_defaults_match_engine_defaults() {
        let config = Config::try_parse_from(["city-guide"]).unwrap();
        assert_eq!(config.engine_config(), EngineConfig::default());
    }
}
