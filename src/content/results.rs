//! Result screen content per score band

use crate::quiz::{Band, QuizOutcome};

/// Everything the results screen shows for one outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ResultContent {
    pub band: Band,
    pub title: String,
    pub body: &'static str,
    /// Asset key of the band illustration
    pub illustration: &'static str,
    /// Label of the "keep exploring" action
    pub continue_label: &'static str,
}

impl ResultContent {
    pub fn for_outcome(outcome: &QuizOutcome) -> Self {
        let band = outcome.band();
        Self {
            band,
            title: format!("You score :  {}/{}", outcome.correct, outcome.total),
            body: band_body(band),
            illustration: band_illustration(band),
            continue_label: match band {
                Band::Low => "Start Exploring",
                Band::Mid | Band::High => "Continue Exploring",
            },
        }
    }
}

fn band_body(band: Band) -> &'static str {
    match band {
        Band::Low => {
            "You are just beginning to discover the city.\n\
             Take your time and explore Lugano at your own pace."
        }
        Band::Mid => {
            "You know many of Lugano’s highlights.\n\
             A few more discoveries will complete the picture."
        }
        Band::High => {
            "You truly understand the rhythm and atmosphere of the city.\n\
             Lugano feels familiar to you."
        }
    }
}

fn band_illustration(band: Band) -> &'static str {
    match band {
        Band::Low => "quiz_result_low",
        Band::Mid => "quiz_result_mid",
        Band::High => "quiz_result_high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_band_invites_to_start() {
        let content = ResultContent::for_outcome(&QuizOutcome::new(3, 9, 12));
        assert_eq!(content.band, Band::Low);
        assert_eq!(content.title, "You score :  3/12");
        assert_eq!(content.illustration, "quiz_result_low");
        assert_eq!(content.continue_label, "Start Exploring");
        assert!(content.body.starts_with("You are just beginning"));
    }

    #[test]
    fn high_band_content() {
        let content = ResultContent::for_outcome(&QuizOutcome::new(10, 2, 12));
        assert_eq!(content.band, Band::High);
        assert_eq!(content.illustration, "quiz_result_high");
        assert_eq!(content.continue_label, "Continue Exploring");
        assert!(content.body.ends_with("Lugano feels familiar to you."));
    }
}
