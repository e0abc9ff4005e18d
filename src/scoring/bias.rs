use std::str::FromStr;
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

pub const SCORE_NEUTRAL: f32 = 75.0;

/// Sentiment labels the bias proxy understands. Anything the classifier
/// emits outside this set (NEUTRAL included) gets the midpoint score.
/// This is a stand-in for real bias detection, not a faithful measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, IntoStaticStr)]
pub enum SentimentLabel {
    #[strum(to_string = "POSITIVE")]
    Positive,
    #[strum(to_string = "NEGATIVE")]
    Negative,
}

impl SentimentLabel {
    pub fn score(&self) -> f32 {
        match self {
            Self::Positive => 100.0,
            Self::Negative => 50.0,
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter().find(|l| l.to_string() == s).ok_or(())
    }
}

pub fn bias_score(label: &str) -> f32 {
    SentimentLabel::from_str(label)
        .map(|l| l.score())
        .unwrap_or(SCORE_NEUTRAL)
}
