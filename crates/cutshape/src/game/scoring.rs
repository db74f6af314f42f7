use super::settings::DifficultySettings;
use std::fmt;

/// Points for an accepted answer.
///
/// `base + accuracy bonus + time bonus + unused-stroke bonus`, each scaled by the
/// difficulty multiplier and rounded down.
pub fn score_answer(
    settings: &DifficultySettings,
    accuracy: f64,
    time_left: u32,
    cuts_used: usize,
    cuts_allowed: usize,
) -> u32 {
    let m = settings.score_multiplier;
    let base = 100.0 * m;
    let accuracy_bonus = (accuracy.clamp(0.0, 1.0) * 100.0 * m).floor();
    let time_bonus = (time_left as f64 * m).floor();
    let cuts_bonus = cuts_allowed.saturating_sub(cuts_used) as f64 * 30.0 * m;
    (base + accuracy_bonus + time_bonus + cuts_bonus).floor() as u32
}

/// Quality label for an accuracy value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
    Perfect,
}

impl Grade {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 0.95 {
            Grade::Perfect
        } else if accuracy >= 0.85 {
            Grade::Excellent
        } else if accuracy >= 0.70 {
            Grade::Good
        } else if accuracy >= 0.50 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Grade::Poor => "could be better",
            Grade::Fair => "not bad",
            Grade::Good => "good",
            Grade::Excellent => "excellent",
            Grade::Perfect => "perfect",
        })
    }
}
