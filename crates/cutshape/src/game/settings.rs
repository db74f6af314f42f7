use std::fmt;
use std::str::FromStr;

/// Per-difficulty constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySettings {
    /// Seconds per level; the clock resets when a new level starts.
    pub time_limit: u32,
    pub score_multiplier: f64,
    pub levels: u32,
    pub questions_per_level: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn settings(self) -> DifficultySettings {
        match self {
            Difficulty::Easy => DifficultySettings {
                time_limit: 90,
                score_multiplier: 1.0,
                levels: 3,
                questions_per_level: 3,
            },
            Difficulty::Medium => DifficultySettings {
                time_limit: 75,
                score_multiplier: 1.5,
                levels: 4,
                questions_per_level: 3,
            },
            Difficulty::Hard => DifficultySettings {
                time_limit: 60,
                score_multiplier: 2.0,
                levels: 5,
                questions_per_level: 3,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDifficultyError {
    pub input: String,
}

impl fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown difficulty {:?} (expected easy, medium or hard)",
            self.input
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("insane".parse::<Difficulty>().is_err());
    }

    #[test]
    fn harder_means_less_time_and_more_levels() {
        let e = Difficulty::Easy.settings();
        let m = Difficulty::Medium.settings();
        let h = Difficulty::Hard.settings();
        assert!(e.time_limit > m.time_limit && m.time_limit > h.time_limit);
        assert!(e.levels < m.levels && m.levels < h.levels);
        assert_eq!(h.score_multiplier, 2.0);
    }
}
