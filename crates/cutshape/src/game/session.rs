//! One run through all levels of a difficulty.
//!
//! State machine
//! - `Playing`: strokes may be added and submitted; the clock runs.
//! - `LevelComplete`: the last question of a level was answered; the clock is
//!   paused until `next_level`.
//! - `Won` / `Lost`: terminal. A run is lost when lives or time run out.

use super::scoring::{score_answer, Grade};
use super::settings::{Difficulty, DifficultySettings};
use super::task::{hint_lines, Task, MIN_CUT_LENGTH};
use crate::cuts::apply_cuts;
use crate::geom2::{accuracy, Cut, Point, PolygonError};
use rand::Rng;
use std::fmt;

pub const STARTING_LIVES: u32 = 3;
pub const SKIP_PENALTY: u32 = 50;
pub const HINT_PENALTY: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    LevelComplete,
    Won,
    Lost,
}

/// Why a stroke or submission was refused. Nothing about the session changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CutRejected {
    TooShort { length: f64 },
    TooMany { allowed: usize },
    NoCuts,
    AlreadyAnswered,
    NotPlaying(SessionState),
}

impl fmt::Display for CutRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { length } => write!(
                f,
                "stroke is too short ({length:.1} < {MIN_CUT_LENGTH})"
            ),
            Self::TooMany { allowed } => write!(f, "at most {allowed} cuts allowed"),
            Self::NoCuts => write!(f, "make at least one cut first"),
            Self::AlreadyAnswered => write!(f, "this task was already answered"),
            Self::NotPlaying(state) => write!(f, "session is not running ({state:?})"),
        }
    }
}

impl std::error::Error for CutRejected {}

/// Result of submitting the current strokes.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// No stroke split the shape; the strokes are cleared, no life is lost.
    NotCut,
    /// The strokes produced the wrong number of parts; one life is lost.
    WrongPartCount {
        expected: usize,
        got: usize,
        lives_left: u32,
    },
    Scored {
        accuracy: f64,
        points: u32,
        grade: Grade,
    },
}

/// Plain result of a finished run, ready for a leaderboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub level: u32,
    pub difficulty: Difficulty,
    pub won: bool,
}

pub struct Session<R: Rng> {
    difficulty: Difficulty,
    settings: DifficultySettings,
    center: Point,
    rng: R,
    score: u32,
    lives: u32,
    level: u32,
    question: u32,
    time_left: u32,
    task: Task,
    cuts: Vec<Cut>,
    answered: bool,
    state: SessionState,
}

impl<R: Rng> Session<R> {
    pub fn new(difficulty: Difficulty, center: Point, mut rng: R) -> Result<Self, PolygonError> {
        let settings = difficulty.settings();
        let task = Task::generate(1, 1, center, &mut rng)?;
        tracing::debug!(%difficulty, sides = task.sides, "session started");
        Ok(Self {
            difficulty,
            settings,
            center,
            rng,
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            question: 1,
            time_left: settings.time_limit,
            task,
            cuts: Vec::new(),
            answered: false,
            state: SessionState::Playing,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn settings(&self) -> &DifficultySettings {
        &self.settings
    }
    pub fn task(&self) -> &Task {
        &self.task
    }
    pub fn cuts(&self) -> &[Cut] {
        &self.cuts
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn lives(&self) -> u32 {
        self.lives
    }
    pub fn level(&self) -> u32 {
        self.level
    }
    pub fn question(&self) -> u32 {
        self.question
    }
    pub fn time_left(&self) -> u32 {
        self.time_left
    }
    pub fn state(&self) -> SessionState {
        self.state
    }
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            level: self.level,
            difficulty: self.difficulty,
            won: self.state == SessionState::Won,
        }
    }

    fn ensure_open(&self) -> Result<(), CutRejected> {
        if self.state != SessionState::Playing {
            return Err(CutRejected::NotPlaying(self.state));
        }
        if self.answered {
            return Err(CutRejected::AlreadyAnswered);
        }
        Ok(())
    }

    pub fn add_cut(&mut self, cut: Cut) -> Result<(), CutRejected> {
        self.ensure_open()?;
        let length = cut.length();
        if length < MIN_CUT_LENGTH {
            return Err(CutRejected::TooShort { length });
        }
        if self.cuts.len() >= self.task.cuts_allowed {
            return Err(CutRejected::TooMany {
                allowed: self.task.cuts_allowed,
            });
        }
        self.cuts.push(cut);
        Ok(())
    }

    pub fn clear_cuts(&mut self) {
        if !self.answered {
            self.cuts.clear();
        }
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, CutRejected> {
        self.ensure_open()?;
        if self.cuts.is_empty() {
            return Err(CutRejected::NoCuts);
        }
        let parts = apply_cuts(&self.task.polygon, &self.cuts);
        if parts.len() < 2 {
            self.cuts.clear();
            return Ok(SubmitOutcome::NotCut);
        }
        if parts.len() != self.task.target_parts {
            self.lives = self.lives.saturating_sub(1);
            if self.lives == 0 {
                self.state = SessionState::Lost;
            }
            tracing::debug!(
                expected = self.task.target_parts,
                got = parts.len(),
                lives = self.lives,
                "wrong part count"
            );
            return Ok(SubmitOutcome::WrongPartCount {
                expected: self.task.target_parts,
                got: parts.len(),
                lives_left: self.lives,
            });
        }
        let acc = accuracy(&parts);
        let points = score_answer(
            &self.settings,
            acc,
            self.time_left,
            self.cuts.len(),
            self.task.cuts_allowed,
        );
        self.score += points;
        self.answered = true;
        tracing::debug!(accuracy = acc, points, score = self.score, "answer scored");
        Ok(SubmitOutcome::Scored {
            accuracy: acc,
            points,
            grade: Grade::from_accuracy(acc),
        })
    }

    /// Move past an answered question: next question, or `LevelComplete` after
    /// the last one. Unanswered questions stay put; use `skip` to give one up.
    pub fn advance(&mut self) -> Result<SessionState, PolygonError> {
        if self.state != SessionState::Playing {
            return Ok(self.state);
        }
        if !self.answered {
            tracing::debug!(question = self.question, "advance refused: unanswered");
            return Ok(self.state);
        }
        self.next_question()
    }

    /// Start the next level (fresh clock), or finish the run as won after the last one.
    pub fn next_level(&mut self) -> Result<SessionState, PolygonError> {
        if self.state != SessionState::LevelComplete {
            return Ok(self.state);
        }
        if self.level < self.settings.levels {
            self.level += 1;
            self.question = 1;
            self.time_left = self.settings.time_limit;
            self.state = SessionState::Playing;
            self.new_task()?;
        } else {
            self.state = SessionState::Won;
        }
        Ok(self.state)
    }

    /// Give up on the current question for a score penalty (lives are kept).
    pub fn skip(&mut self) -> Result<SessionState, PolygonError> {
        if self.state != SessionState::Playing || self.answered {
            return Ok(self.state);
        }
        self.score = self.score.saturating_sub(SKIP_PENALTY);
        self.next_question()
    }

    /// Hint rays for the current task; costs a small score penalty.
    /// Outside `Playing` there is nothing to hint at: no rays, no charge.
    pub fn hint(&mut self) -> Vec<Cut> {
        if self.state != SessionState::Playing {
            return Vec::new();
        }
        self.score = self.score.saturating_sub(HINT_PENALTY);
        hint_lines(&self.task.polygon, self.task.cuts_allowed)
    }

    /// Advance the clock; running out of time loses the run.
    pub fn tick(&mut self, secs: u32) -> SessionState {
        if self.state == SessionState::Playing {
            self.time_left = self.time_left.saturating_sub(secs);
            if self.time_left == 0 {
                self.state = SessionState::Lost;
            }
        }
        self.state
    }

    fn next_question(&mut self) -> Result<SessionState, PolygonError> {
        if self.question < self.settings.questions_per_level {
            self.question += 1;
            self.new_task()?;
        } else {
            self.state = SessionState::LevelComplete;
        }
        Ok(self.state)
    }

    fn new_task(&mut self) -> Result<(), PolygonError> {
        self.task = Task::generate(self.level, self.question, self.center, &mut self.rng)?;
        self.cuts.clear();
        self.answered = false;
        Ok(())
    }
}
