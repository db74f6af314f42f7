//! Puzzle rules layered on the cutting core.
//!
//! - `Difficulty` / `DifficultySettings`: time limit, score multiplier, level count.
//! - `Task`: one polygon to cut plus its target part count.
//! - `score_answer` / `Grade`: points and quality label for an accepted answer.
//! - `Session`: lives, levels, questions, and the countdown for one run.
//!
//! Rendering, input handling, and persistence belong to the caller.

mod scoring;
mod session;
mod settings;
mod task;

pub use scoring::{score_answer, Grade};
pub use session::{
    CutRejected, Session, SessionState, SessionSummary, SubmitOutcome, HINT_PENALTY, SKIP_PENALTY,
    STARTING_LIVES,
};
pub use settings::{Difficulty, DifficultySettings, ParseDifficultyError};
pub use task::{hint_lines, Task, HINT_RAY_LENGTH, MIN_CUT_LENGTH};
