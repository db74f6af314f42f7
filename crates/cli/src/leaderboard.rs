use anyhow::{Context, Result};
use cutshape::api::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Only the best results are kept.
pub const MAX_RECORDS: usize = 100;

/// Allowed player-name length in characters, after trimming.
pub const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=20;

/// A trimmed player name of `NAME_LEN` characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerName(String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidName {
    Empty,
    TooShort { len: usize },
    TooLong { len: usize },
}

impl fmt::Display for InvalidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("player name is empty"),
            Self::TooShort { len } => write!(
                f,
                "player name needs at least {} characters, got {len}",
                NAME_LEN.start()
            ),
            Self::TooLong { len } => write!(
                f,
                "player name allows at most {} characters, got {len}",
                NAME_LEN.end()
            ),
        }
    }
}

impl std::error::Error for InvalidName {}

impl FromStr for PlayerName {
    type Err = InvalidName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let len = name.chars().count();
        if len == 0 {
            Err(InvalidName::Empty)
        } else if len < *NAME_LEN.start() {
            Err(InvalidName::TooShort { len })
        } else if len > *NAME_LEN.end() {
            Err(InvalidName::TooLong { len })
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl PlayerName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: u64,
    pub player_name: String,
    pub score: u32,
    pub level: u32,
    /// `Difficulty::as_str` of the run.
    pub difficulty: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_games: usize,
    pub total_players: usize,
    pub best_score: u32,
    pub average_score: u32,
}

/// Save/retrieve over plain result records, independent of where they live.
pub trait Leaderboard {
    /// All records, best score first.
    fn records(&self) -> Result<Vec<GameRecord>>;

    /// Replace the stored records.
    fn store(&mut self, records: &[GameRecord]) -> Result<()>;

    fn save(
        &mut self,
        player_name: &PlayerName,
        score: u32,
        level: u32,
        difficulty: Difficulty,
    ) -> Result<GameRecord> {
        self.save_at(player_name, score, level, difficulty, now_millis())
    }

    /// `save` with an explicit timestamp; the timestamp doubles as the record id.
    fn save_at(
        &mut self,
        player_name: &PlayerName,
        score: u32,
        level: u32,
        difficulty: Difficulty,
        timestamp: u64,
    ) -> Result<GameRecord> {
        let record = GameRecord {
            id: timestamp,
            player_name: player_name.as_str().to_string(),
            score,
            level,
            difficulty: difficulty.as_str().to_string(),
            timestamp,
        };
        let mut all = self.records()?;
        all.push(record.clone());
        // Stable sort: ties keep insertion order.
        all.sort_by(|a, b| b.score.cmp(&a.score));
        all.truncate(MAX_RECORDS);
        self.store(&all)?;
        Ok(record)
    }

    fn by_difficulty(&self, difficulty: Difficulty) -> Result<Vec<GameRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| r.difficulty == difficulty.as_str())
            .collect())
    }

    fn stats(&self) -> Result<Stats> {
        let all = self.records()?;
        if all.is_empty() {
            return Ok(Stats::default());
        }
        let players: HashSet<&str> = all.iter().map(|r| r.player_name.as_str()).collect();
        let total: u64 = all.iter().map(|r| r.score as u64).sum();
        Ok(Stats {
            total_games: all.len(),
            total_players: players.len(),
            best_score: all.iter().map(|r| r.score).max().unwrap_or(0),
            average_score: (total as f64 / all.len() as f64).round() as u32,
        })
    }

    fn clear(&mut self) -> Result<()> {
        self.store(&[])
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Records kept in memory only.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryLeaderboard {
    records: Vec<GameRecord>,
}

#[cfg(test)]
impl Leaderboard for MemoryLeaderboard {
    fn records(&self) -> Result<Vec<GameRecord>> {
        Ok(self.records.clone())
    }

    fn store(&mut self, records: &[GameRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

/// Records kept as a pretty-printed JSON array in one file.
#[derive(Clone, Debug)]
pub struct JsonFileLeaderboard {
    path: PathBuf,
}

impl JsonFileLeaderboard {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Leaderboard for JsonFileLeaderboard {
    fn records(&self) -> Result<Vec<GameRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing leaderboard {}", self.path.display()))
    }

    fn store(&mut self, records: &[GameRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating leaderboard dir {}", parent.display()))?;
            }
        }
        fs::write(&self.path, serde_json::to_vec_pretty(records)?)
            .with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "leaderboard stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use cutshape::api::Difficulty::{Easy, Hard, Medium};

    fn name(s: &str) -> PlayerName {
        s.parse().unwrap()
    }

    #[test]
    fn save_sorts_by_score_descending() {
        let mut lb = MemoryLeaderboard::default();
        lb.save_at(&name("ann"), 120, 2, Easy, 1).unwrap();
        lb.save_at(&name("bob"), 300, 3, Hard, 2).unwrap();
        lb.save_at(&name("cid"), 200, 1, Easy, 3).unwrap();
        let scores: Vec<u32> = lb.records().unwrap().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![300, 200, 120]);
    }

    #[test]
    fn keeps_only_the_best_hundred() {
        let mut lb = MemoryLeaderboard::default();
        for i in 0..(MAX_RECORDS as u64 + 5) {
            lb.save_at(&name("pat"), i as u32, 1, Easy, i).unwrap();
        }
        let all = lb.records().unwrap();
        assert_eq!(all.len(), MAX_RECORDS);
        assert_eq!(all[0].score, MAX_RECORDS as u32 + 4);
        assert_eq!(all.last().unwrap().score, 5);
    }

    #[test]
    fn filter_and_stats() {
        let mut lb = MemoryLeaderboard::default();
        assert_eq!(lb.stats().unwrap(), Stats::default());
        lb.save_at(&name("ann"), 100, 1, Easy, 1).unwrap();
        lb.save_at(&name("ann"), 250, 2, Medium, 2).unwrap();
        lb.save_at(&name("bob"), 151, 1, Easy, 3).unwrap();
        assert_eq!(lb.by_difficulty(Easy).unwrap().len(), 2);
        let s = lb.stats().unwrap();
        assert_eq!(s.total_games, 3);
        assert_eq!(s.total_players, 2);
        assert_eq!(s.best_score, 250);
        // (100 + 250 + 151) / 3 = 167
        assert_eq!(s.average_score, 167);
        lb.clear().unwrap();
        assert!(lb.records().unwrap().is_empty());
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("board.json");
        let mut lb = JsonFileLeaderboard::new(&path);
        assert!(lb.records().unwrap().is_empty());
        let rec = lb.save_at(&name("zoe"), 420, 4, Hard, 1_700_000_000_000).unwrap();
        assert_eq!(rec.id, rec.timestamp);

        let reopened = JsonFileLeaderboard::new(&path);
        assert_eq!(reopened.records().unwrap(), vec![rec]);
        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw[0]["playerName"], "zoe");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, b"not json").unwrap();
        let lb = JsonFileLeaderboard::new(&path);
        let err = lb.records().unwrap_err();
        assert!(err.to_string().contains("parsing leaderboard"));
    }

    #[test]
    fn names_are_trimmed_and_length_checked() {
        assert_eq!(name("  Al  ").as_str(), "Al");
        assert_eq!(name("Zoë").as_str(), "Zoë");
        assert_eq!("   ".parse::<PlayerName>(), Err(InvalidName::Empty));
        assert_eq!("x".parse::<PlayerName>(), Err(InvalidName::TooShort { len: 1 }));
        let long = "a".repeat(21);
        assert_eq!(long.parse::<PlayerName>(), Err(InvalidName::TooLong { len: 21 }));
        assert_eq!(name(&"é".repeat(20)).as_str().chars().count(), 20);
    }

    #[test]
    fn records_carry_canonical_difficulty_names() {
        let mut lb = MemoryLeaderboard::default();
        lb.save_at(&name("ann"), 10, 1, Medium, 1).unwrap();
        assert_eq!(lb.records().unwrap()[0].difficulty, "medium");
        assert!(lb.by_difficulty(Hard).unwrap().is_empty());
        assert_eq!(lb.by_difficulty(Medium).unwrap().len(), 1);
    }

    #[test]
    fn stored_record_fields() {
        let mut lb = MemoryLeaderboard::default();
        let rec = lb.save_at(&name("ann"), 10, 1, Easy, 5).unwrap();
        let json = serde_json::to_value(&rec).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["difficulty", "id", "level", "playerName", "score", "timestamp"]
        );
    }
}
