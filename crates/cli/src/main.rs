mod io;
mod leaderboard;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cutshape::api::{
    apply_cuts_report, generate_polygon, generate_regular_polygon, split_polygon_with, Bounds,
    Cut, Difficulty, GeomCfg, Point, Polygon, Session, SubmitOutcome, TaskSeed,
};
use io::{parse_cut, read_polygon, to_doc, PartsReport};
use leaderboard::{JsonFileLeaderboard, Leaderboard, PlayerName};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cutshape")]
#[command(about = "Cut polygons into equal-area parts", version = cutshape::VERSION)]
struct Cmd {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print a generated polygon as JSON [[x, y], ...]
    Generate {
        #[arg(long)]
        sides: usize,
        /// Regular polygon instead of jittered radii
        #[arg(long)]
        regular: bool,
        #[arg(long, default_value_t = 150.0)]
        radius: f64,
        #[arg(long, default_value_t = 400.0, allow_hyphen_values = true)]
        cx: f64,
        #[arg(long, default_value_t = 300.0, allow_hyphen_values = true)]
        cy: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Split a polygon file with one cut
    Split {
        #[arg(long)]
        polygon: PathBuf,
        /// Cut as x0,y0,x1,y1
        #[arg(long, value_parser = parse_cut, allow_hyphen_values = true)]
        cut: Cut,
        /// Scale tolerances to the polygon's extent
        #[arg(long)]
        scale_relative: bool,
    },
    /// Apply several cuts in order and report parts, areas and accuracy
    Apply {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long = "cut", value_parser = parse_cut, allow_hyphen_values = true, required = true)]
        cuts: Vec<Cut>,
        #[arg(long)]
        scale_relative: bool,
    },
    /// Play the first task of a seeded session with the given cuts
    Play {
        #[arg(long, default_value = "easy")]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long = "cut", value_parser = parse_cut, allow_hyphen_values = true)]
        cuts: Vec<Cut>,
        /// Record the result under this name (2 to 20 characters)
        #[arg(long)]
        player: Option<PlayerName>,
        #[arg(long, default_value = "leaderboard.json")]
        store: PathBuf,
    },
    /// Inspect or edit the leaderboard file
    Leaderboard {
        #[arg(long, default_value = "leaderboard.json")]
        store: PathBuf,
        #[command(subcommand)]
        action: BoardAction,
    },
}

#[derive(Subcommand)]
enum BoardAction {
    Show {
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    Add {
        #[arg(long)]
        player: PlayerName,
        #[arg(long)]
        score: u32,
        #[arg(long, default_value_t = 1)]
        level: u32,
        #[arg(long, default_value = "easy")]
        difficulty: Difficulty,
    },
    Stats,
    Clear,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let default_level = if cmd.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Generate {
            sides,
            regular,
            radius,
            cx,
            cy,
            seed,
            index,
        } => generate(sides, regular, radius, Point::new(cx, cy), TaskSeed { seed, index }),
        Action::Split {
            polygon,
            cut,
            scale_relative,
        } => split(polygon, cut, scale_relative),
        Action::Apply {
            polygon,
            cuts,
            scale_relative,
        } => apply(polygon, cuts, scale_relative),
        Action::Play {
            difficulty,
            seed,
            cuts,
            player,
            store,
        } => play(difficulty, seed, cuts, player, store),
        Action::Leaderboard { store, action } => board(store, action),
    }
}

fn tolerances(poly: &Polygon, scale_relative: bool) -> GeomCfg {
    if scale_relative {
        GeomCfg::for_extent(Bounds::of(poly).extent())
    } else {
        GeomCfg::default()
    }
}

fn generate(sides: usize, regular: bool, radius: f64, center: Point, tok: TaskSeed) -> Result<()> {
    tracing::info!(sides, regular, radius, seed = tok.seed, index = tok.index, "generate");
    let poly = if regular {
        generate_regular_polygon(sides, center, radius)?
    } else {
        generate_polygon(sides, center, radius, &mut tok.to_std_rng())?
    };
    println!("{}", serde_json::to_string(&to_doc(&poly))?);
    Ok(())
}

fn split(path: PathBuf, cut: Cut, scale_relative: bool) -> Result<()> {
    let poly = read_polygon(&path)?;
    let cfg = tolerances(&poly, scale_relative);
    match split_polygon_with(&poly, cut, &cfg) {
        Ok((a, b)) => {
            let report = PartsReport::new(&[a, b], None);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Err(failure) => {
            tracing::warn!(%failure, "split failed");
            let doc = serde_json::json!({ "error": failure.to_string() });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn apply(path: PathBuf, cuts: Vec<Cut>, scale_relative: bool) -> Result<()> {
    let poly = read_polygon(&path)?;
    let cfg = tolerances(&poly, scale_relative);
    let report = apply_cuts_report(&poly, &cuts, &cfg);
    tracing::info!(
        cuts = cuts.len(),
        parts = report.parts.len(),
        "cuts applied"
    );
    let out = PartsReport::new(&report.parts, Some(report.splits_per_cut));
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn play(
    difficulty: Difficulty,
    seed: u64,
    cuts: Vec<Cut>,
    player: Option<PlayerName>,
    store: PathBuf,
) -> Result<()> {
    let rng = TaskSeed { seed, index: 0 }.to_std_rng();
    let mut session = Session::new(difficulty, Point::new(400.0, 300.0), rng)?;
    let task = session.task().clone();
    tracing::info!(
        %difficulty,
        sides = task.sides,
        target_parts = task.target_parts,
        cuts_allowed = task.cuts_allowed,
        "task"
    );
    for cut in cuts {
        if let Err(rejected) = session.add_cut(cut) {
            tracing::warn!(%rejected, "cut ignored");
        }
    }
    let outcome = match session.submit() {
        Ok(SubmitOutcome::Scored {
            accuracy,
            points,
            grade,
        }) => serde_json::json!({
            "result": "scored",
            "accuracy": accuracy,
            "points": points,
            "grade": grade.to_string(),
        }),
        Ok(SubmitOutcome::WrongPartCount {
            expected,
            got,
            lives_left,
        }) => serde_json::json!({
            "result": "wrong_part_count",
            "expected": expected,
            "got": got,
            "livesLeft": lives_left,
        }),
        Ok(SubmitOutcome::NotCut) => serde_json::json!({ "result": "not_cut" }),
        Err(rejected) => serde_json::json!({ "result": "rejected", "reason": rejected.to_string() }),
    };
    let doc = serde_json::json!({
        "polygon": to_doc(&task.polygon),
        "targetParts": task.target_parts,
        "outcome": outcome,
        "score": session.score(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);

    if let Some(name) = player {
        let summary = session.summary();
        let mut board = JsonFileLeaderboard::new(&store);
        let rec = board.save(&name, summary.score, summary.level, summary.difficulty)?;
        tracing::info!(player = %rec.player_name, score = rec.score, path = %board.path().display(), "result saved");
    }
    Ok(())
}

fn board(store: PathBuf, action: BoardAction) -> Result<()> {
    let mut board = JsonFileLeaderboard::new(&store);
    match action {
        BoardAction::Show { difficulty } => {
            let records = match difficulty {
                Some(d) => board.by_difficulty(d)?,
                None => board.records()?,
            };
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        BoardAction::Add {
            player,
            score,
            level,
            difficulty,
        } => {
            let rec = board.save(&player, score, level, difficulty)?;
            println!("{}", serde_json::to_string_pretty(&rec)?);
        }
        BoardAction::Stats => {
            println!("{}", serde_json::to_string_pretty(&board.stats()?)?);
        }
        BoardAction::Clear => {
            tracing::info!(path = %store.display(), "clear");
            board.clear()?;
        }
    }
    Ok(())
}
