//! Native pong runner
//!
//! Plays matches against the scripted opponent at a fixed 60 Hz step, with
//! an autopilot (or an idle player) on the left paddle.

mod ascii;
mod autopilot;

use anyhow::{Context, Result};
use ascii::AsciiSurface;
use autopilot::Autopilot;
use clap::Parser;
use game_core::{Config, MatchPhase, Params, PongMatch, Score, Side};
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pong-sim")]
#[command(about = "Play pong matches against the scripted opponent without a browser")]
struct Args {
    /// TOML file overriding the default tuning
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the opponent and the taunt picks
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Matches to play back to back, restarting after each game over
    #[arg(short, long, default_value_t = 1)]
    matches: u32,

    /// Give up on a match after this many frames
    #[arg(long, default_value_t = 36_000)]
    max_frames: u64,

    /// Leave the left paddle alone instead of running the autopilot
    #[arg(long)]
    idle: bool,

    /// Print the last frame of each match as text
    #[arg(long)]
    show_frame: bool,

    /// Log every bounce and paddle hit
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MatchReport {
    frames: u64,
    score: Score,
    winner: Option<Side>,
    paddle_hits: u32,
    last_taunt: Option<&'static str>,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    Config::from_toml_str(&source)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Run frames until someone wins or `max_frames` is used up
fn play_match(
    game: &mut PongMatch,
    mut pilot: Option<&mut Autopilot>,
    max_frames: u64,
) -> MatchReport {
    let mut report = MatchReport {
        frames: 0,
        score: game.score,
        winner: None,
        paddle_hits: 0,
        last_taunt: None,
    };

    while report.frames < max_frames {
        if let Some(pilot) = pilot.as_mut() {
            pilot.drive(game);
        }

        let events = game.tick(Params::FRAME_DT);
        report.frames += 1;
        if events.ball_hit_paddle {
            report.paddle_hits += 1;
        }
        if let Some(taunt) = events.taunt {
            report.last_taunt = Some(taunt);
        }
        if let Some(winner) = events.winner {
            report.winner = Some(winner);
            break;
        }
    }

    report.score = game.score;
    report
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "info,game_core=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let config = load_config(args.config.as_deref())?;
    tracing::info!(seed = args.seed, matches = args.matches, idle = args.idle, "Starting");

    let mut game = PongMatch::new(config, args.seed);
    let mut autopilot = Autopilot::new();
    let mut wins = (0u32, 0u32);

    for round in 1..=args.matches {
        if round > 1 && !game.restart() {
            tracing::warn!(round, "Previous match never finished, stopping");
            break;
        }

        let pilot = if args.idle { None } else { Some(&mut autopilot) };
        let report = play_match(&mut game, pilot, args.max_frames);

        match report.winner {
            Some(Side::Left) => wins.0 += 1,
            Some(Side::Right) => wins.1 += 1,
            None => {}
        }

        println!(
            "Match {round}: {} - {} after {} frames ({} paddle hits){}",
            report.score.left,
            report.score.right,
            report.frames,
            report.paddle_hits,
            match report.winner {
                Some(Side::Left) => ", player wins",
                Some(Side::Right) => ", computer wins",
                None => ", unfinished",
            }
        );
        if let Some(taunt) = report.last_taunt {
            println!("  Last word: \"{taunt}\"");
        }

        if args.show_frame {
            let mut surface = AsciiSurface::new(game.map.width, game.map.height, game.map.grid);
            game.render_to(&mut surface);
            println!("{}", surface.render());
        }

        if game.phase() != MatchPhase::GameOver {
            break;
        }
    }

    println!("Player {} - {} Computer", wins.0, wins.1);
    Ok(())
}
