//! Headless runner for the Parallax platformer core.
//!
//! Steers the body toward the goal for a fixed number of ticks and logs how
//! the episode ended. Useful for checking maps and tuning without a
//! renderer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use parallax::{init_logging, GameConfig, InputSnapshot, Map, Mode, Session, SessionStatus};

/// Headless Parallax episode runner
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON configuration file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Built-in map name (`course`, `stepping-stones`) or a JSON map file
    #[arg(short, long, default_value = "course")]
    map: String,
    /// Maximum number of ticks to simulate
    #[arg(short, long, default_value_t = 2000)]
    ticks: u64,
    /// View mode to start in, overriding the configuration
    #[arg(long)]
    mode: Option<Mode>,
    /// Press jump whenever the body is grounded
    #[arg(long)]
    hop: bool,
}

fn load_map(name: &str) -> Result<Map> {
    Map::builtin(name).or_else(|_| Map::load(name).with_context(|| format!("loading map `{name}`")))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.episode.initial_mode = mode;
    }
    let deadband = config.physics.move_speed / 2.0;
    let map = load_map(&args.map)?;
    info!(
        "running {} ticks on a map with {} floors and {} obstacles",
        args.ticks,
        map.floors.len(),
        map.obstacles.len()
    );

    let goal = map.goal.position;
    let mut session = Session::new(config, map);
    for tick in 0..args.ticks {
        let world = session.world();
        let input = InputSnapshot {
            jump: args.hop && world.body().grounded,
            ..InputSnapshot::toward(world.body().position, goal, world.mode(), deadband)
        };
        let Some(report) = session.step(&input) else {
            break;
        };
        if tick % 100 == 0 {
            debug!(
                "tick {tick}: body {} gauge {:.0} camera {}",
                report.body_position, report.gauge, report.pose.position
            );
        }
    }

    match session.status() {
        SessionStatus::Ended(outcome) => info!(
            "episode ended with {outcome:?} after {} ticks",
            session.world().ticks()
        ),
        SessionStatus::Running => warn!(
            "episode still running after {} ticks; body at {}",
            session.world().ticks(),
            session.world().body().position
        ),
    }
    Ok(())
}
