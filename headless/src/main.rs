//! Headless Pong host
//!
//! Runs the simulation at its fixed tick rate with a scripted key feed and
//! logs the match instead of drawing it.
//!
//! Usage: `pong-headless [config.json]`, with `PONG_SEED` and
//! `PONG_MAX_TICKS` read from the environment.

mod host;

use std::path::Path;

use anyhow::Context;
use game_core::{run, Config, Game, SleepClock};
use host::{LogPresenter, ScriptedInput};

const DEFAULT_MAX_TICKS: u64 = 30 * 60;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => Config::default(),
    };
    let seed = env_u64("PONG_SEED")?.unwrap_or_else(seed_from_clock);
    let max_ticks = env_u64("PONG_MAX_TICKS")?.unwrap_or(DEFAULT_MAX_TICKS);

    let mut game = Game::new(config, seed).context("invalid game configuration")?;
    tracing::info!("Seed {}, stopping after {} ticks", seed, max_ticks);

    let mut clock = SleepClock::new(game.config.tick_rate);
    let mut input = ScriptedInput::new(max_ticks);
    let mut presenter = LogPresenter::default();

    let summary = run(&mut game, &mut clock, &mut input, &mut presenter);
    println!(
        "{} ticks, final score {}-{} ({:?})",
        summary.ticks, summary.last.left_score, summary.last.right_score, summary.last.match_state
    );
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    Ok(config)
}

fn env_u64(name: &str) -> anyhow::Result<Option<u64>> {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be an unsigned integer, got {value:?}")),
        Err(_) => Ok(None),
    }
}

fn seed_from_clock() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
