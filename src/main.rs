//! Flappy Core headless runner
//!
//! Drives the simulation at a fixed tick with the demo autopilot standing in
//! for a player. Rendering and audio hosts plug into the same `Game` API.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use flappy_core::autopilot;
use flappy_core::settings::DEFAULT_SETTINGS_PATH;
use flappy_core::sim::{Cue, Flow, Game, GameEvent, Mode};
use flappy_core::{FileScoreStore, ScoreStore, Settings};

/// Ticks of death-drop shown before an automatic restart
const RESTART_DELAY_TICKS: u32 = 45;

#[derive(Parser)]
#[command(name = "flappy-core")]
#[command(about = "Headless flappy simulation with a demo autopilot", version)]
struct Args {
    /// Settings file (JSON)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Difficulty preset (easy, medium, hard)
    #[arg(long, env = "FLAPPY_DIFFICULTY")]
    difficulty: Option<String>,

    /// RNG seed (overrides settings)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of runs to play before quitting
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Safety cap on total simulation ticks
    #[arg(long, default_value_t = 36_000)]
    max_ticks: u64,

    /// Pace ticks at the configured rate instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print every frame as a JSON line on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = Settings::load(&args.settings);
    let store = FileScoreStore::new(&settings.highscore_path);
    if let Err(e) = store.init() {
        log::warn!("{}", e);
    }

    let seed = args.seed.unwrap_or_else(|| settings.resolve_seed());
    log::info!("Flappy Core starting with seed {}", seed);

    let mut game = Game::from_settings(store, &settings, seed);

    if let Some(name) = args.difficulty.as_deref() {
        let event = GameEvent::difficulty_named(name)
            .with_context(|| format!("unknown difficulty '{}'", name))?;
        game.handle_event(event);
    }
    game.handle_event(GameEvent::PlayRequested);

    let tick_len = Duration::from_secs_f64(1.0 / f64::from(settings.tick_rate_hz));
    let mut runs_left = args.runs.max(1);
    let mut death_wait = 0u32;
    let mut ticks = 0u64;

    loop {
        let started = Instant::now();

        if let Some(event) = autopilot::decide(game.state()) {
            game.handle_event(event);
        }
        game.tick();
        ticks += 1;

        for cue in game.drain_cues() {
            match cue {
                Cue::Jumped => log::trace!("cue: jumped"),
                Cue::Scored => log::debug!("cue: scored ({})", game.state().score.current()),
                Cue::Died => {
                    runs_left -= 1;
                    println!(
                        "Run over on {}: score {} (best {})",
                        game.state().preset,
                        game.state().score.current(),
                        game.state().score.best()
                    );
                }
            }
        }

        if args.json {
            println!("{}", serde_json::to_string(&game.frame())?);
        }

        if game.mode() == Mode::GameOver {
            death_wait += 1;
            if runs_left == 0 {
                break;
            }
            if death_wait >= RESTART_DELAY_TICKS {
                death_wait = 0;
                game.handle_event(GameEvent::RestartRequested);
            }
        }

        if ticks >= args.max_ticks {
            log::warn!("Stopping after {} ticks", ticks);
            break;
        }

        if args.realtime {
            if let Some(rest) = tick_len.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    if game.handle_event(GameEvent::QuitRequested) == Flow::Quit {
        log::info!(
            "Quit after {} ticks, stored best {}",
            ticks,
            game.store().load()
        );
    }

    Ok(())
}
