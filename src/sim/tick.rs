//! Fixed timestep simulation tick and event dispatch
//!
//! Core game loop that advances simulation deterministically. Hosts call
//! [`handle_event`] for each classified input, then [`tick`] once per frame.

use super::collision;
use super::obstacles;
use super::physics;
use super::state::{Cue, GameEvent, GameState, Mode, Step};
use crate::consts::*;

/// Apply one input event to the state machine.
///
/// Events that make no sense in the current mode are ignored.
pub fn handle_event(state: &mut GameState, event: GameEvent) -> Step {
    match (state.mode, event) {
        (_, GameEvent::QuitRequested) => {
            log::info!("Quit requested in {:?}", state.mode);
            return Step::Quit;
        }
        (Mode::Menu, GameEvent::DifficultySelected(preset)) => {
            state.preset = preset;
            state.difficulty = preset.setting();
            log::info!("Difficulty selected: {}", preset);
        }
        (Mode::Menu, GameEvent::PlayRequested) => {
            state.start_run();
            log::info!("Run started on {}", state.preset);
        }
        (Mode::Playing, GameEvent::JumpRequested) => {
            physics::apply_impulse(&mut state.bird, JUMP_STRENGTH);
            state.cues.push(Cue::Jumped);
        }
        (Mode::Playing, GameEvent::PauseToggleRequested) => {
            state.mode = Mode::Paused;
            log::info!("Paused");
        }
        (Mode::Paused, GameEvent::PauseToggleRequested) => {
            state.mode = Mode::Playing;
            log::info!("Resumed");
        }
        (Mode::GameOver, GameEvent::RestartRequested) => {
            state.start_run();
            log::info!("Run restarted on {}", state.preset);
        }
        (mode, event) => {
            log::trace!("Ignoring {:?} in {:?}", event, mode);
        }
    }
    Step::Continue
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState) -> Step {
    state.time_ticks += 1;

    match state.mode {
        Mode::Playing => tick_playing(state),
        Mode::GameOver => {
            // Death-drop is cosmetic; score and obstacles stay frozen
            state.death_ticks += 1;
            physics::death_drop(&mut state.bird, GRAVITY);
            Step::Continue
        }
        Mode::Menu | Mode::Paused => Step::Continue,
    }
}

fn tick_playing(state: &mut GameState) -> Step {
    state.play_ticks += 1;

    physics::advance(&mut state.bird, GRAVITY);

    let speed = state.difficulty.speed;
    obstacles::advance(&mut state.pairs, speed);
    if obstacles::recycle(&mut state.pairs, state.difficulty.gap, &mut state.rng) {
        state.score.record_pass();
        state.cues.push(Cue::Scored);
    }

    if state.score.apply_adaptive(&mut state.difficulty) {
        log::debug!(
            "Difficulty tightened at score {}: speed={:.3} gap={:.1}",
            state.score.current(),
            state.difficulty.speed,
            state.difficulty.gap
        );
    }

    state.ground_offset = (state.ground_offset - speed).rem_euclid(WIDTH);

    if collision::check(&state.bird, &state.pairs) {
        return on_collision(state);
    }

    Step::Continue
}

/// Playing -> GameOver
fn on_collision(state: &mut GameState) -> Step {
    state.mode = Mode::GameOver;
    state.death_ticks = 0;
    state.cues.push(Cue::Died);
    let new_best = state.score.finish();
    log::info!(
        "Game over: score {} (best {})",
        state.score.current(),
        state.score.best()
    );
    Step::GameOver { new_best }
}
