//! Per-frame simulation tick
//!
//! One call per animation frame. While running: spawn, move, resolve
//! collisions, then check level progress. During a transition only the
//! countdown advances; terminal states are frozen.

use super::autopilot;
use super::collision;
use super::events::GameEvent;
use super::motion;
use super::phase;
use super::snapshot::Snapshot;
use super::spawn;
use super::state::{GamePhase, GameState};

/// Input intents sampled once per tick (most recent state wins)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Consumer of each frame's result (rendering, HUD, audio)
pub trait Presenter {
    /// Called after every tick, including frozen terminal ticks
    fn present(&mut self, snapshot: &Snapshot, events: &[GameEvent]);
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::Running => {
            state.time_ticks += 1;
            spawn::spawn(state);
            motion::integrate(state, input);
            collision::resolve(state);
            if state.phase.is_running() {
                collision::cool_penalty_streak(state);
            }
            phase::evaluate(state);
        }
        GamePhase::Transitioning { .. } => phase::advance_transition(state),
        GamePhase::Won | GamePhase::Lost { .. } => {}
    }
}

/// Tick with the built-in demo pilot instead of player input
pub fn tick_idle(state: &mut GameState) {
    let input = autopilot::suggest_input(state);
    tick(state, &input);
}

/// Tick, then always hand the result to the presenter so the last frame of a
/// finished run stays on screen
pub fn run_frame(state: &mut GameState, input: &TickInput, presenter: &mut impl Presenter) {
    tick(state, input);
    let snapshot = state.snapshot();
    presenter.present(&snapshot, &state.events);
}
