//! Level progression and run outcome
//!
//! Running -> Transitioning -> Running(next) ... -> Won, with Lost reachable
//! from Running at any point. Won and Lost are terminal.

use super::events::{GameEvent, LossReason};
use super::level::LevelGoal;
use super::state::{Boss, GamePhase, GameState, OUT_OF_FUEL_TEXT, WarningKind};

/// Check end-of-tick conditions while running
pub fn evaluate(state: &mut GameState) {
    if !state.phase.is_running() {
        return;
    }

    if state.player.fuel <= 0.0 {
        lose(state, LossReason::OutOfFuel);
        return;
    }

    let goal_met = match state.level().goal {
        LevelGoal::Score { threshold } => state.level_score >= threshold,
        // Boss defeat wins immediately from the collision stage
        LevelGoal::Boss { .. } | LevelGoal::Endless => false,
    };
    if !goal_met {
        return;
    }

    if state.is_final_level() {
        win(state);
    } else {
        let next = state.level_index + 1;
        begin_transition(state, next);
    }
}

/// Leave the current level and start the inter-level countdown
pub fn begin_transition(state: &mut GameState, to_level: usize) {
    let cleared = state.level_index;
    log::info!(
        "Level {} cleared with {} points (total {})",
        cleared + 1,
        state.level_score,
        state.score
    );
    state.level_score = 0;
    state.clear_entities();
    state.phase = GamePhase::Transitioning {
        to_level,
        remaining_ticks: state.config.transition_ticks,
    };
    state.push_event(GameEvent::LevelCleared { level: cleared });
}

/// Count down a transition; enters the next level when it elapses
pub fn advance_transition(state: &mut GameState) {
    let GamePhase::Transitioning {
        to_level,
        remaining_ticks,
    } = state.phase
    else {
        return;
    };

    let remaining_ticks = remaining_ticks.saturating_sub(1);
    if remaining_ticks == 0 {
        enter_level(state, to_level);
    } else {
        state.phase = GamePhase::Transitioning {
            to_level,
            remaining_ticks,
        };
    }
}

/// Start a level: reset per-level state, refuel and spawn phase-specific entities
pub fn enter_level(state: &mut GameState, index: usize) {
    let index = index.min(state.config.levels.len().saturating_sub(1));
    state.level_index = index;
    state.level_score = 0;
    state.clear_entities();

    state.player.fuel = state.config.max_fuel;
    state.player.shield_ticks = 0;
    state.player.shot_cooldown = 0;
    state.penalty_streak = false;
    state.ticks_since_penalty = 0;
    state.warning = None;

    state.enemy_spawn_cooldown = state.config.enemy_spawn_interval;
    state.power_up_cooldown = state.config.power_up_offset;
    state.boss_attack_cooldown = state.config.boss_attack_interval;

    state.boss = match state.level().goal {
        LevelGoal::Boss { hp } => Some(Boss::new(&state.config, hp)),
        _ => None,
    };

    state.phase = GamePhase::Running;
    log::info!("Level {}: {}", index + 1, state.level().name);
    state.push_event(GameEvent::LevelAdvanced { level: index });
    if state.boss.is_some() {
        log::info!("Boss appears");
        state.push_event(GameEvent::BossAppeared);
    }
}

pub fn win(state: &mut GameState) {
    if state.phase.is_terminal() {
        return;
    }
    log::info!("Run won with {} points after {} ticks", state.score, state.time_ticks);
    state.phase = GamePhase::Won;
    state.push_event(GameEvent::GameWon);
}

pub fn lose(state: &mut GameState, reason: LossReason) {
    if state.phase.is_terminal() {
        return;
    }
    log::info!(
        "Run lost ({:?}) with {} points after {} ticks",
        reason,
        state.score,
        state.time_ticks
    );
    if reason == LossReason::OutOfFuel {
        let ticks = state.config.warning_duration;
        state.set_warning(OUT_OF_FUEL_TEXT, ticks, WarningKind::Alert);
    }
    state.phase = GamePhase::Lost { reason };
    state.push_event(GameEvent::GameLost { reason });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::level::Category;
    use glam::Vec2;

    fn fresh() -> GameState {
        GameState::new(GameConfig::default(), 11)
    }

    #[test]
    fn test_threshold_starts_transition() {
        let mut state = fresh();
        state.spawn_enemy(Category::Text, "GPT", Vec2::new(10.0, 10.0));
        state.award(1500);
        evaluate(&mut state);
        assert_eq!(
            state.phase,
            GamePhase::Transitioning {
                to_level: 1,
                remaining_ticks: 120
            }
        );
        assert_eq!(state.level_score, 0);
        assert_eq!(state.score, 1500);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_below_threshold_keeps_running() {
        let mut state = fresh();
        state.award(1499);
        evaluate(&mut state);
        assert!(state.phase.is_running());
    }

    #[test]
    fn test_transition_elapses_into_next_level() {
        let mut state = fresh();
        state.player.fuel = 12.0;
        begin_transition(&mut state, 1);
        for _ in 0..119 {
            advance_transition(&mut state);
        }
        assert!(matches!(
            state.phase,
            GamePhase::Transitioning {
                remaining_ticks: 1,
                ..
            }
        ));
        advance_transition(&mut state);
        assert!(state.phase.is_running());
        assert_eq!(state.level_index, 1);
        assert_eq!(state.player.fuel, 100.0);
        assert!(state.boss.is_none());
        assert!(state.events.contains(&GameEvent::LevelAdvanced { level: 1 }));
    }

    #[test]
    fn test_boss_only_on_boss_level() {
        let mut state = fresh();
        enter_level(&mut state, 1);
        assert!(state.boss.is_none());
        enter_level(&mut state, 2);
        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.hp, 30);
        assert_eq!(boss.pos, Vec2::new(300.0, 90.0));
    }

    #[test]
    fn test_final_score_level_wins() {
        let config = GameConfig {
            levels: GameConfig::default().levels[..1].to_vec(),
            ..GameConfig::default()
        };
        let mut state = GameState::new(config, 1);
        state.award(1500);
        evaluate(&mut state);
        assert_eq!(state.phase, GamePhase::Won);
    }

    #[test]
    fn test_empty_tank_loses() {
        let mut state = fresh();
        state.player.fuel = 0.0;
        evaluate(&mut state);
        assert_eq!(
            state.phase,
            GamePhase::Lost {
                reason: LossReason::OutOfFuel
            }
        );
        assert_eq!(state.warning.as_ref().unwrap().text, OUT_OF_FUEL_TEXT);
    }

    #[test]
    fn test_terminal_states_stick() {
        let mut state = fresh();
        lose(&mut state, LossReason::BurnedOut);
        win(&mut state);
        assert_eq!(
            state.phase,
            GamePhase::Lost {
                reason: LossReason::BurnedOut
            }
        );
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_endless_never_completes() {
        let mut state = GameState::new(GameConfig::classic(), 1);
        state.award(1_000_000);
        evaluate(&mut state);
        assert!(state.phase.is_running());
    }
}
