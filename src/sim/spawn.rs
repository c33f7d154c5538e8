//! Enemy, power-up and boss-minion spawning
//!
//! Every cadence is an explicit countdown on `GameState`, decremented once per
//! running tick and reset when it fires.

use glam::Vec2;
use rand::Rng;

use super::events::GameEvent;
use super::level::Category;
use super::state::GameState;
use crate::consts::*;

/// Run the spawner for one tick
pub fn spawn(state: &mut GameState) {
    if !state.phase.is_running() {
        return;
    }

    if state.level().is_boss() {
        spawn_boss_minion(state);
        return;
    }

    state.enemy_spawn_cooldown = state.enemy_spawn_cooldown.saturating_sub(1);
    if state.enemy_spawn_cooldown == 0 {
        spawn_enemy(state);
        state.enemy_spawn_cooldown = state.config.enemy_spawn_interval;
    }

    state.power_up_cooldown = state.power_up_cooldown.saturating_sub(1);
    if state.power_up_cooldown == 0 {
        spawn_power_up(state);
        state.power_up_cooldown = state.config.power_up_period;
    }
}

/// Pick a category with the level's weighting and a name from its pool
fn roll_enemy(state: &mut GameState) -> (Category, &'static str) {
    let level = state.level();
    let (target, other) = level.spawn_categories();
    let weight = level.target_weight;

    let category = if state.rng.random_bool(weight.clamp(0.0, 1.0)) { target } else { other };
    let names = category.names();
    let name = names[state.rng.random_range(0..names.len())];
    (category, name)
}

fn spawn_enemy(state: &mut GameState) {
    let (category, name) = roll_enemy(state);
    let span = (state.config.width - ENEMY_SPAWN_INSET - 50.0).max(0.0);
    let x = ENEMY_SPAWN_INSET + state.rng.random::<f32>() * span;
    log::debug!("Spawn {} `{}` at x={:.1}", category.as_str(), name, x);
    state.spawn_enemy(category, name, Vec2::new(x, ENEMY_SPAWN_Y));
}

fn spawn_power_up(state: &mut GameState) {
    let span = (state.config.width - POWER_UP_SPAWN_INSET * 2.0).max(0.0);
    let x = POWER_UP_SPAWN_INSET + state.rng.random::<f32>() * span;
    state.spawn_power_up(Vec2::new(x, POWER_UP_SPAWN_Y));
}

/// The boss replaces regular spawns: it periodically drops a minion below itself
fn spawn_boss_minion(state: &mut GameState) {
    let Some(boss_pos) = state.boss.as_ref().map(|b| b.pos) else {
        return;
    };

    state.boss_attack_cooldown = state.boss_attack_cooldown.saturating_sub(1);
    if state.boss_attack_cooldown > 0 {
        return;
    }
    state.boss_attack_cooldown = state.config.boss_attack_interval;

    let names = Category::Glitch.names();
    let name = names[state.rng.random_range(0..names.len())];
    let pos = Vec2::new(boss_pos.x, boss_pos.y + BOSS_HEIGHT / 2.0 + ENEMY_HEIGHT / 2.0);
    state.spawn_enemy(Category::Glitch, name, pos);
    state.push_event(GameEvent::BossAttack);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::phase;
    use crate::sim::state::GamePhase;

    fn run_spawner(state: &mut GameState, ticks: u32) {
        for _ in 0..ticks {
            spawn(state);
        }
    }

    #[test]
    fn test_enemy_every_interval() {
        let mut state = GameState::new(GameConfig::default(), 7);
        run_spawner(&mut state, 31);
        assert!(state.enemies.is_empty());
        run_spawner(&mut state, 1);
        assert_eq!(state.enemies.len(), 1);
        run_spawner(&mut state, 32);
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_power_up_on_offset_then_period() {
        let mut state = GameState::new(GameConfig::default(), 7);
        run_spawner(&mut state, 16);
        assert!(state.power_ups.is_empty());
        run_spawner(&mut state, 1);
        assert_eq!(state.power_ups.len(), 1);
        run_spawner(&mut state, 179);
        assert_eq!(state.power_ups.len(), 1);
        run_spawner(&mut state, 1);
        assert_eq!(state.power_ups.len(), 2);
    }

    #[test]
    fn test_spawn_position_within_inset() {
        let mut state = GameState::new(GameConfig::default(), 99);
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        for enemy in &state.enemies {
            assert!(enemy.pos.x >= 30.0 && enemy.pos.x <= 550.0);
            assert_eq!(enemy.pos.y, ENEMY_SPAWN_Y);
            assert!(enemy.category.names().contains(&enemy.name));
        }
    }

    #[test]
    fn test_categories_come_from_level() {
        let mut state = GameState::new(GameConfig::default(), 3);
        for _ in 0..200 {
            spawn_enemy(&mut state);
        }
        let texts = state.enemies.iter().filter(|e| e.category == Category::Text).count();
        let videos = state.enemies.iter().filter(|e| e.category == Category::Video).count();
        assert_eq!(texts + videos, 200);
        assert!(texts > 50 && videos > 50);
    }

    #[test]
    fn test_classic_mix_is_mostly_text() {
        let mut state = GameState::new(GameConfig::classic(), 11);
        for _ in 0..2000 {
            spawn_enemy(&mut state);
        }
        let texts = state.enemies.iter().filter(|e| e.category == Category::Text).count();
        let share = texts as f64 / state.enemies.len() as f64;
        assert!((0.55..=0.65).contains(&share), "text share {share}");
    }

    #[test]
    fn test_full_weight_spawns_only_targets() {
        let mut config = GameConfig::default();
        config.levels[1].target_weight = 1.0;
        let mut state = GameState::new(config, 5);
        phase::enter_level(&mut state, 1);
        let target = state.level().target;
        for _ in 0..300 {
            spawn_enemy(&mut state);
        }
        assert!(state.enemies.iter().all(|e| e.category == target));
    }

    #[test]
    fn test_no_spawn_when_not_running() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.phase = GamePhase::Won;
        run_spawner(&mut state, 500);
        assert!(state.enemies.is_empty());
        assert!(state.power_ups.is_empty());
    }

    #[test]
    fn test_boss_level_drops_minions_only() {
        let mut state = GameState::new(GameConfig::default(), 7);
        phase::enter_level(&mut state, 2);
        run_spawner(&mut state, 200);
        assert!(state.power_ups.is_empty());
        assert_eq!(state.enemies.len(), 200 / 45);
        assert!(state.enemies.iter().all(|e| e.category == Category::Glitch));
    }
}
