//! Per-tick motion and timers
//!
//! Moves the player, fires bullets, scrolls everything else, culls what left
//! the playfield and runs down fuel, shield and warning timers.

use glam::Vec2;

use super::events::{GameEvent, LossReason};
use super::phase;
use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;

/// Advance every entity and timer by one tick
pub fn integrate(state: &mut GameState, input: &TickInput) {
    if !state.phase.is_running() {
        return;
    }

    move_player(state, input);
    fire(state, input);
    scroll(state);
    move_boss(state);
    burn_fuel(state);
    run_timers(state);
}

fn move_player(state: &mut GameState, input: &TickInput) {
    let speed = state.config.player_speed;
    let min_x = state.config.player_margin;
    let max_x = state.config.width - state.config.player_margin;

    let player = &mut state.player;
    if input.left {
        player.pos.x = (player.pos.x - speed).max(min_x);
    }
    if input.right {
        player.pos.x = (player.pos.x + speed).min(max_x);
    }
}

fn fire(state: &mut GameState, input: &TickInput) {
    if input.fire && state.player.shot_cooldown == 0 {
        let muzzle = Vec2::new(state.player.pos.x, state.config.height - MUZZLE_BOTTOM_OFFSET);
        state.spawn_bullet(muzzle);
        state.player.shot_cooldown = state.config.shot_cooldown_ticks;
        state.push_event(GameEvent::ShotFired);
    }
    // Counts down on the firing tick too, so shots land every `shot_cooldown_ticks`
    state.player.shot_cooldown = state.player.shot_cooldown.saturating_sub(1);
}

fn scroll(state: &mut GameState) {
    let speed = state.level().scroll_speed;
    let height = state.config.height;

    for enemy in &mut state.enemies {
        enemy.pos.y += speed;
    }
    state.enemies.retain(|e| e.pos.y <= height + ENEMY_CULL_MARGIN);

    for power_up in &mut state.power_ups {
        power_up.pos.y += speed;
    }
    state.power_ups.retain(|p| p.pos.y <= height + POWER_UP_CULL_MARGIN);

    let bullet_speed = state.config.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.pos.y -= bullet_speed;
    }
    state.bullets.retain(|b| b.pos.y >= BULLET_CULL_Y);
}

fn move_boss(state: &mut GameState) {
    let speed = state.config.boss_speed;
    let min_x = state.config.boss_margin;
    let max_x = state.config.width - state.config.boss_margin;
    if let Some(boss) = state.boss.as_mut() {
        boss.oscillate(speed, min_x, max_x);
    }
}

fn burn_fuel(state: &mut GameState) {
    let rate = state.config.fuel_per_tick;
    state.player.burn_fuel(rate);
    if state.player.fuel <= 0.0 {
        phase::lose(state, LossReason::OutOfFuel);
    }
}

fn run_timers(state: &mut GameState) {
    // A run that just ended keeps its final warning on screen
    if !state.phase.is_running() {
        return;
    }

    if state.player.shield_ticks > 0 {
        state.player.shield_ticks -= 1;
        if state.player.shield_ticks == 0 {
            state.push_event(GameEvent::ShieldExpired);
        }
    }

    if let Some(warning) = state.warning.as_mut() {
        warning.remaining_ticks = warning.remaining_ticks.saturating_sub(1);
        if warning.remaining_ticks == 0 {
            state.warning = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::level::Category;
    use crate::sim::state::{GamePhase, OUT_OF_FUEL_TEXT, WarningKind};
    use proptest::prelude::*;

    fn fresh() -> GameState {
        GameState::new(GameConfig::default(), 42)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    #[test]
    fn test_player_clamped_to_margin() {
        let mut state = fresh();
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..200 {
            integrate(&mut state, &left);
        }
        assert_eq!(state.player.pos.x, 20.0);
        let y = state.player.pos.y;

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..200 {
            integrate(&mut state, &right);
        }
        assert_eq!(state.player.pos.x, 580.0);
        assert_eq!(state.player.pos.y, y);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut state = fresh();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..12 {
            integrate(&mut state, &fire);
        }
        assert_eq!(state.bullets.len(), 1);
        integrate(&mut state, &fire);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_starts_at_muzzle_and_rises() {
        let mut state = fresh();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        integrate(&mut state, &fire);
        // Spawned at 530 and already moved once this tick
        assert_eq!(state.bullets[0].pos, Vec2::new(300.0, 523.0));
        assert!(state.events.contains(&GameEvent::ShotFired));
    }

    #[test]
    fn test_entities_culled_past_threshold() {
        let mut state = fresh();
        state.spawn_enemy(Category::Text, "GPT", Vec2::new(100.0, 648.0));
        state.spawn_power_up(Vec2::new(100.0, 628.0));
        state.spawn_bullet(Vec2::new(100.0, -14.0));
        integrate(&mut state, &idle());
        assert!(state.enemies.is_empty());
        assert!(state.power_ups.is_empty());
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_enemies_scroll_at_level_speed() {
        let mut state = fresh();
        state.spawn_enemy(Category::Video, "Sora", Vec2::new(100.0, 0.0));
        integrate(&mut state, &idle());
        assert_eq!(state.enemies[0].pos.y, 3.5);
    }

    #[test]
    fn test_fuel_runs_out() {
        let mut state = fresh();
        state.player.fuel = 0.1;
        integrate(&mut state, &idle());
        assert_eq!(state.player.fuel, 0.0);
        assert_eq!(
            state.phase,
            GamePhase::Lost {
                reason: LossReason::OutOfFuel
            }
        );
        assert_eq!(state.warning.as_ref().unwrap().text, OUT_OF_FUEL_TEXT);
    }

    #[test]
    fn test_shield_counts_down_and_expires() {
        let mut state = fresh();
        state.player.shield_ticks = 2;
        integrate(&mut state, &idle());
        assert!(state.player.shield_active());
        integrate(&mut state, &idle());
        assert!(!state.player.shield_active());
        assert!(state.events.contains(&GameEvent::ShieldExpired));
    }

    #[test]
    fn test_warning_clears_at_zero() {
        let mut state = fresh();
        state.set_warning("hi", 2, WarningKind::Notice);
        integrate(&mut state, &idle());
        assert!(state.warning.is_some());
        integrate(&mut state, &idle());
        assert!(state.warning.is_none());
    }

    proptest! {
        #[test]
        fn prop_fuel_never_negative_and_player_in_bounds(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..400),
            fuel in 0.0f32..100.0,
        ) {
            let mut state = fresh();
            state.player.fuel = fuel;
            for (left, right, fire) in moves {
                let before = state.player.fuel;
                integrate(&mut state, &TickInput { left, right, fire });
                prop_assert!(state.player.fuel >= 0.0);
                prop_assert!(state.player.fuel <= before);
                prop_assert!(state.player.pos.x >= 20.0 && state.player.pos.x <= 580.0);
            }
        }

        #[test]
        fn prop_culled_entities_never_survive(ys in proptest::collection::vec(-100.0f32..700.0, 1..50)) {
            let mut state = fresh();
            for &y in &ys {
                state.spawn_enemy(Category::Text, "GPT", Vec2::new(300.0, y));
                state.spawn_bullet(Vec2::new(300.0, y));
            }
            integrate(&mut state, &idle());
            prop_assert!(state.enemies.iter().all(|e| e.pos.y <= 650.0));
            prop_assert!(state.bullets.iter().all(|b| b.pos.y >= -20.0));
        }
    }
}
