//! Collision resolution and scoring rules
//!
//! Runs once per tick after motion, in a fixed order:
//! 1. bullets vs enemies
//! 2. bullets vs boss
//! 3. player vs enemies
//! 4. player vs power-ups
//!
//! Every hit consumes the entities involved, so resolving an already
//! resolved tick changes nothing.

use super::events::{GameEvent, LossReason};
use super::geometry::overlaps;
use super::level::Category;
use super::phase;
use super::state::{BURNED_OUT_TEXT, GameState, OVERHEAT_TEXT, SHIELD_TEXT, WarningKind};

/// Resolve every collision for the current tick
pub fn resolve(state: &mut GameState) {
    if !state.phase.is_running() {
        return;
    }

    bullets_vs_enemies(state);
    bullets_vs_boss(state);
    if !state.phase.is_running() {
        return;
    }
    player_vs_enemies(state);
    if !state.phase.is_running() {
        return;
    }
    player_vs_power_ups(state);
}

/// Clear the penalty streak after enough penalty-free ticks.
///
/// Called once per running tick by the driver, separately from `resolve`.
pub fn cool_penalty_streak(state: &mut GameState) {
    if state.penalty_streak {
        state.ticks_since_penalty += 1;
        if state.ticks_since_penalty > state.config.penalty_reset_ticks {
            state.penalty_streak = false;
            state.ticks_since_penalty = 0;
        }
    } else {
        state.ticks_since_penalty = 0;
    }
}

fn bullets_vs_enemies(state: &mut GameState) {
    let mut killed: Vec<Category> = Vec::new();

    let mut b = 0;
    while b < state.bullets.len() {
        let bullet_box = state.bullets[b].hitbox();
        let hit = state
            .enemies
            .iter()
            .position(|e| overlaps(&bullet_box, &e.hitbox()));

        match hit {
            Some(e) => {
                let enemy = state.enemies.remove(e);
                state.bullets.remove(b);
                killed.push(enemy.category);
            }
            None => b += 1,
        }
    }

    for category in killed {
        score_bullet_kill(state, category);
    }
}

/// Scoring rule for an enemy destroyed by a bullet
fn score_bullet_kill(state: &mut GameState, category: Category) {
    let level = state.level();
    let is_target = category == level.target;
    let is_penalty = level.penalty == Some(category);
    let is_boss_level = level.is_boss();
    let shot_penalty = level.shot_penalty;
    let shielded = state.player.shield_active();

    let base = state.config.points_for(category);
    // Shield turns every destruction into a reward; penalty kills pay extra
    let shield_bonus = if is_penalty {
        base * state.config.shield_multiplier
    } else {
        base
    };
    let points = if is_target {
        base
    } else if shielded && !is_boss_level {
        shield_bonus
    } else if !shot_penalty {
        base
    } else {
        0
    };

    if is_penalty && points == 0 {
        let cost = state.config.bullet_penalty_fuel;
        state.player.burn_fuel(cost);
        state.push_event(GameEvent::FuelPenalty { category });
        log::debug!("Shot a {} model: -{} fuel", category.as_str(), cost);
        return;
    }

    state.award(points);
    state.push_event(GameEvent::EnemyDestroyed { category, points });
}

fn bullets_vs_boss(state: &mut GameState) {
    let Some(boss_box) = state.boss.as_ref().map(|b| b.hitbox()) else {
        return;
    };

    let mut b = 0;
    while b < state.bullets.len() {
        if !overlaps(&state.bullets[b].hitbox(), &boss_box) {
            b += 1;
            continue;
        }
        state.bullets.remove(b);

        let Some(boss) = state.boss.as_mut() else {
            return;
        };
        boss.hp = boss.hp.saturating_sub(1);
        let hp_left = boss.hp;
        state.push_event(GameEvent::BossHit { hp_left });

        if hp_left == 0 {
            state.boss = None;
            state.push_event(GameEvent::BossDefeated);
            log::info!("Boss defeated at tick {}", state.time_ticks);
            phase::win(state);
            return;
        }
    }
}

fn player_vs_enemies(state: &mut GameState) {
    let player_box = state.player.hitbox();

    let mut e = 0;
    while e < state.enemies.len() {
        if !overlaps(&player_box, &state.enemies[e].hitbox()) {
            e += 1;
            continue;
        }
        let enemy = state.enemies.remove(e);
        let category = enemy.category;
        let level = state.level();
        let punishes = level.punishes_contact(category);
        let is_penalty = level.penalty == Some(category);
        let is_boss_level = level.is_boss();

        if state.player.shield_active() {
            // Shield absorbs the ram; penalty models still pay out double outside the boss fight
            let points = if is_penalty && !is_boss_level {
                state.config.points_for(category) * state.config.shield_multiplier
            } else {
                0
            };
            state.award(points);
            state.push_event(GameEvent::EnemyDestroyed { category, points });
            continue;
        }

        if punishes {
            penalty_contact(state);
            if !state.phase.is_running() {
                return;
            }
        }
    }
}

/// Escalating punishment: first contact halves fuel, a second one while the
/// streak is still set ends the run
fn penalty_contact(state: &mut GameState) {
    let warning_ticks = state.config.warning_duration;

    if state.penalty_streak {
        state.set_warning(BURNED_OUT_TEXT, warning_ticks, WarningKind::Alert);
        phase::lose(state, LossReason::BurnedOut);
        return;
    }

    state.player.fuel = (state.player.fuel * 0.5).max(0.0);
    state.penalty_streak = true;
    state.ticks_since_penalty = 0;
    state.set_warning(OVERHEAT_TEXT, warning_ticks, WarningKind::Alert);
    state.push_event(GameEvent::Overheat);
    log::debug!("Overheat: fuel halved to {:.1}", state.player.fuel);
}

fn player_vs_power_ups(state: &mut GameState) {
    let player_box = state.player.hitbox();
    let before = state.power_ups.len();
    state.power_ups.retain(|p| !overlaps(&player_box, &p.hitbox()));
    let collected = before - state.power_ups.len();

    for _ in 0..collected {
        state.player.shield_ticks = state.config.shield_duration;
        state.push_event(GameEvent::PowerUpCollected);
    }

    // Pickup notice never hides a penalty alert
    let alert_showing = matches!(&state.warning, Some(w) if w.kind == WarningKind::Alert);
    if collected > 0 && !alert_showing {
        let ticks = state.config.notice_duration;
        state.set_warning(SHIELD_TEXT, ticks, WarningKind::Notice);
    }
}
