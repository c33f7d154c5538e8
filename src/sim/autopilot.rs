//! Demo pilot
//!
//! Produces plausible input for attract mode and the headless runner:
//! dodge anything that punishes contact, otherwise line up under the nearest
//! target (or the boss) and shoot.

use super::state::GameState;
use super::tick::TickInput;

/// How far above the player a punishing enemy counts as a threat
const THREAT_RANGE_Y: f32 = 160.0;
/// Horizontal half-width of the danger lane above the player
const THREAT_LANE: f32 = 44.0;
/// Close enough horizontally to take a shot
const AIM_TOLERANCE: f32 = 10.0;

pub fn suggest_input(state: &GameState) -> TickInput {
    let level = state.level();
    let player = &state.player;
    let px = player.pos.x;
    let py = player.pos.y;

    // Dodge the closest incoming threat first
    let threat = state
        .enemies
        .iter()
        .filter(|e| !player.shield_active() && level.punishes_contact(e.category))
        .filter(|e| e.pos.y < py + 20.0 && py - e.pos.y < THREAT_RANGE_Y)
        .filter(|e| (e.pos.x - px).abs() < THREAT_LANE)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(threat) = threat {
        let go_left = if threat.pos.x >= px {
            px - state.config.player_margin > 50.0
        } else {
            state.config.width - state.config.player_margin - px < 50.0
        };
        return TickInput {
            left: go_left,
            right: !go_left,
            fire: false,
        };
    }

    // Aim at the boss, else the lowest target still above the player
    let aim_x = state.boss.as_ref().map(|b| b.pos.x).or_else(|| {
        state
            .enemies
            .iter()
            .filter(|e| e.category == level.target && e.pos.y < py)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|e| e.pos.x)
    });

    // Nothing to shoot: drift toward a falling shield
    let aim_x = aim_x.or_else(|| {
        state
            .power_ups
            .iter()
            .filter(|p| p.pos.y < py)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|p| p.pos.x)
    });

    let Some(aim_x) = aim_x else {
        return TickInput::default();
    };

    let dx = aim_x - px;
    TickInput {
        left: dx < -AIM_TOLERANCE,
        right: dx > AIM_TOLERANCE,
        fire: dx.abs() <= AIM_TOLERANCE * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::level::Category;
    use glam::Vec2;

    #[test]
    fn test_dodges_penalty_enemy() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let above = state.player.pos - Vec2::new(-5.0, 80.0);
        state.spawn_enemy(Category::Video, "Sora", above);
        let input = suggest_input(&state);
        assert!(input.left);
        assert!(!input.fire);
    }

    #[test]
    fn test_aims_at_target() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.spawn_enemy(Category::Text, "GPT", Vec2::new(100.0, 100.0));
        let input = suggest_input(&state);
        assert!(input.left);
        assert!(!input.right);
    }

    #[test]
    fn test_fires_when_lined_up() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let x = state.player.pos.x;
        state.spawn_enemy(Category::Text, "GPT", Vec2::new(x + 3.0, 100.0));
        let input = suggest_input(&state);
        assert!(input.fire);
        assert!(!input.left && !input.right);
    }

    #[test]
    fn test_idle_with_empty_sky() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(suggest_input(&state), TickInput::default());
    }
}
