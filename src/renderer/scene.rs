//! Snapshot to triangle list
//!
//! Builds the whole frame in playfield coordinates; the pipeline maps them to
//! clip space. Text (names, HUD, banners) is left to the DOM overlay.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Category, Rect, Snapshot};

/// Width of the river banks drawn at each side of the playfield
const BANK_WIDTH: f32 = 12.0;
/// Spacing of the circuit traces scrolling down the banks
const TRACE_GAP: f32 = 40.0;
const TRACE_HEIGHT: f32 = 4.0;

pub fn category_color(category: Category) -> [f32; 4] {
    match category {
        Category::Text => colors::ENEMY_TEXT,
        Category::Video => colors::ENEMY_VIDEO,
        Category::Glitch => colors::ENEMY_GLITCH,
    }
}

/// Every vertex for one frame, back to front
pub fn frame_vertices(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(512);
    let (w, h) = (snapshot.width, snapshot.height);

    vertices.extend(shapes::rect(Rect::new(0.0, 0.0, BANK_WIDTH, h), colors::BANK));
    vertices.extend(shapes::rect(
        Rect::new(w - BANK_WIDTH, 0.0, BANK_WIDTH, h),
        colors::BANK,
    ));
    vertices.extend(bank_traces(snapshot));

    for power_up in &snapshot.power_ups {
        let r = POWER_UP_SIZE / 2.0;
        vertices.extend(shapes::ring(*power_up, r * 0.6, r, colors::POWER_UP, 20));
    }

    for enemy in &snapshot.enemies {
        let hitbox = Rect::centered(enemy.pos, ENEMY_WIDTH, ENEMY_HEIGHT);
        vertices.extend(shapes::rect(hitbox, category_color(enemy.category)));
        if enemy.category == snapshot.target {
            vertices.extend(shapes::rect_outline(hitbox, 2.0, colors::TARGET_MARK));
        }
    }

    if let Some(boss) = &snapshot.boss {
        let hitbox = Rect::centered(boss.pos, BOSS_WIDTH, BOSS_HEIGHT);
        vertices.extend(shapes::rect(hitbox, colors::BOSS));

        let bar = Rect::new(hitbox.x, hitbox.y - 10.0, hitbox.w, 5.0);
        vertices.extend(shapes::rect(bar, colors::BOSS_HP_BACK));
        if boss.max_hp > 0 {
            let frac = boss.hp as f32 / boss.max_hp as f32;
            vertices.extend(shapes::rect(
                Rect::new(bar.x, bar.y, bar.w * frac, bar.h),
                colors::BOSS_HP,
            ));
        }
    }

    for bullet in &snapshot.bullets {
        vertices.extend(shapes::rect(
            Rect::centered(*bullet, BULLET_WIDTH, BULLET_HEIGHT),
            colors::BULLET,
        ));
    }

    vertices.extend(shapes::triangle_up(
        snapshot.player_pos,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        colors::PLAYER,
    ));
    if snapshot.shield_ticks > 0 {
        vertices.extend(shapes::ring(
            snapshot.player_pos,
            PLAYER_WIDTH * 0.75,
            PLAYER_WIDTH * 0.85,
            colors::SHIELD,
            32,
        ));
    }

    if snapshot.transitioning || snapshot.won || snapshot.lost {
        vertices.extend(shapes::rect(Rect::new(0.0, 0.0, w, h), colors::OVERLAY));
    }

    vertices
}

/// Horizontal traces on both banks, offset by distance travelled so the river
/// appears to move
fn bank_traces(snapshot: &Snapshot) -> Vec<Vertex> {
    let travelled = snapshot.time_ticks as f32 * snapshot.scroll_speed;
    let offset = travelled % TRACE_GAP;
    let mut vertices = Vec::new();
    let mut y = offset - TRACE_GAP;
    while y < snapshot.height {
        for x in [0.0, snapshot.width - BANK_WIDTH] {
            vertices.extend(shapes::rect(
                Rect::new(x, y, BANK_WIDTH, TRACE_HEIGHT),
                colors::BANK_TRACE,
            ));
        }
        y += TRACE_GAP;
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GameState, phase};
    use glam::Vec2;

    fn has_color(vertices: &[Vertex], color: [f32; 4]) -> bool {
        vertices.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_enemies_drawn_in_category_color() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.spawn_enemy(Category::Video, "Sora", Vec2::new(200.0, 200.0));
        let vertices = frame_vertices(&state.snapshot());
        assert!(has_color(&vertices, colors::ENEMY_VIDEO));
        assert!(!has_color(&vertices, colors::ENEMY_TEXT));
    }

    #[test]
    fn test_only_targets_are_marked() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.spawn_enemy(Category::Video, "Sora", Vec2::new(200.0, 200.0));
        assert!(!has_color(&frame_vertices(&state.snapshot()), colors::TARGET_MARK));
        state.spawn_enemy(Category::Text, "GPT", Vec2::new(300.0, 200.0));
        assert!(has_color(&frame_vertices(&state.snapshot()), colors::TARGET_MARK));
    }

    #[test]
    fn test_boss_and_overlay() {
        let mut state = GameState::new(GameConfig::default(), 1);
        phase::enter_level(&mut state, 2);
        let vertices = frame_vertices(&state.snapshot());
        assert!(has_color(&vertices, colors::BOSS));
        assert!(has_color(&vertices, colors::BOSS_HP));
        assert!(!has_color(&vertices, colors::OVERLAY));

        phase::win(&mut state);
        assert!(has_color(&frame_vertices(&state.snapshot()), colors::OVERLAY));
    }

    #[test]
    fn test_traces_scroll_with_time() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let before = bank_traces(&state.snapshot());
        state.time_ticks = 3;
        let after = bank_traces(&state.snapshot());
        assert_ne!(before[0].position, after[0].position);
    }

    #[test]
    fn test_shield_ring_only_while_shielded() {
        let mut state = GameState::new(GameConfig::default(), 1);
        assert!(!has_color(&frame_vertices(&state.snapshot()), colors::SHIELD));
        state.player.shield_ticks = 10;
        assert!(has_color(&frame_vertices(&state.snapshot()), colors::SHIELD));
    }
}
