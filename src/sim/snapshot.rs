//! Read-only view of a tick for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::events::LossReason;
use super::level::Category;
use super::state::{GamePhase, GameState, Warning};

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub category: Category,
    pub name: &'static str,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct BossView {
    pub pos: Vec2,
    pub hp: u32,
    pub max_hp: u32,
}

/// Everything the renderer, HUD and audio need for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub width: f32,
    pub height: f32,
    pub player_pos: Vec2,
    pub fuel: f32,
    pub max_fuel: f32,
    pub score: u64,
    pub level_score: u64,
    pub shield_ticks: u32,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<Vec2>,
    pub power_ups: Vec<Vec2>,
    pub boss: Option<BossView>,
    pub level_index: usize,
    pub level_name: String,
    pub level_instruction: String,
    pub target: Category,
    /// Pixels per tick the river scrolls in this level
    pub scroll_speed: f32,
    pub transitioning: bool,
    pub transition_message: Option<String>,
    pub warning: Option<Warning>,
    pub won: bool,
    pub lost: bool,
    pub loss_reason: Option<LossReason>,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let level = self.level();

        let transition_message = match self.phase {
            GamePhase::Transitioning { to_level, .. } => {
                self.config.levels.get(to_level).map(|next| {
                    format!("LEVEL {}: {} - {}", to_level + 1, next.name, next.instruction)
                })
            }
            _ => None,
        };
        let loss_reason = match self.phase {
            GamePhase::Lost { reason } => Some(reason),
            _ => None,
        };

        Snapshot {
            time_ticks: self.time_ticks,
            width: self.config.width,
            height: self.config.height,
            player_pos: self.player.pos,
            fuel: self.player.fuel,
            max_fuel: self.config.max_fuel,
            score: self.score,
            level_score: self.level_score,
            shield_ticks: self.player.shield_ticks,
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    category: e.category,
                    name: e.name,
                    pos: e.pos,
                })
                .collect(),
            bullets: self.bullets.iter().map(|b| b.pos).collect(),
            power_ups: self.power_ups.iter().map(|p| p.pos).collect(),
            boss: self.boss.as_ref().map(|b| BossView {
                pos: b.pos,
                hp: b.hp,
                max_hp: b.max_hp,
            }),
            level_index: self.level_index,
            level_name: level.name.clone(),
            level_instruction: level.instruction.clone(),
            target: level.target,
            scroll_speed: level.scroll_speed,
            transitioning: matches!(self.phase, GamePhase::Transitioning { .. }),
            transition_message,
            warning: self.warning.clone(),
            won: self.phase == GamePhase::Won,
            lost: loss_reason.is_some(),
            loss_reason,
        }
    }
}
