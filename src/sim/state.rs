//! Game state and core simulation types
//!
//! All run state lives in one `GameState` owned by the driver and passed by
//! reference into each simulation stage. Nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::events::{GameEvent, LossReason};
use super::geometry::Rect;
use super::level::{Category, LevelDef};
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Active gameplay in `GameState::level_index`
    Running,
    /// Inter-level pause; gameplay resumes in `to_level` when the timer runs out
    Transitioning { to_level: usize, remaining_ticks: u32 },
    /// Final level completed
    Won,
    /// Run ended
    Lost { reason: LossReason },
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost { .. })
    }
}

/// The player's craft
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    /// Centre of the craft; only `x` ever changes
    pub pos: Vec2,
    pub fuel: f32,
    /// Ticks of shield left (0 = no shield)
    pub shield_ticks: u32,
    /// Ticks until the next shot is allowed
    pub shot_cooldown: u32,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.width / 2.0,
                config.height - PLAYER_BOTTOM_OFFSET + PLAYER_HEIGHT / 2.0,
            ),
            fuel: config.max_fuel,
            shield_ticks: 0,
            shot_cooldown: 0,
        }
    }

    pub fn shield_active(&self) -> bool {
        self.shield_ticks > 0
    }

    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Remove fuel, never going below zero
    pub fn burn_fuel(&mut self, amount: f32) {
        self.fuel = (self.fuel - amount).max(0.0);
    }
}

/// A descending AI model
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub id: u32,
    pub category: Category,
    pub name: &'static str,
    pub pos: Vec2,
}

impl Enemy {
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, ENEMY_WIDTH, ENEMY_HEIGHT)
    }
}

/// A player bullet travelling upward
#[derive(Debug, Clone, Serialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
}

impl Bullet {
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

/// A falling shield pickup
#[derive(Debug, Clone, Serialize)]
pub struct PowerUp {
    pub id: u32,
    pub pos: Vec2,
}

impl PowerUp {
    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

/// The boss of the final level
#[derive(Debug, Clone, Serialize)]
pub struct Boss {
    pub pos: Vec2,
    /// +1.0 moving right, -1.0 moving left
    pub direction: f32,
    pub hp: u32,
    pub max_hp: u32,
}

impl Boss {
    pub fn new(config: &GameConfig, hp: u32) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, BOSS_Y),
            direction: 1.0,
            hp,
            max_hp: hp,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, BOSS_WIDTH, BOSS_HEIGHT)
    }

    /// Move one step, reversing at the bounds
    pub fn oscillate(&mut self, speed: f32, min_x: f32, max_x: f32) {
        self.pos.x += self.direction * speed;
        if self.pos.x >= max_x {
            self.pos.x = max_x;
            self.direction = -1.0;
        } else if self.pos.x <= min_x {
            self.pos.x = min_x;
            self.direction = 1.0;
        }
    }
}

/// Severity of an on-screen message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// Informational (shield pickup)
    Notice,
    /// Penalty or run-ending alert
    Alert,
}

/// Transient HUD message with its own countdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub text: String,
    pub remaining_ticks: u32,
    pub kind: WarningKind,
}

pub const OVERHEAT_TEXT: &str = "OVERHEAT 50%";
pub const BURNED_OUT_TEXT: &str = "SYSTEM BURNED OUT";
pub const OUT_OF_FUEL_TEXT: &str = "OUT OF FUEL";
pub const SHIELD_TEXT: &str = "SHIELD ACTIVE";

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    /// Index into `config.levels` of the current level
    pub level_index: usize,
    /// Cumulative score (never decreases)
    pub score: u64,
    /// Score earned in the current level
    pub level_score: u64,
    /// Running-tick counter (does not advance during transitions)
    pub time_ticks: u64,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub power_ups: Vec<PowerUp>,
    /// Present only during a boss level
    pub boss: Option<Boss>,
    /// Set by an unshielded penalty contact; a second one while set is fatal
    pub penalty_streak: bool,
    /// Penalty-free ticks since the streak was set
    pub ticks_since_penalty: u32,
    pub warning: Option<Warning>,
    /// Ticks until the next regular enemy spawn
    pub enemy_spawn_cooldown: u32,
    /// Ticks until the next power-up spawn
    pub power_up_cooldown: u32,
    /// Ticks until the boss drops its next minion
    pub boss_attack_cooldown: u32,
    /// Events raised during the last tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new run at the first level. An invalid config is replaced by
    /// the default campaign.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("Invalid game config ({err}); using defaults");
                GameConfig::default()
            }
        };
        let player = Player::new(&config);
        let mut state = Self {
            player,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            level_index: 0,
            score: 0,
            level_score: 0,
            time_ticks: 0,
            enemies: Vec::new(),
            bullets: Vec::new(),
            power_ups: Vec::new(),
            boss: None,
            penalty_streak: false,
            ticks_since_penalty: 0,
            warning: None,
            enemy_spawn_cooldown: config.enemy_spawn_interval,
            power_up_cooldown: config.power_up_offset,
            boss_attack_cooldown: config.boss_attack_interval,
            events: Vec::new(),
            next_id: 1,
            config,
        };
        super::phase::enter_level(&mut state, 0);
        state.events.clear();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Definition of the current level
    pub fn level(&self) -> &LevelDef {
        &self.config.levels[self.level_index]
    }

    pub fn is_final_level(&self) -> bool {
        self.level_index + 1 >= self.config.levels.len()
    }

    /// Add points to both the run and level totals
    pub fn award(&mut self, points: u64) {
        self.score += points;
        self.level_score += points;
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn set_warning(&mut self, text: &str, ticks: u32, kind: WarningKind) {
        self.warning = Some(Warning {
            text: text.to_string(),
            remaining_ticks: ticks,
            kind,
        });
    }

    /// Spawn an enemy at the given position
    pub fn spawn_enemy(&mut self, category: Category, name: &'static str, pos: Vec2) {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            category,
            name,
            pos,
        });
    }

    pub fn spawn_power_up(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.power_ups.push(PowerUp { id, pos });
    }

    pub fn spawn_bullet(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.bullets.push(Bullet { id, pos });
    }

    /// Drop every moving entity (used between levels)
    pub fn clear_entities(&mut self) {
        self.enemies.clear();
        self.bullets.clear();
        self.power_ups.clear();
    }
}
