//! Game tuning
//!
//! Every gameplay number lives here so a run can be re-balanced from JSON
//! without touching the simulation. `Default` is the three-level campaign;
//! `GameConfig::classic()` is the single endless level of the first release.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::level::{Category, LevelDef, LevelGoal};

/// Complete tuning for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    /// Horizontal step per tick while a direction is held
    pub player_speed: f32,
    /// Player centre is clamped to [margin, width - margin]
    pub player_margin: f32,
    /// Ticks between shots while fire is held
    pub shot_cooldown_ticks: u32,
    /// Upward bullet speed per tick
    pub bullet_speed: f32,

    // === Fuel ===
    /// Starting (and maximum) fuel
    pub max_fuel: f32,
    /// Fuel burned every running tick
    pub fuel_per_tick: f32,
    /// Fuel lost when an unshielded bullet destroys a penalty-category enemy
    pub bullet_penalty_fuel: f32,

    // === Scoring ===
    pub text_points: u64,
    pub video_points: u64,
    pub glitch_points: u64,
    /// Payout multiplier for destroying a penalty-category enemy while shielded
    pub shield_multiplier: u64,

    // === Timers (ticks) ===
    pub enemy_spawn_interval: u32,
    pub power_up_period: u32,
    /// Tick (within the first period) on which the first power-up appears
    pub power_up_offset: u32,
    pub shield_duration: u32,
    pub warning_duration: u32,
    /// Short notice shown on power-up pickup
    pub notice_duration: u32,
    /// Penalty streak clears after more than this many penalty-free ticks
    pub penalty_reset_ticks: u32,
    pub transition_ticks: u32,

    // === Boss ===
    /// Horizontal boss speed per tick
    pub boss_speed: f32,
    /// Boss oscillates with its centre in [margin, width - margin]
    pub boss_margin: f32,
    /// Ticks between minion drops
    pub boss_attack_interval: u32,

    // === Levels ===
    pub levels: Vec<LevelDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,

            player_speed: 5.5,
            player_margin: 20.0,
            shot_cooldown_ticks: 12,
            bullet_speed: 7.0,

            max_fuel: 100.0,
            fuel_per_tick: 0.12,
            bullet_penalty_fuel: 10.0,

            text_points: 150,
            video_points: 100,
            glitch_points: 150,
            shield_multiplier: 2,

            enemy_spawn_interval: 32,
            power_up_period: 180,
            power_up_offset: 17,
            shield_duration: 600,
            warning_duration: 45,
            notice_duration: 48,
            penalty_reset_ticks: 140,
            transition_ticks: 120,

            boss_speed: 2.0,
            boss_margin: 80.0,
            boss_attack_interval: 45,

            levels: LevelDef::campaign(),
        }
    }
}

impl GameConfig {
    /// Single endless level: shoot text models, dodge video models (60/40 mix).
    /// Every bullet kill pays; only contact with video models is punished.
    pub fn classic() -> Self {
        Self {
            levels: vec![LevelDef {
                name: "AI Raid".to_string(),
                instruction: "Shoot TEXT AIs. Avoid VIDEO AIs.".to_string(),
                target: Category::Text,
                penalty: Some(Category::Video),
                scroll_speed: 3.5,
                target_weight: 0.6,
                shot_penalty: false,
                goal: LevelGoal::Endless,
            }],
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from optional JSON, falling back to defaults on any problem
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded game config ({} levels)", config.levels.len());
                config
            }
            Some(Err(err)) => {
                log::warn!("Ignoring game config: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::invalid("width/height", "playfield must be positive"));
        }
        if self.player_margin < 0.0 || self.player_margin * 2.0 > self.width {
            return Err(ConfigError::invalid("player_margin", "must fit inside the playfield"));
        }
        if self.boss_margin < 0.0 || self.boss_margin * 2.0 > self.width {
            return Err(ConfigError::invalid("boss_margin", "must fit inside the playfield"));
        }
        let non_negative = [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("max_fuel", self.max_fuel),
            ("fuel_per_tick", self.fuel_per_tick),
            ("bullet_penalty_fuel", self.bullet_penalty_fuel),
            ("boss_speed", self.boss_speed),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")));
            }
        }
        if self.max_fuel == 0.0 {
            return Err(ConfigError::invalid("max_fuel", "must be > 0"));
        }
        let positive_timers = [
            ("enemy_spawn_interval", self.enemy_spawn_interval),
            ("power_up_period", self.power_up_period),
            ("boss_attack_interval", self.boss_attack_interval),
            ("transition_ticks", self.transition_ticks),
        ];
        for (field, value) in positive_timers {
            if value == 0 {
                return Err(ConfigError::invalid(field, "must be > 0"));
            }
        }
        if self.power_up_offset == 0 || self.power_up_offset > self.power_up_period {
            return Err(ConfigError::invalid(
                "power_up_offset",
                "must be in 1..=power_up_period",
            ));
        }
        if self.levels.is_empty() {
            return Err(ConfigError::invalid("levels", "at least one level is required"));
        }
        for level in &self.levels {
            level.validate()?;
        }
        Ok(())
    }

    /// Points awarded for destroying an enemy of the given category
    pub fn points_for(&self, category: Category) -> u64 {
        match category {
            Category::Text => self.text_points,
            Category::Video => self.video_points,
            Category::Glitch => self.glitch_points,
        }
    }
}
