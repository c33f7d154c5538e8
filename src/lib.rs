//! AI Raid - a River Raid style arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, level progression)
//! - `renderer`: WebGPU presentation of simulation snapshots
//! - `audio`: Sound cues keyed to simulation events
//! - `config`: Data-driven game tuning

pub mod audio;
pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;

/// Fixed geometry that gameplay tuning never changes
pub mod consts {
    /// Nominal simulation rate (one tick per animation frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Player hit-box size, centred on the player position
    pub const PLAYER_WIDTH: f32 = 36.0;
    pub const PLAYER_HEIGHT: f32 = 26.0;
    /// Distance from the bottom edge to the top of the player hit-box
    pub const PLAYER_BOTTOM_OFFSET: f32 = 75.0;
    /// Distance from the bottom edge to the bullet muzzle
    pub const MUZZLE_BOTTOM_OFFSET: f32 = 70.0;

    /// Enemy hit-box size, centred on the enemy position
    pub const ENEMY_WIDTH: f32 = 44.0;
    pub const ENEMY_HEIGHT: f32 = 32.0;

    /// Bullet hit-box size, centred on the bullet position
    pub const BULLET_WIDTH: f32 = 8.0;
    pub const BULLET_HEIGHT: f32 = 16.0;

    /// Power-up hit-box size, centred on the power-up position
    pub const POWER_UP_SIZE: f32 = 32.0;

    /// Boss hit-box size, centred on the boss position
    pub const BOSS_WIDTH: f32 = 120.0;
    pub const BOSS_HEIGHT: f32 = 60.0;
    /// Boss cruising altitude (centre y)
    pub const BOSS_Y: f32 = 90.0;

    /// Spawn inset: enemies appear in [ENEMY_SPAWN_INSET, width - ENEMY_SPAWN_INSET - 50]
    pub const ENEMY_SPAWN_INSET: f32 = 30.0;
    pub const POWER_UP_SPAWN_INSET: f32 = 50.0;
    /// Spawn altitude above the visible top edge
    pub const ENEMY_SPAWN_Y: f32 = -ENEMY_HEIGHT;
    pub const POWER_UP_SPAWN_Y: f32 = -30.0;

    /// Culling margins beyond the visible area
    pub const ENEMY_CULL_MARGIN: f32 = 50.0;
    pub const POWER_UP_CULL_MARGIN: f32 = 30.0;
    pub const BULLET_CULL_Y: f32 = -20.0;
}

/// Convert a tick count to seconds for HUD display
#[inline]
pub fn ticks_to_seconds(ticks: u32) -> f32 {
    ticks as f32 / consts::TICKS_PER_SECOND as f32
}
