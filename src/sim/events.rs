//! Discrete events raised during a tick
//!
//! The simulation never touches audio or the DOM. Instead it records what
//! happened in `GameState::events`, which is cleared at the start of every
//! tick; the presentation layer drains it after the tick.

use serde::Serialize;

use super::level::Category;

/// Why a run was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LossReason {
    /// Fuel reached zero
    OutOfFuel,
    /// Second penalty contact while the first was still fresh
    BurnedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Player fired a bullet
    ShotFired,
    /// An enemy was destroyed by a bullet or a shielded ram
    EnemyDestroyed { category: Category, points: u64 },
    /// An unshielded bullet destroyed a penalty-category enemy
    FuelPenalty { category: Category },
    /// First unshielded penalty contact: fuel halved
    Overheat,
    /// Shield picked up (or refreshed)
    PowerUpCollected,
    /// Shield ran out
    ShieldExpired,
    /// Boss spawned at the start of the boss level
    BossAppeared,
    /// Bullet landed on the boss
    BossHit { hp_left: u32 },
    /// Boss dropped a minion
    BossAttack,
    BossDefeated,
    /// Level goal met; inter-level transition begins
    LevelCleared { level: usize },
    /// A new level has started
    LevelAdvanced { level: usize },
    GameWon,
    GameLost { reason: LossReason },
}
