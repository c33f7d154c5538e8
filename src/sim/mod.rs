//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod events;
pub mod geometry;
pub mod level;
pub mod motion;
pub mod phase;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use events::{GameEvent, LossReason};
pub use geometry::{Rect, overlaps};
pub use level::{Category, LevelDef, LevelGoal};
pub use snapshot::{BossView, EnemyView, Snapshot};
pub use state::{Boss, Bullet, Enemy, GamePhase, GameState, Player, PowerUp, Warning, WarningKind};
pub use tick::{Presenter, TickInput, run_frame, tick, tick_idle};
