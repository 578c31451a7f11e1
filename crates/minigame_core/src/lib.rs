//! # Minigame Core
//!
//! Per-frame unit coordination for a single mini-game level.
//!
//! The crate owns a player avatar, a wave of enemies, a boss, one
//! deployable bomb, and a health bar. Each tick it advances positions,
//! resolves collisions, and decides win/loss state. It is an in-process
//! library: no rendering, no input polling, no threads — the game loop
//! drives everything by calling [`UnitManager::tick`] once per frame.
//!
//! ## Quick Start
//!
//! ```rust
//! use minigame_core::prelude::*;
//!
//! let mut level = UnitManager::new(LevelConfig::standard());
//! let input = TickInput::none();
//!
//! level.tick(1.0 / 60.0, &input);
//! assert!(!level.is_level_won() && !level.is_level_lost());
//!
//! for unit in level.iter_visible() {
//!     let _ = (unit.position(), unit.texture());
//! }
//! level.dispose();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod input;
pub mod manager;
pub mod units;

pub use config::{ConfigError, LevelConfig};
pub use input::TickInput;
pub use manager::{LevelError, UnitManager};

/// Common imports for crate users
pub mod prelude {
    pub use crate::assets::{TextureCatalog, TextureId, TextureSet, UnitKind};
    pub use crate::config::{ConfigError, LevelConfig};
    pub use crate::foundation::math::{distance, Rect, Vec2};
    pub use crate::foundation::time::FuseTimer;
    pub use crate::input::TickInput;
    pub use crate::manager::{LevelError, UnitManager};
    pub use crate::units::{Bomb, HealthBar, Heart, Hostile, Player, Visible};
}
