//! Level configuration
//!
//! Every fixed constant the coordinator uses — spawn points, unit stats,
//! bomb tuning, heart layout — lives here instead of being scattered through
//! the update code. Configurations are plain serde types loadable from TOML
//! or RON files, with defaults matching the shipped level.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::Vec2;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO failure reading or writing the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File contents failed to parse
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization failure
    #[error("serialize error: {0}")]
    Serialize(String),

    /// File extension is neither `.toml` nor `.ron`
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// Values failed validation
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Player avatar tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Fixed spawn (and collision-reset) point
    pub spawn: Vec2,
    /// Collision bounds width
    pub width: f32,
    /// Collision bounds height
    pub height: f32,
    /// Starting health points
    pub health: i32,
    /// Movement speed in units per second
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            spawn: Vec2::new(1800.0, 211.0),
            width: 20.0,
            height: 40.0,
            health: 3,
            speed: 120.0,
        }
    }
}

/// Stats shared by one hostile archetype (wave enemy or boss)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileStats {
    /// Fixed spawn point for coordinator-driven spawns
    pub spawn: Vec2,
    /// Collision bounds width
    pub width: f32,
    /// Collision bounds height
    pub height: f32,
    /// Starting health points
    pub health: i32,
    /// Damage dealt per player contact
    pub damage: i32,
    /// Patrol speed in units per second
    pub speed: f32,
}

/// Deployable bomb tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombConfig {
    /// Seconds of fuse before the blast
    pub fuse_secs: f32,
    /// Blast radius
    pub range: f32,
    /// Damage applied to every target caught in the blast
    pub damage: i32,
}

impl Default for BombConfig {
    fn default() -> Self {
        Self {
            fuse_secs: 3.0,
            range: 100.0,
            damage: 100,
        }
    }
}

/// Health bar layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBarConfig {
    /// Anchor position of the first heart
    pub anchor: Vec2,
    /// Number of hearts at level start
    pub hearts: u32,
    /// Horizontal spacing between hearts
    pub heart_spacing: f32,
}

impl Default for HealthBarConfig {
    fn default() -> Self {
        Self {
            anchor: Vec2::new(829.0, 100.0),
            hearts: 3,
            heart_spacing: 40.0,
        }
    }
}

/// Complete tuning for one level attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Player avatar tuning
    pub player: PlayerConfig,
    /// Wave enemy archetype
    pub enemy: HostileStats,
    /// Boss archetype
    pub boss: HostileStats,
    /// Deployable bomb tuning
    pub bomb: BombConfig,
    /// Health bar layout
    pub health_bar: HealthBarConfig,
}

impl LevelConfig {
    /// Load a configuration from a `.toml` or `.ron` file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        let config: Self = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a `.toml` or `.ron` file
    pub fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
            }
        }
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return Err(ConfigError::Invalid(
                "player bounds must be positive".to_string(),
            ));
        }
        if self.player.health <= 0 {
            return Err(ConfigError::Invalid(
                "player health must be at least 1".to_string(),
            ));
        }
        for (name, stats) in [("enemy", &self.enemy), ("boss", &self.boss)] {
            if stats.width <= 0.0 || stats.height <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} bounds must be positive"
                )));
            }
            if stats.health <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} health must be at least 1"
                )));
            }
            if stats.speed < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} speed must not be negative"
                )));
            }
        }
        if self.bomb.range <= 0.0 {
            return Err(ConfigError::Invalid(
                "bomb range must be positive".to_string(),
            ));
        }
        if self.bomb.fuse_secs < 0.0 {
            return Err(ConfigError::Invalid(
                "bomb fuse must not be negative".to_string(),
            ));
        }
        if self.health_bar.hearts == 0 {
            return Err(ConfigError::Invalid(
                "health bar needs at least one heart".to_string(),
            ));
        }
        Ok(())
    }

    /// Default enemy archetype
    fn default_enemy() -> HostileStats {
        HostileStats {
            spawn: Vec2::new(800.0, 211.0),
            width: 20.0,
            height: 20.0,
            health: 10,
            damage: 10,
            speed: 5.0,
        }
    }

    /// Default boss archetype
    fn default_boss() -> HostileStats {
        HostileStats {
            spawn: Vec2::new(400.0, 211.0),
            width: 40.0,
            height: 40.0,
            health: 100,
            damage: 20,
            speed: 7.5,
        }
    }
}

impl LevelConfig {
    /// Standard level tuning
    pub fn standard() -> Self {
        Self {
            player: PlayerConfig::default(),
            enemy: Self::default_enemy(),
            boss: Self::default_boss(),
            bomb: BombConfig::default(),
            health_bar: HealthBarConfig::default(),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config_validates() {
        let config = LevelConfig::standard();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_config_matches_level_constants() {
        let config = LevelConfig::standard();
        assert_eq!(config.player.spawn, Vec2::new(1800.0, 211.0));
        assert_eq!(config.enemy.spawn, Vec2::new(800.0, 211.0));
        assert_eq!(config.boss.spawn, Vec2::new(400.0, 211.0));
        assert_eq!(config.health_bar.anchor, Vec2::new(829.0, 100.0));
    }

    #[test]
    fn test_zero_hearts_rejected() {
        let mut config = LevelConfig::standard();
        config.health_bar.hearts = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_bomb_range_rejected() {
        let mut config = LevelConfig::standard();
        config.bomb.range = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_reload_preserves_tuning() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = LevelConfig::standard();
        config.bomb.range = 250.0;
        config.health_bar.hearts = 5;

        for file in ["level.ron", "level.toml"] {
            let path = dir.path().join(file);
            let path = path.to_str().unwrap();
            config.save_to_file(path).unwrap();

            let loaded = LevelConfig::load_from_file(path).unwrap();
            assert_eq!(loaded.bomb.range, 250.0);
            assert_eq!(loaded.health_bar.hearts, 5);
            assert_eq!(loaded.player.spawn, config.player.spawn);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = LevelConfig::load_from_file("level.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_) | ConfigError::Io(_)));
    }
}
