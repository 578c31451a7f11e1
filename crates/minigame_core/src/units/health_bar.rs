//! Player health indicator
//!
//! Health is displayed as a row of discrete heart pips. The bar only tracks
//! the count; applying the matching damage to the player is the
//! coordinator's job.

use super::Visible;
use crate::assets::TextureId;
use crate::config::HealthBarConfig;
use crate::foundation::math::Vec2;

/// One heart pip of remaining health
#[derive(Debug, Clone)]
pub struct Heart {
    position: Vec2,
    texture: TextureId,
}

impl Visible for Heart {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn texture(&self) -> TextureId {
        self.texture
    }
}

/// Discrete heart display tracking remaining player health
#[derive(Debug, Clone)]
pub struct HealthBar {
    hearts: Vec<Heart>,
}

impl HealthBar {
    /// Lay out the configured number of hearts rightward from the anchor
    pub fn new(config: &HealthBarConfig, texture: TextureId) -> Self {
        let hearts = (0..config.hearts)
            .map(|i| Heart {
                position: config.anchor + Vec2::new(i as f32 * config.heart_spacing, 0.0),
                texture,
            })
            .collect();
        Self { hearts }
    }

    /// Remove one heart; a no-op once the bar is empty
    pub fn deplete_one(&mut self) {
        self.hearts.pop();
    }

    /// Whether every heart is gone
    pub fn is_depleted(&self) -> bool {
        self.hearts.is_empty()
    }

    /// Remaining hearts, for rendering
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    /// Number of hearts left
    pub fn remaining(&self) -> usize {
        self.hearts.len()
    }
}
