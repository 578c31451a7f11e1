//! Player avatar

use super::Visible;
use crate::assets::TextureId;
use crate::config::PlayerConfig;
use crate::foundation::math::{Rect, Vec2};

/// Player avatar for one level attempt
///
/// Movement is caller-driven: the game loop sets a velocity from whatever
/// input backend it uses, and the coordinator integrates it once per tick.
#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    velocity: Vec2,
    size: Vec2,
    health: i32,
    texture: TextureId,
}

impl Player {
    /// Spawn a player with configured stats
    pub fn new(config: &PlayerConfig, texture: TextureId) -> Self {
        Self {
            position: config.spawn,
            velocity: Vec2::zeros(),
            size: Vec2::new(config.width, config.height),
            health: config.health,
            texture,
        }
    }

    /// Advance position by the current velocity
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Set the movement velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Teleport to a position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Apply damage, flooring health at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Whether the player has no health left
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Remaining health points
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Collision bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

impl Visible for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn texture(&self) -> TextureId {
        self.texture
    }
}
