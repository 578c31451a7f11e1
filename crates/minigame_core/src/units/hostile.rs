//! Hostile units
//!
//! Wave enemies and the boss share one contract — position, patrol
//! movement, health, and a collision test against the player — so they are
//! a single type. Which slot the coordinator holds them in is what makes
//! one of them "the boss".

use super::{Player, Visible};
use crate::assets::TextureId;
use crate::config::HostileStats;
use crate::foundation::math::{Rect, Vec2};

/// A hostile unit (wave enemy or boss)
#[derive(Debug, Clone)]
pub struct Hostile {
    position: Vec2,
    size: Vec2,
    heading: Vec2,
    speed: f32,
    damage: i32,
    health: i32,
    texture: TextureId,
}

impl Hostile {
    /// Create a hostile at `position` with the archetype's stats
    ///
    /// Hostiles patrol toward the player side of the arena until the caller
    /// steers them elsewhere.
    pub fn new(stats: &HostileStats, position: Vec2, texture: TextureId) -> Self {
        Self {
            position,
            size: Vec2::new(stats.width, stats.height),
            heading: Vec2::new(1.0, 0.0),
            speed: stats.speed,
            damage: stats.damage,
            health: stats.health,
            texture,
        }
    }

    /// Advance along the current heading
    pub fn advance(&mut self, dt: f32) {
        self.position += self.heading * self.speed * dt;
    }

    /// Steer toward a new heading (normalized; zero vectors stop the unit)
    pub fn set_heading(&mut self, heading: Vec2) {
        let magnitude = heading.magnitude();
        self.heading = if magnitude > f32::EPSILON {
            heading / magnitude
        } else {
            Vec2::zeros()
        };
    }

    /// Teleport to a position
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Apply damage, flooring health at zero
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Drop health to zero immediately
    pub fn kill(&mut self) {
        self.health = 0;
    }

    /// Whether the unit has no health left
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Rectangle-overlap collision test against the player
    pub fn collides_with(&self, player: &Player) -> bool {
        self.bounds().overlaps(&player.bounds())
    }

    /// Current position
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Collision bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Damage dealt per player contact
    pub fn contact_damage(&self) -> i32 {
        self.damage
    }

    /// Remaining health points
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Patrol speed
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Visible for Hostile {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn texture(&self) -> TextureId {
        self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelConfig, PlayerConfig};
    use approx::assert_relative_eq;

    fn enemy_at(position: Vec2) -> Hostile {
        Hostile::new(&LevelConfig::standard().enemy, position, TextureId::default())
    }

    #[test]
    fn test_advance_follows_heading_and_speed() {
        let mut hostile = enemy_at(Vec2::new(0.0, 0.0));
        hostile.advance(2.0);

        // Default heading is +x at the archetype speed (5.0/s).
        assert_relative_eq!(hostile.position().x, 10.0);
        assert_relative_eq!(hostile.position().y, 0.0);
    }

    #[test]
    fn test_set_heading_normalizes() {
        let mut hostile = enemy_at(Vec2::new(0.0, 0.0));
        hostile.set_heading(Vec2::new(0.0, -10.0));
        hostile.advance(1.0);

        assert_relative_eq!(hostile.position().y, -5.0);
    }

    #[test]
    fn test_zero_heading_stops_movement() {
        let mut hostile = enemy_at(Vec2::new(3.0, 4.0));
        hostile.set_heading(Vec2::zeros());
        hostile.advance(10.0);

        assert_eq!(hostile.position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_collision_with_player() {
        let player = Player::new(&PlayerConfig::default(), TextureId::default());
        let overlapping = enemy_at(player.position());
        let distant = enemy_at(player.position() + Vec2::new(500.0, 0.0));

        assert!(overlapping.collides_with(&player));
        assert!(!distant.collides_with(&player));
    }

    #[test]
    fn test_kill_marks_dead() {
        let mut hostile = enemy_at(Vec2::zeros());
        assert!(!hostile.is_dead());

        hostile.kill();
        assert!(hostile.is_dead());
    }

    #[test]
    fn test_damage_accumulates() {
        let mut hostile = enemy_at(Vec2::zeros());
        hostile.take_damage(4);
        assert!(!hostile.is_dead());
        assert_eq!(hostile.health(), 6);

        hostile.take_damage(6);
        assert!(hostile.is_dead());
    }
}
