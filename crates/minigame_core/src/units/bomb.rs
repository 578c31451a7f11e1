//! Deployable area-effect bomb
//!
//! At most one bomb exists at a time; the coordinator enforces that. The
//! bomb itself is only a fuse, a blast radius, and the damage it applies to
//! whatever targets the coordinator hands it.

use super::{Hostile, Visible};
use crate::assets::TextureId;
use crate::config::BombConfig;
use crate::foundation::math::Vec2;
use crate::foundation::time::FuseTimer;

/// A deployed bomb counting down to its blast
#[derive(Debug, Clone)]
pub struct Bomb {
    position: Vec2,
    fuse: FuseTimer,
    range: f32,
    damage: i32,
    texture: TextureId,
}

impl Bomb {
    /// Deploy a bomb at `position`
    pub fn new(config: &BombConfig, position: Vec2, texture: TextureId) -> Self {
        Self {
            position,
            fuse: FuseTimer::new(config.fuse_secs),
            range: config.range,
            damage: config.damage,
            texture,
        }
    }

    /// Advance the fuse countdown
    pub fn advance_timer(&mut self, dt: f32) {
        self.fuse.advance(dt);
    }

    /// Whether the fuse has run out
    pub fn is_exploding(&self) -> bool {
        self.fuse.is_expired()
    }

    /// Seconds left on the fuse
    pub fn remaining_fuse(&self) -> f32 {
        self.fuse.remaining()
    }

    /// Blast radius
    pub fn range(&self) -> f32 {
        self.range
    }

    /// Deploy position (blast center)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Apply blast damage to every target caught in range
    ///
    /// The coordinator decides the target set; the bomb only deals damage.
    pub fn explode<'a, I>(&self, targets: I)
    where
        I: IntoIterator<Item = &'a mut Hostile>,
    {
        let mut hit = 0usize;
        for target in targets {
            target.take_damage(self.damage);
            hit += 1;
        }
        log::debug!(
            "bomb at ({:.0}, {:.0}) hit {hit} target(s) for {} damage",
            self.position.x,
            self.position.y,
            self.damage
        );
    }
}

impl Visible for Bomb {
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
    use crate::config::LevelConfig;

    fn test_bomb() -> Bomb {
        Bomb::new(&BombConfig::default(), Vec2::new(800.0, 211.0), TextureId::default())
    }

    #[test]
    fn test_fuse_counts_down_to_blast() {
        let mut bomb = test_bomb();
        assert!(!bomb.is_exploding());

        bomb.advance_timer(1.5);
        assert!(!bomb.is_exploding());

        bomb.advance_timer(1.5);
        assert!(bomb.is_exploding());
    }

    #[test]
    fn test_explode_damages_every_target() {
        let config = LevelConfig::standard();
        let bomb = test_bomb();
        let mut targets = vec![
            Hostile::new(&config.enemy, bomb.position(), TextureId::default()),
            Hostile::new(&config.enemy, bomb.position(), TextureId::default()),
        ];

        bomb.explode(targets.iter_mut());

        assert!(targets.iter().all(Hostile::is_dead));
    }

    #[test]
    fn test_explode_with_no_targets_is_harmless() {
        let bomb = test_bomb();
        bomb.explode(std::iter::empty());
    }
}
