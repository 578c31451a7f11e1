//! Level unit coordinator
//!
//! Owns every live unit in one level attempt, advances them once per tick,
//! resolves collisions and death/spawn transitions, and exposes a combined
//! traversal of all visible units for rendering.
//!
//! The coordinator is single-threaded and exclusively owned by the game
//! loop; all time-based behavior is deterministic accumulation of the delta
//! time the caller passes in.

use thiserror::Error;

use crate::assets::{TextureCatalog, TextureSet};
use crate::config::LevelConfig;
use crate::foundation::math::{distance, Vec2};
use crate::input::TickInput;
use crate::units::{Bomb, HealthBar, Hostile, Player, Visible};

/// Errors surfaced by coordinator operations
#[derive(Error, Debug)]
pub enum LevelError {
    /// `remove_enemy` was called with an index outside the collection
    #[error("enemy index {index} out of bounds (len {len})")]
    EnemyIndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Collection size at the time of the call
        len: usize,
    },
}

/// Coordinator for every live unit in one level attempt
///
/// Holds at most one player, one boss, and one bomb, plus the enemy wave
/// and the health bar. The two outcome flags are monotonic: once the level
/// is won or lost, nothing inside this type resets it.
pub struct UnitManager {
    config: LevelConfig,
    catalog: TextureCatalog,
    textures: TextureSet,
    player: Option<Player>,
    boss: Option<Hostile>,
    enemies: Vec<Hostile>,
    bomb: Option<Bomb>,
    health_bar: HealthBar,
    level_won: bool,
    level_lost: bool,
}

impl UnitManager {
    /// Start a fresh level attempt
    ///
    /// Spawns the player at the configured spawn point, exactly one initial
    /// enemy, and the health bar; both outcome flags start false.
    pub fn new(config: LevelConfig) -> Self {
        let (catalog, textures) = TextureCatalog::load();
        let player = Player::new(&config.player, textures.player);
        let health_bar = HealthBar::new(&config.health_bar, textures.heart);
        let first_enemy_spawn = config.enemy.spawn;

        let mut manager = Self {
            config,
            catalog,
            textures,
            player: Some(player),
            boss: None,
            enemies: Vec::new(),
            bomb: None,
            health_bar,
            level_won: false,
            level_lost: false,
        };
        manager.add_enemy(first_enemy_spawn);
        manager
    }

    /// Append a wave enemy at `position` with the configured archetype stats
    pub fn add_enemy(&mut self, position: Vec2) {
        self.enemies
            .push(Hostile::new(&self.config.enemy, position, self.textures.enemy));
    }

    /// Advance the whole level by one frame
    ///
    /// Update order is fixed: player, bomb, boss, enemy wave, dead-enemy
    /// removal, then boss spawning once the wave is cleared.
    pub fn tick(&mut self, dt: f32, input: &TickInput) {
        self.update_player(dt, input);
        self.update_bomb(dt);
        self.update_boss(dt);
        self.update_enemies(dt);

        // A decided level spawns nothing: the boss slot being empty after a
        // win must not re-create the boss on the same (or any later) tick.
        if self.enemies.is_empty() && self.boss.is_none() && !self.level_won {
            self.spawn_boss();
        }
    }

    fn update_player(&mut self, dt: f32, input: &TickInput) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.advance(dt);
        let position = player.position();
        let dead = player.is_dead();

        if input.deploy_bomb && self.bomb.is_none() {
            self.spawn_bomb(position);
        }
        if dead {
            self.player = None;
            self.level_lost = true;
            log::info!("player died; level lost");
        }
    }

    fn update_bomb(&mut self, dt: f32) {
        let exploding = match self.bomb.as_mut() {
            Some(bomb) => {
                bomb.advance_timer(dt);
                bomb.is_exploding()
            }
            None => return,
        };
        if !exploding {
            return;
        }

        if let Some(bomb) = self.bomb.take() {
            let center = bomb.position();
            let range = bomb.range();
            // Boss takes blast priority: if it is in range it is the only
            // target, even when enemies are also in range.
            let boss_in_range = self
                .boss
                .as_ref()
                .is_some_and(|boss| distance(boss.position(), center) <= range);
            if boss_in_range {
                bomb.explode(self.boss.as_mut());
            } else {
                bomb.explode(
                    self.enemies
                        .iter_mut()
                        .filter(|enemy| distance(enemy.position(), center) <= range),
                );
            }
            log::debug!("bomb detonated at ({:.0}, {:.0})", center.x, center.y);
        }
    }

    fn update_boss(&mut self, dt: f32) {
        let collided = {
            let Some(boss) = self.boss.as_mut() else {
                return;
            };
            boss.advance(dt);
            // The player slot may already be empty this tick; a collision
            // test against an absent player must never run.
            match self.player.as_ref() {
                Some(player) => boss.collides_with(player),
                None => false,
            }
        };
        if collided {
            self.resolve_player_collision();
        }

        if self.boss.as_ref().is_some_and(Hostile::is_dead) {
            self.boss = None;
            self.level_won = true;
            log::info!("boss defeated; level won");
        }
    }

    fn update_enemies(&mut self, dt: f32) {
        for i in 0..self.enemies.len() {
            self.enemies[i].advance(dt);
            let collided = match self.player.as_ref() {
                Some(player) => self.enemies[i].collides_with(player),
                None => false,
            };
            if collided {
                self.resolve_player_collision();
            }
        }

        // Dead enemies are dropped only after the full pass.
        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.is_dead());
        let removed = before - self.enemies.len();
        if removed > 0 {
            log::debug!("removed {removed} dead enemies");
        }
    }

    /// Shared resolution for any hostile touching the player: reset the
    /// player to the spawn point, then spend a heart or lose the level.
    fn resolve_player_collision(&mut self) {
        let spawn = self.config.player.spawn;
        let Some(player) = self.player.as_mut() else {
            return;
        };
        player.set_position(spawn.x, spawn.y);
        if self.health_bar.is_depleted() {
            self.level_lost = true;
            log::info!("health bar depleted; level lost");
        } else {
            self.health_bar.deplete_one();
            player.take_damage(1);
        }
    }

    /// Instantiate the boss at its configured spawn point
    ///
    /// Called automatically once the wave is cleared; also exposed for
    /// debug overrides.
    pub fn spawn_boss(&mut self) {
        let spawn = self.config.boss.spawn;
        self.boss = Some(Hostile::new(&self.config.boss, spawn, self.textures.boss));
        log::info!("boss spawned at ({:.0}, {:.0})", spawn.x, spawn.y);
    }

    /// Deploy the bomb at `position` unless one is already live
    pub fn spawn_bomb(&mut self, position: Vec2) {
        if self.bomb.is_some() {
            return;
        }
        self.bomb = Some(Bomb::new(&self.config.bomb, position, self.textures.bomb));
        log::debug!("bomb deployed at ({:.0}, {:.0})", position.x, position.y);
    }

    /// Drop the player unconditionally
    pub fn remove_player(&mut self) {
        self.player = None;
    }

    /// Drop the boss unconditionally
    pub fn remove_boss(&mut self) {
        self.boss = None;
    }

    /// Remove the enemy at `index`
    ///
    /// An out-of-bounds index is a caller error and fails loudly instead of
    /// silently doing nothing.
    pub fn remove_enemy(&mut self, index: usize) -> Result<(), LevelError> {
        let len = self.enemies.len();
        if index >= len {
            return Err(LevelError::EnemyIndexOutOfBounds { index, len });
        }
        self.enemies.remove(index);
        Ok(())
    }

    /// Lazily traverse every visible unit in draw order
    ///
    /// Fixed order: player, boss, bomb, enemies (insertion order), then the
    /// remaining hearts. Each call produces a fresh snapshot; the returned
    /// iterator borrows the coordinator, so units cannot be mutated or
    /// removed while it is live.
    pub fn iter_visible(&self) -> impl Iterator<Item = &dyn Visible> + '_ {
        self.player
            .iter()
            .map(|p| p as &dyn Visible)
            .chain(self.boss.iter().map(|b| b as &dyn Visible))
            .chain(self.bomb.iter().map(|b| b as &dyn Visible))
            .chain(self.enemies.iter().map(|e| e as &dyn Visible))
            .chain(self.health_bar.hearts().iter().map(|h| h as &dyn Visible))
    }

    /// Hostiles within `radius` of `point` (Euclidean, edges inclusive)
    ///
    /// The boss takes priority: if it is in range it is the only result,
    /// even when enemies are also in range.
    pub fn units_in_range(&self, point: Vec2, radius: f32) -> Vec<&Hostile> {
        if let Some(boss) = self.boss.as_ref() {
            if distance(boss.position(), point) <= radius {
                return vec![boss];
            }
        }
        self.enemies
            .iter()
            .filter(|enemy| distance(enemy.position(), point) <= radius)
            .collect()
    }

    /// Whether the level has been won (monotonic)
    pub fn is_level_won(&self) -> bool {
        self.level_won
    }

    /// Whether the level has been lost (monotonic)
    pub fn is_level_lost(&self) -> bool {
        self.level_lost
    }

    /// The player, if still alive
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Mutable player access for caller-driven movement
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// The boss, if spawned and alive
    pub fn boss(&self) -> Option<&Hostile> {
        self.boss.as_ref()
    }

    /// Mutable boss access
    pub fn boss_mut(&mut self) -> Option<&mut Hostile> {
        self.boss.as_mut()
    }

    /// The live enemy wave in insertion order
    pub fn enemies(&self) -> &[Hostile] {
        &self.enemies
    }

    /// Mutable access to the enemy wave (elements only; the collection
    /// itself stays coordinator-owned)
    pub fn enemies_mut(&mut self) -> &mut [Hostile] {
        &mut self.enemies
    }

    /// The deployed bomb, if one is live
    pub fn bomb(&self) -> Option<&Bomb> {
        self.bomb.as_ref()
    }

    /// The health bar
    pub fn health_bar(&self) -> &HealthBar {
        &self.health_bar
    }

    /// The level tuning this coordinator was built with
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Release the visual resources owned by this coordinator
    ///
    /// Unit-internal resources belong to their collaborators and are left
    /// untouched.
    pub fn dispose(&mut self) {
        self.catalog.release_all();
    }
}
