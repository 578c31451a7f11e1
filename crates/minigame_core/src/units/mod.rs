//! Level units
//!
//! Concrete unit types plus the shared [`Visible`] capability. The
//! coordinator's combined traversal is polymorphic over `&dyn Visible`
//! instead of juggling one optional field per concrete type.

pub mod bomb;
pub mod health_bar;
pub mod hostile;
pub mod player;

pub use bomb::Bomb;
pub use health_bar::{Heart, HealthBar};
pub use hostile::Hostile;
pub use player::Player;

use crate::assets::TextureId;
use crate::foundation::math::Vec2;

/// Capability shared by everything the renderer can see
pub trait Visible {
    /// World position of the unit
    fn position(&self) -> Vec2;

    /// Texture handle to draw with
    fn texture(&self) -> TextureId;
}
