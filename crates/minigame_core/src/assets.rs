//! Visual resource management
//!
//! Units never own texture data; they carry opaque [`TextureId`] handles
//! into a catalog owned by the coordinator, which releases everything when
//! the level is torn down.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Opaque handle to a loaded texture
    pub struct TextureId;
}

/// Unit kinds that own a texture slot in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Player avatar
    Player,
    /// Wave enemy
    Enemy,
    /// Boss
    Boss,
    /// Deployable bomb
    Bomb,
    /// Health bar heart pip
    Heart,
}

impl UnitKind {
    /// Asset path the renderer would load for this kind
    fn asset_path(self) -> &'static str {
        match self {
            Self::Player => "resources/textures/player.png",
            Self::Enemy => "resources/textures/enemy.png",
            Self::Boss => "resources/textures/boss.png",
            Self::Bomb => "resources/textures/bomb.png",
            Self::Heart => "resources/textures/heart.png",
        }
    }
}

#[derive(Debug, Clone)]
struct TextureRecord {
    kind: UnitKind,
    path: &'static str,
}

/// Handles for every unit kind, produced when the catalog loads
#[derive(Debug, Clone, Copy)]
pub struct TextureSet {
    /// Player texture
    pub player: TextureId,
    /// Wave enemy texture
    pub enemy: TextureId,
    /// Boss texture
    pub boss: TextureId,
    /// Bomb texture
    pub bomb: TextureId,
    /// Heart pip texture
    pub heart: TextureId,
}

/// Catalog of textures owned by one level attempt
#[derive(Debug, Default)]
pub struct TextureCatalog {
    textures: SlotMap<TextureId, TextureRecord>,
}

impl TextureCatalog {
    /// Load one texture slot per unit kind
    pub fn load() -> (Self, TextureSet) {
        let mut catalog = Self::default();
        let set = TextureSet {
            player: catalog.insert(UnitKind::Player),
            enemy: catalog.insert(UnitKind::Enemy),
            boss: catalog.insert(UnitKind::Boss),
            bomb: catalog.insert(UnitKind::Bomb),
            heart: catalog.insert(UnitKind::Heart),
        };
        log::debug!("texture catalog loaded ({} textures)", catalog.len());
        (catalog, set)
    }

    fn insert(&mut self, kind: UnitKind) -> TextureId {
        self.textures.insert(TextureRecord {
            kind,
            path: kind.asset_path(),
        })
    }

    /// Whether a handle still points at a live texture
    pub fn contains(&self, id: TextureId) -> bool {
        self.textures.contains_key(id)
    }

    /// Unit kind a handle was loaded for, if still live
    pub fn kind_of(&self, id: TextureId) -> Option<UnitKind> {
        self.textures.get(id).map(|record| record.kind)
    }

    /// Number of live textures
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Whether the catalog holds no textures
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Release every loaded texture
    pub fn release_all(&mut self) {
        for (_, record) in &self.textures {
            log::trace!("releasing texture {}", record.path);
        }
        let released = self.textures.len();
        self.textures.clear();
        if released > 0 {
            log::debug!("texture catalog released {released} textures");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_one_texture_per_kind() {
        let (catalog, set) = TextureCatalog::load();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.kind_of(set.player), Some(UnitKind::Player));
        assert_eq!(catalog.kind_of(set.boss), Some(UnitKind::Boss));
        assert_eq!(catalog.kind_of(set.heart), Some(UnitKind::Heart));
    }

    #[test]
    fn test_release_all_invalidates_handles() {
        let (mut catalog, set) = TextureCatalog::load();
        assert!(catalog.contains(set.enemy));

        catalog.release_all();
        assert!(catalog.is_empty());
        assert!(!catalog.contains(set.enemy));
        assert_eq!(catalog.kind_of(set.bomb), None);
    }

    #[test]
    fn test_release_all_is_idempotent() {
        let (mut catalog, _) = TextureCatalog::load();
        catalog.release_all();
        catalog.release_all();
        assert!(catalog.is_empty());
    }
}
