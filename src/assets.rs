//! Sprite registry
//!
//! Built once at startup and never mutated afterwards. The simulation only
//! needs each sprite's pixel size (colliders are sprite-sized boxes); image
//! decoding belongs to whatever renders the frame.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Handle to a sprite in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Player,
    Bullet,
    /// Index into the meteor variant table
    Meteor(usize),
}

/// Name and pixel dimensions of one sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteInfo {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl SpriteInfo {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }

    #[inline]
    pub fn half_size(&self) -> DVec2 {
        self.size() / 2.0
    }

    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSprite {
                name: self.name.clone(),
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// The full sprite set: one player, one bullet, at least one meteor
///
/// Only built through [`Assets::new`] (or the stock default), so the meteor
/// table is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Assets {
    player: SpriteInfo,
    bullet: SpriteInfo,
    meteors: Vec<SpriteInfo>,
}

/// On-disk manifest layout, checked by [`Assets::new`] before use
#[derive(Deserialize)]
struct Manifest {
    player: SpriteInfo,
    bullet: SpriteInfo,
    meteors: Vec<SpriteInfo>,
}

impl Default for Assets {
    /// Dimensions of the stock Kenney space shooter sprites
    fn default() -> Self {
        Self {
            player: SpriteInfo::new("playerShip1_blue", 99, 75),
            bullet: SpriteInfo::new("laserBlue02", 13, 37),
            meteors: vec![
                SpriteInfo::new("meteorBrown_big1", 101, 84),
                SpriteInfo::new("meteorBrown_big2", 120, 98),
                SpriteInfo::new("meteorBrown_big3", 89, 82),
                SpriteInfo::new("meteorBrown_big4", 98, 96),
                SpriteInfo::new("meteorBrown_med1", 43, 43),
                SpriteInfo::new("meteorBrown_med3", 45, 40),
                SpriteInfo::new("meteorBrown_small1", 28, 28),
                SpriteInfo::new("meteorBrown_small2", 29, 26),
                SpriteInfo::new("meteorBrown_tiny1", 18, 18),
                SpriteInfo::new("meteorBrown_tiny2", 16, 15),
            ],
        }
    }
}

impl Assets {
    pub fn new(player: SpriteInfo, bullet: SpriteInfo, meteors: Vec<SpriteInfo>) -> Result<Self> {
        if meteors.is_empty() {
            return Err(Error::NoMeteorVariants);
        }
        player.validate()?;
        bullet.validate()?;
        for meteor in &meteors {
            meteor.validate()?;
        }
        Ok(Self {
            player,
            bullet,
            meteors,
        })
    }

    /// Load a JSON sprite manifest (`{"player": {..}, "bullet": {..}, "meteors": [..]}`)
    pub fn load_manifest(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest = serde_json::from_str(&json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let assets = Self::new(manifest.player, manifest.bullet, manifest.meteors)?;
        log::info!(
            "Loaded sprite manifest {} ({} meteor variants)",
            path.display(),
            assets.meteor_variants()
        );
        Ok(assets)
    }

    pub fn player(&self) -> &SpriteInfo {
        &self.player
    }

    pub fn bullet(&self) -> &SpriteInfo {
        &self.bullet
    }

    pub fn meteor(&self, variant: usize) -> Option<&SpriteInfo> {
        self.meteors.get(variant)
    }

    /// Number of meteor variants (never zero)
    pub fn meteor_variants(&self) -> usize {
        self.meteors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_meteors() {
        let assets = Assets::default();
        assert_eq!(assets.meteor_variants(), 10);
        assert_eq!(assets.player().size(), DVec2::new(99.0, 75.0));
        assert_eq!(assets.meteor(1).map(|s| s.width), Some(120));
        assert!(assets.meteor(10).is_none());
    }

    #[test]
    fn test_empty_meteor_table_is_rejected() {
        let result = Assets::new(
            SpriteInfo::new("ship", 10, 10),
            SpriteInfo::new("laser", 2, 6),
            Vec::new(),
        );
        assert!(matches!(result, Err(Error::NoMeteorVariants)));
    }

    #[test]
    fn test_zero_sized_sprite_is_rejected() {
        let result = Assets::new(
            SpriteInfo::new("ship", 0, 10),
            SpriteInfo::new("laser", 2, 6),
            vec![SpriteInfo::new("rock", 8, 8)],
        );
        assert!(matches!(result, Err(Error::InvalidSprite { .. })));
    }

    #[test]
    fn test_manifest_parse_error_names_file() {
        let path = std::env::temp_dir().join(format!("meteor_rush_manifest_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = Assets::load_manifest(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("meteor_rush_manifest_"));
    }

    #[test]
    fn test_manifest_with_no_meteors_is_rejected() {
        let path = std::env::temp_dir().join(format!("meteor_rush_empty_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"player":{"name":"p","width":4,"height":4},"bullet":{"name":"b","width":1,"height":2},"meteors":[]}"#,
        )
        .unwrap();
        let err = Assets::load_manifest(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, Error::NoMeteorVariants));
    }

    #[test]
    fn test_manifest_with_zero_sized_meteor_is_rejected() {
        let path = std::env::temp_dir().join(format!("meteor_rush_flat_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"player":{"name":"p","width":4,"height":4},"bullet":{"name":"b","width":1,"height":2},"meteors":[{"name":"flat","width":9,"height":0}]}"#,
        )
        .unwrap();
        let err = Assets::load_manifest(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, Error::InvalidSprite { ref name, .. } if name == "flat"));
    }

    #[test]
    fn test_single_meteor_manifest_drives_spawning() {
        use crate::settings::Settings;
        use crate::sim::{Entity, World};

        let path = std::env::temp_dir().join(format!("meteor_rush_single_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"player":{"name":"p","width":40,"height":30},"bullet":{"name":"b","width":4,"height":12},"meteors":[{"name":"rock","width":20,"height":20}]}"#,
        )
        .unwrap();
        let assets = Assets::load_manifest(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(assets.meteor_variants(), 1);

        let mut world = World::new(Settings::default(), assets).unwrap();
        for _ in 0..5 {
            world.spawn_meteor();
        }
        assert_eq!(world.meteors.len(), 5);
        assert!(world.meteors.iter().all(|m| m.variant() == 0));
        assert!(world.meteors.iter().all(|m| m.size() == DVec2::new(20.0, 20.0)));
    }
}
