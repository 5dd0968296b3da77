//! GPU-ready sprite instances

use bytemuck::{Pod, Zeroable};
use glam::DAffine2;

use super::RenderSurface;
use crate::assets::SpriteId;

/// One sprite draw, laid out for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// 2x2 linear part, column major
    pub matrix: [f32; 4],
    pub translation: [f32; 2],
    /// Texture slot (see `sprite_slot`)
    pub sprite: u32,
    pub _pad: u32,
}

impl SpriteInstance {
    pub fn new(sprite: SpriteId, transform: DAffine2) -> Self {
        let m = transform.matrix2;
        Self {
            matrix: [m.x_axis.x as f32, m.x_axis.y as f32, m.y_axis.x as f32, m.y_axis.y as f32],
            translation: [transform.translation.x as f32, transform.translation.y as f32],
            sprite: sprite_slot(sprite),
            _pad: 0,
        }
    }
}

/// Texture slot: player 0, bullet 1, meteor variants from 2 up
pub fn sprite_slot(sprite: SpriteId) -> u32 {
    match sprite {
        SpriteId::Player => 0,
        SpriteId::Bullet => 1,
        SpriteId::Meteor(variant) => 2 + variant as u32,
    }
}

/// Records one frame of sprite draws in draw order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    instances: Vec<SpriteInstance>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn instances(&self) -> &[SpriteInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Raw bytes for an instance buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl RenderSurface for DrawList {
    fn draw_sprite(&mut self, sprite: SpriteId, transform: DAffine2) {
        self.instances.push(SpriteInstance::new(sprite, transform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.draw_sprite(SpriteId::Player, DAffine2::IDENTITY);
        list.draw_sprite(SpriteId::Meteor(3), DAffine2::from_translation(DVec2::new(5.0, 6.0)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.instances()[0].sprite, 0);
        assert_eq!(list.instances()[1].sprite, 5);
        assert_eq!(list.instances()[1].translation, [5.0, 6.0]);
        assert_eq!(list.as_bytes().len(), 64);

        list.clear();
        assert!(list.is_empty());
    }
}
