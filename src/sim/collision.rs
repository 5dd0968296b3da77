//! Axis-aligned collision detection
//!
//! Colliders are sprite-sized boxes anchored at the entity's top-left corner.
//! Visual rotation is ignored on purpose: a spinning meteor keeps its upright box.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Overlap test with inclusive bounds (touching edges or corners count)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x <= other.max_x()
            && other.x <= self.max_x()
            && self.y <= other.max_y()
            && other.y <= self.max_y()
    }
}

/// Remove every entity of `a` that touches any entity of `b`, and vice versa
///
/// Two phases: all pairs are tested against the pre-removal collections, then
/// both collections are filtered. One entity can therefore take out several
/// opponents in the same tick (a bullet grazing two meteors destroys both).
/// Survivors keep their relative order. Returns the number of intersecting pairs.
pub fn remove_colliding<A: Entity, B: Entity>(a: &mut Vec<A>, b: &mut Vec<B>) -> usize {
    let b_colliders: Vec<Aabb> = b.iter().map(Entity::collider).collect();
    let mut hit_a = vec![false; a.len()];
    let mut hit_b = vec![false; b.len()];
    let mut pairs = 0;

    for (i, entity) in a.iter().enumerate() {
        let collider = entity.collider();
        for (j, other) in b_colliders.iter().enumerate() {
            if collider.intersects(other) {
                hit_a[i] = true;
                hit_b[j] = true;
                pairs += 1;
            }
        }
    }

    if pairs > 0 {
        let mut hits = hit_a.into_iter();
        a.retain(|_| !hits.next().unwrap_or(false));
        let mut hits = hit_b.into_iter();
        b.retain(|_| !hits.next().unwrap_or(false));
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Assets, SpriteId};
    use crate::sim::entity::{Bullet, Meteor};
    use glam::DVec2;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_shared_edge_counts() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let corner = Aabb::new(10.0, 10.0, 4.0, 4.0);
        assert!(a.intersects(&right));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.001, 10.0, 10.0);
        let right = Aabb::new(10.5, 2.0, 1.0, 1.0);
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&right));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 2.0, 2.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    fn meteor_at(assets: &Assets, x: f64, y: f64) -> Meteor {
        Meteor::new(assets, 0, DVec2::new(x, y), DVec2::ZERO, 0.0)
    }

    #[test]
    fn test_remove_colliding_drops_both_sides() {
        let assets = Assets::default();
        let mut meteors = vec![
            meteor_at(&assets, 0.0, 0.0),
            meteor_at(&assets, 500.0, 500.0),
        ];
        let mut bullets = vec![
            Bullet::new(&assets, DVec2::new(20.0, 20.0), 0.0),
            Bullet::new(&assets, DVec2::new(300.0, 0.0), 0.0),
        ];

        let pairs = remove_colliding(&mut meteors, &mut bullets);
        assert_eq!(pairs, 1);
        assert_eq!(meteors.len(), 1);
        assert_eq!(meteors[0].position(), DVec2::new(500.0, 500.0));
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].position(), DVec2::new(300.0, 0.0));
    }

    #[test]
    fn test_one_bullet_between_two_meteors_takes_both() {
        let assets = Assets::default();
        // Meteor variant 0 is 101x84; the bullet straddles both boxes
        let mut meteors = vec![
            meteor_at(&assets, 0.0, 0.0),
            meteor_at(&assets, 105.0, 0.0),
        ];
        let mut bullets = vec![Bullet::new(&assets, DVec2::new(95.0, 10.0), 0.0)];

        let pairs = remove_colliding(&mut meteors, &mut bullets);
        assert_eq!(pairs, 2);
        assert!(meteors.is_empty());
        assert!(bullets.is_empty());
    }

    #[test]
    fn test_one_meteor_absorbs_several_bullets() {
        let assets = Assets::default();
        let mut meteors = vec![meteor_at(&assets, 0.0, 0.0)];
        let mut bullets = vec![
            Bullet::new(&assets, DVec2::new(10.0, 10.0), 0.0),
            Bullet::new(&assets, DVec2::new(900.0, 900.0), 0.0),
            Bullet::new(&assets, DVec2::new(50.0, 30.0), 0.0),
        ];

        assert_eq!(remove_colliding(&mut meteors, &mut bullets), 2);
        assert!(meteors.is_empty());
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].sprite(), SpriteId::Bullet);
        assert_eq!(bullets[0].position(), DVec2::new(900.0, 900.0));
    }

    #[test]
    fn test_no_hits_leaves_collections_untouched() {
        let assets = Assets::default();
        let mut meteors = vec![meteor_at(&assets, 0.0, 0.0)];
        let mut bullets = vec![Bullet::new(&assets, DVec2::new(400.0, 400.0), 0.0)];
        assert_eq!(remove_colliding(&mut meteors, &mut bullets), 0);
        assert_eq!(meteors.len(), 1);
        assert_eq!(bullets.len(), 1);
    }

    fn arb_aabb() -> impl Strategy<Value = Aabb> {
        (-500.0..500.0f64, -500.0..500.0f64, 0.0..200.0f64, 0.0..200.0f64)
            .prop_map(|(x, y, w, h)| Aabb::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_intersects_is_symmetric(a in arb_aabb(), b in arb_aabb()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_box_touching_right_edge_intersects(a in arb_aabb(), w in 0.0..50.0f64, h in 0.0..50.0f64) {
            let neighbour = Aabb::new(a.max_x(), a.y, w, h);
            prop_assert!(a.intersects(&neighbour));
        }
    }
}
