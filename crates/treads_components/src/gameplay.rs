//! Gameplay records stored opaquely by the core.
//!
//! These components carry data for outside adapters — rendering, input,
//! collision, level loading. The simulation core never interprets them.

use serde::{Deserialize, Serialize};
use treads_ecs::{Component, ComponentKind};

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerTag;

impl Component for PlayerTag {
    fn kind() -> ComponentKind {
        crate::PLAYER_TAG
    }
}

/// Marks enemy entities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EnemyTag;

impl Component for EnemyTag {
    fn kind() -> ComponentKind {
        crate::ENEMY_TAG
    }
}

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Health {
    /// Current hit points.
    pub current: f64,
    /// Maximum hit points.
    pub max: f64,
}

impl Health {
    /// Create a health component at full hit points.
    #[must_use]
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    /// Returns `true` while hit points remain.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    /// Apply damage, clamping at zero.
    pub fn damage(&mut self, amount: f64) {
        self.current = (self.current - amount).max(0.0);
    }

    /// Heal, clamping at max.
    pub fn heal(&mut self, amount: f64) {
        self.current = (self.current + amount).min(self.max);
    }
}

impl Component for Health {
    fn kind() -> ComponentKind {
        crate::HEALTH
    }
}

/// Which sprite the renderer draws for an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sprite {
    /// Identifier into the renderer's sprite registry.
    pub sprite_id: String,
}

impl Sprite {
    /// Create a sprite reference.
    #[must_use]
    pub fn new(sprite_id: impl Into<String>) -> Self {
        Self {
            sprite_id: sprite_id.into(),
        }
    }
}

impl Component for Sprite {
    fn kind() -> ComponentKind {
        crate::SPRITE
    }
}

/// Axis-aligned collision box, offset from the entity's transform.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Collider {
    /// Box width in world units.
    pub width: f64,
    /// Box height in world units.
    pub height: f64,
    /// Horizontal offset from the transform position.
    pub offset_x: f64,
    /// Vertical offset from the transform position.
    pub offset_y: f64,
}

impl Component for Collider {
    fn kind() -> ComponentKind {
        crate::COLLIDER
    }
}

/// Draw-layer ordering for the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderOrder {
    /// Layer index; higher layers draw on top.
    pub z: i32,
}

impl RenderOrder {
    /// Create a render order at the given layer.
    #[must_use]
    pub const fn layer(z: i32) -> Self {
        Self { z }
    }
}

impl Component for RenderOrder {
    fn kind() -> ComponentKind {
        crate::RENDER_ORDER
    }
}

/// Projectile flight data.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Projectile {
    /// Muzzle speed in world units per second.
    pub speed: f64,
    /// Remaining lifetime in seconds.
    pub lifetime: f64,
    /// Damage applied on hit.
    pub damage: f64,
}

impl Component for Projectile {
    fn kind() -> ComponentKind {
        crate::PROJECTILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_and_heal() {
        let mut h = Health::full(100.0);
        assert!(h.is_alive());
        h.damage(60.0);
        assert_eq!(h.current, 40.0);
        h.heal(30.0);
        assert_eq!(h.current, 70.0);
        h.damage(200.0);
        assert_eq!(h.current, 0.0);
        assert!(!h.is_alive());
    }

    #[test]
    fn test_heal_never_exceeds_max() {
        let mut h = Health::full(50.0);
        h.heal(10.0);
        assert_eq!(h.current, 50.0);
    }

    #[test]
    fn test_sprite_new() {
        let s = Sprite::new("player_tank");
        assert_eq!(s.sprite_id, "player_tank");
    }

    #[test]
    fn test_tag_kinds_are_distinct() {
        assert_ne!(PlayerTag::kind(), EnemyTag::kind());
    }

    #[test]
    fn test_render_order_sorts_by_layer() {
        let ground = RenderOrder::layer(0);
        let actor = RenderOrder::layer(10);
        assert!(ground < actor);
    }
}
