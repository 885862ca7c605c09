//! Spatial transform component.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use treads_ecs::{Component, ComponentKind};

/// Position, rotation, and uniform scale in 2D space.
///
/// This is the primary spatial component — nearly every visible entity
/// carries one. Rotation is in radians; a rotation of zero faces along
/// +X.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: DVec2,
    /// Facing angle in radians.
    pub rotation: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Transform {
    /// The identity transform: origin, facing +X, unit scale.
    pub const IDENTITY: Self = Self {
        position: DVec2::ZERO,
        rotation: 0.0,
        scale: 1.0,
    };

    /// Create a transform at the given position with default rotation and
    /// scale.
    #[must_use]
    pub fn from_position(position: DVec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// The unit vector this transform is facing.
    #[must_use]
    pub fn forward(&self) -> DVec2 {
        DVec2::new(self.rotation.cos(), self.rotation.sin())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Component for Transform {
    fn kind() -> ComponentKind {
        crate::TRANSFORM
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_identity_transform() {
        let t = Transform::IDENTITY;
        assert_eq!(t.position, DVec2::ZERO);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn test_from_position() {
        let t = Transform::from_position(DVec2::new(3.0, 4.0));
        assert_eq!(t.position, DVec2::new(3.0, 4.0));
        assert_eq!(t.rotation, 0.0);
    }

    #[test]
    fn test_forward_follows_rotation() {
        let mut t = Transform::IDENTITY;
        assert!((t.forward() - DVec2::X).length() < 1e-12);

        t.rotation = FRAC_PI_2;
        assert!((t.forward() - DVec2::Y).length() < 1e-12);
    }

    #[test]
    fn test_json_roundtrip() {
        let t = Transform {
            position: DVec2::new(1.5, -2.5),
            rotation: 0.25,
            scale: 2.0,
        };
        let json = serde_json::to_string(&t).unwrap();
        let restored: Transform = serde_json::from_str(&json).unwrap();
        assert_eq!(t, restored);
    }
}
