//! Motion state, driver intent, and movement tuning.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use treads_ecs::{Component, ComponentKind};

/// Linear and angular velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    /// Linear velocity in world units per second.
    pub linear: DVec2,
    /// Angular velocity in radians per second.
    pub angular: f64,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self {
        linear: DVec2::ZERO,
        angular: 0.0,
    };

    /// Create a new velocity.
    #[must_use]
    pub fn new(vx: f64, vy: f64, angular: f64) -> Self {
        Self {
            linear: DVec2::new(vx, vy),
            angular,
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Component for Velocity {
    fn kind() -> ComponentKind {
        crate::VELOCITY
    }
}

/// Normalized driver input, decoupled from any input device.
///
/// Producers are expected to keep both axes in `[-1, 1]`. The store does
/// not enforce the range; the movement system clamps defensively rather
/// than rejecting out-of-range values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlIntent {
    /// Forward/backward drive along the current facing.
    pub throttle: f64,
    /// Turn demand; positive increases rotation.
    pub turn: f64,
}

impl Component for ControlIntent {
    fn kind() -> ComponentKind {
        crate::CONTROL_INTENT
    }
}

/// How an entity responds to control intent.
///
/// All values are non-negative tuning constants; the movement system
/// treats negative configuration as zero. Serialized camelCase — the
/// shape level documents use for this record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovementParams {
    /// Top speed driving forward, world units per second.
    pub max_forward_speed: f64,
    /// Top speed reversing, world units per second.
    pub max_backward_speed: f64,
    /// Speed gained per second while throttle is held.
    pub linear_acceleration: f64,
    /// Speed shed per second once throttle is released.
    pub linear_deceleration: f64,
    /// Top angular speed, radians per second.
    pub max_turn_rate: f64,
    /// Angular speed gained per second while turning.
    pub angular_acceleration: f64,
    /// Angular speed shed per second once turn is released.
    pub angular_deceleration: f64,
}

impl Component for MovementParams {
    fn kind() -> ComponentKind {
        crate::MOVEMENT_PARAMS
    }
}
