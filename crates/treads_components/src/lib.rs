//! # treads_components
//!
//! The concrete component vocabulary stored in the
//! [`World`](treads_ecs::World): spatial state, motion state, driver
//! intent, movement tuning, and the gameplay records consumed by outside
//! adapters (rendering, input translation, level loading).
//!
//! Kind indices are bit positions in the 64-bit membership mask, so the
//! total number of distinct kinds must stay below 64.

use treads_ecs::ComponentKind;

pub mod gameplay;
pub mod motion;
pub mod transform;

/// Kind of [`Transform`].
pub const TRANSFORM: ComponentKind = ComponentKind::new(0);
/// Kind of [`Velocity`].
pub const VELOCITY: ComponentKind = ComponentKind::new(1);
/// Kind of [`PlayerTag`].
pub const PLAYER_TAG: ComponentKind = ComponentKind::new(2);
/// Kind of [`EnemyTag`].
pub const ENEMY_TAG: ComponentKind = ComponentKind::new(3);
/// Kind of [`Health`].
pub const HEALTH: ComponentKind = ComponentKind::new(4);
/// Kind of [`Sprite`].
pub const SPRITE: ComponentKind = ComponentKind::new(5);
/// Kind of [`Collider`].
pub const COLLIDER: ComponentKind = ComponentKind::new(6);
/// Kind of [`Projectile`].
pub const PROJECTILE: ComponentKind = ComponentKind::new(7);
/// Kind of [`ControlIntent`].
pub const CONTROL_INTENT: ComponentKind = ComponentKind::new(8);
/// Kind of [`MovementParams`].
pub const MOVEMENT_PARAMS: ComponentKind = ComponentKind::new(9);
/// Kind of [`RenderOrder`].
pub const RENDER_ORDER: ComponentKind = ComponentKind::new(10);

// Re-export glam's f64 vector for convenience — all component numerics
// are double precision.
pub use glam::DVec2;

pub use gameplay::{Collider, EnemyTag, Health, PlayerTag, Projectile, RenderOrder, Sprite};
pub use motion::{ControlIntent, MovementParams, Velocity};
pub use transform::Transform;
