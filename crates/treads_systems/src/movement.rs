//! Movement integration.
//!
//! Advances motion state once per simulation step for every entity with a
//! transform and a velocity. Entities that also carry driver intent and
//! movement tuning go through the accelerated model: intent becomes a
//! target speed, speed ramps toward the target bounded by the configured
//! acceleration, and velocity is realigned to the current facing before
//! integration. Everything else integrates its existing velocity
//! directly.

use tracing::trace;

use treads_components::{
    ControlIntent, MovementParams, TRANSFORM, Transform, VELOCITY, Velocity,
};
use treads_ecs::{World, mask_for};

/// Advance every movable entity by `dt` seconds.
///
/// A non-positive `dt` leaves the world untouched. Integration is
/// semi-implicit: the position update uses the velocity produced this
/// step, not the velocity the step started with.
pub fn movement(world: &mut World, dt: f64) {
    if dt <= 0.0 {
        return;
    }

    let entities = world.find(mask_for(&[TRANSFORM, VELOCITY]));
    trace!(entities = entities.len(), dt, "movement pass");

    for entity in entities {
        let steering = match (
            world.get::<ControlIntent>(entity),
            world.get::<MovementParams>(entity),
        ) {
            (Some(&intent), Some(&params)) => Some((intent, params)),
            _ => None,
        };

        // The entity may have been mutated since the query; skip rather
        // than fail if either component is gone.
        let Some(&transform) = world.get::<Transform>(entity) else {
            continue;
        };
        let Some(&velocity) = world.get::<Velocity>(entity) else {
            continue;
        };

        let velocity = match steering {
            Some((intent, params)) => steer(&transform, velocity, intent, params, dt),
            None => velocity,
        };

        if let Some(v) = world.get_mut::<Velocity>(entity) {
            *v = velocity;
        }
        if let Some(t) = world.get_mut::<Transform>(entity) {
            t.position += velocity.linear * dt;
            t.rotation += velocity.angular * dt;
        }
    }
}

/// Apply driver intent to a velocity for one step, respecting the
/// configured speed and turn-rate bounds.
///
/// Speed is the velocity projected onto the current facing; any lateral
/// component is discarded, and the returned linear velocity is realigned
/// to the facing. Drift never survives a steered step.
fn steer(
    transform: &Transform,
    velocity: Velocity,
    intent: ControlIntent,
    params: MovementParams,
    dt: f64,
) -> Velocity {
    // Negative tuning is normalized to zero so the clamp bounds below
    // stay ordered.
    let max_forward = params.max_forward_speed.max(0.0);
    let max_backward = params.max_backward_speed.max(0.0);
    let max_turn = params.max_turn_rate.max(0.0);

    let forward = transform.forward();

    let speed = velocity.linear.dot(forward);
    let throttle = intent.throttle.clamp(-1.0, 1.0);
    let target = if throttle > 0.0 {
        throttle * max_forward
    } else if throttle < 0.0 {
        throttle * max_backward
    } else {
        0.0
    };
    let rate = if throttle != 0.0 {
        params.linear_acceleration
    } else {
        params.linear_deceleration
    }
    .max(0.0);
    let speed = approach(speed, target, rate * dt).clamp(-max_backward, max_forward);

    let turn = intent.turn.clamp(-1.0, 1.0);
    let target = turn * max_turn;
    let rate = if turn != 0.0 {
        params.angular_acceleration
    } else {
        params.angular_deceleration
    }
    .max(0.0);
    let angular = approach(velocity.angular, target, rate * dt).clamp(-max_turn, max_turn);

    Velocity {
        linear: forward * speed,
        angular,
    }
}

/// Move `current` toward `target` by at most `max_delta`, never
/// overshooting.
fn approach(current: f64, target: f64, max_delta: f64) -> f64 {
    current + (target - current).clamp(-max_delta, max_delta)
}
