//! Headless driving demo.
//!
//! Spawns a single player tank and drives it through scripted intent
//! phases — a straight run, a sweeping arc, then braking to rest —
//! logging pose and speed once per simulated second.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use treads_components::{
    ControlIntent, DVec2, MovementParams, PlayerTag, RenderOrder, Sprite, Transform, Velocity,
};
use treads_ecs::{Entity, World};
use treads_systems::movement;

/// Fixed simulation step, in seconds.
const DT: f64 = 1.0 / 60.0;

/// Scripted drive: (duration seconds, throttle, turn).
const PHASES: &[(f64, f64, f64)] = &[(3.0, 1.0, 0.0), (4.0, 1.0, 0.4), (3.0, 0.0, 0.0)];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("drive=info".parse()?))
        .init();

    let mut world = World::new();

    let ground = world.spawn();
    world.insert(ground, Transform::IDENTITY);
    world.insert(ground, Sprite::new("tilemap_ground"));
    world.insert(ground, RenderOrder::layer(0));

    let player = world.spawn();
    world.insert(player, Transform::from_position(DVec2::new(100.0, 100.0)));
    world.insert(player, Velocity::ZERO);
    world.insert(player, ControlIntent::default());
    world.insert(
        player,
        MovementParams {
            max_forward_speed: 133.3333,
            max_backward_speed: 80.0,
            linear_acceleration: 200.0,
            linear_deceleration: 300.0,
            max_turn_rate: 3.0,
            angular_acceleration: 6.0,
            angular_deceleration: 9.0,
        },
    );
    world.insert(player, PlayerTag);
    world.insert(player, Sprite::new("player_tank"));
    world.insert(player, RenderOrder::layer(10));

    info!(player = %player, "world ready");

    let mut tick = 0u64;
    for &(duration, throttle, turn) in PHASES {
        info!(throttle, turn, "phase start");
        if let Some(intent) = world.get_mut::<ControlIntent>(player) {
            intent.throttle = throttle;
            intent.turn = turn;
        }

        let steps = (duration / DT).round() as u64;
        for _ in 0..steps {
            movement(&mut world, DT);
            tick += 1;
            if tick % 60 == 0 {
                log_pose(&world, player, tick);
            }
        }
    }

    Ok(())
}

fn log_pose(world: &World, player: Entity, tick: u64) {
    let (Some(transform), Some(velocity)) = (
        world.get::<Transform>(player),
        world.get::<Velocity>(player),
    ) else {
        return;
    };

    let speed = velocity.linear.dot(transform.forward());
    info!(
        tick,
        x = transform.position.x,
        y = transform.position.y,
        heading = transform.rotation,
        speed,
        "pose"
    );
}
