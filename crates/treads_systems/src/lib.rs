//! # treads_systems
//!
//! Simulation systems that run over the [`World`](treads_ecs::World) once
//! per step. Only the kinematics live here; input translation and
//! rendering are adapters that talk to the world through the same public
//! contract and never appear in this crate.

pub mod movement;

pub use movement::movement;
