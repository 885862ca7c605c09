//! # treads_ecs
//!
//! The minimal ECS runtime: opaque entity handles, a fixed registry of
//! component kinds tracked in 64-bit membership masks, and the [`World`]
//! store that owns all component data.
//!
//! This crate provides:
//!
//! - [`Entity`] — lightweight `u64` entity identifiers.
//! - [`Component`] trait — the contract all stored data must satisfy.
//! - [`ComponentKind`], [`Mask`], [`mask_for`] — bitmask membership.
//! - [`World`] — entity lifecycle and type-erased component storage.

pub mod component;
pub mod entity;
pub mod world;

pub use component::{Component, ComponentKind, Mask, mask_for};
pub use entity::Entity;
pub use world::World;
