//! ECS World — entity lifecycle and generic component storage.
//!
//! The [`World`] exclusively owns all component data. External code holds
//! only [`Entity`] handles and transient references returned by the
//! accessors. Storage is one type-erased homogeneous map per component
//! kind, keyed by entity handle, plus a membership [`Mask`] per entity.
//!
//! Invariant: an entity's mask bit for kind K is set exactly when K's
//! store holds an entry for that entity. Every mutator updates both sides
//! together.

use std::any::Any;
use std::collections::HashMap;

use crate::component::{Component, ComponentKind, Mask};
use crate::entity::Entity;

/// One component instance, type-erased for storage.
type BoxedComponent = Box<dyn Any + Send + Sync>;

/// Entity lifecycle and generic component storage.
///
/// Operations on entities that do not exist are defined as no-ops /
/// `false` / `None` rather than errors: an entity destroyed between a
/// query and a mutation is an expected condition, and the world degrades
/// gracefully.
///
/// The world is mutated in place and assumes a single simulation thread;
/// it carries no internal synchronisation.
pub struct World {
    /// Incremented for every spawned entity. Starts at 1 — the zero ID is
    /// reserved for [`Entity::INVALID`]. Destroyed IDs are not recycled.
    next_id: u64,
    /// Membership mask per live entity.
    entities: HashMap<Entity, Mask>,
    /// Per-kind homogeneous storage, keyed by entity handle.
    stores: HashMap<ComponentKind, HashMap<Entity, BoxedComponent>>,
}

impl World {
    /// Create a new empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: HashMap::new(),
            stores: HashMap::new(),
        }
    }

    /// Spawn a new entity with an empty component mask.
    pub fn spawn(&mut self) -> Entity {
        let entity = Entity::from_raw(self.next_id);
        self.next_id += 1;
        self.entities.insert(entity, Mask::EMPTY);
        entity
    }

    /// Destroy an entity, removing its record and every component it
    /// holds in one step — no partial destruction is observable.
    ///
    /// Returns `true` if the entity existed; unknown entities are a
    /// no-op.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if self.entities.remove(&entity).is_none() {
            return false;
        }
        for store in self.stores.values_mut() {
            store.remove(&entity);
        }
        true
    }

    /// Attach a component to an entity, creating the entity record first
    /// if it does not exist. An existing component of the same kind is
    /// replaced.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        let kind = T::kind();
        self.stores
            .entry(kind)
            .or_default()
            .insert(entity, Box::new(component));
        self.entities.entry(entity).or_insert(Mask::EMPTY).insert(kind);
    }

    /// Detach the component of type `T` from an entity. No-op if the
    /// entity or the component is absent.
    pub fn remove<T: Component>(&mut self, entity: Entity) {
        self.remove_kind(entity, T::kind());
    }

    /// Detach the component of the given kind from an entity. No-op if
    /// the entity or the component is absent.
    pub fn remove_kind(&mut self, entity: Entity, kind: ComponentKind) {
        if let Some(store) = self.stores.get_mut(&kind) {
            store.remove(&entity);
        }
        if let Some(mask) = self.entities.get_mut(&entity) {
            mask.remove(kind);
        }
    }

    /// Returns the component of type `T` for an entity, if any.
    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.stores
            .get(&T::kind())?
            .get(&entity)?
            .downcast_ref::<T>()
    }

    /// Returns a mutable reference to the component of type `T` for an
    /// entity, if any. Mutation happens through this reference — the
    /// component instance itself never leaves the world.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.stores
            .get_mut(&T::kind())?
            .get_mut(&entity)?
            .downcast_mut::<T>()
    }

    /// Reports whether the entity has a component of type `T`.
    #[must_use]
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.has_kind(entity, T::kind())
    }

    /// Reports whether the entity has a component of the given kind.
    /// Always `false` for unknown entities. Agrees with [`World::get`] by
    /// the mask/store invariant.
    #[must_use]
    pub fn has_kind(&self, entity: Entity, kind: ComponentKind) -> bool {
        self.entities.get(&entity).is_some_and(|mask| mask.has(kind))
    }

    /// Returns the current membership mask for an entity.
    #[must_use]
    pub fn mask(&self, entity: Entity) -> Option<Mask> {
        self.entities.get(&entity).copied()
    }

    /// Find all entities whose mask is a superset of `required`.
    ///
    /// An empty `required` mask matches nothing. Iteration order is
    /// unspecified.
    #[must_use]
    pub fn find(&self, required: Mask) -> Vec<Entity> {
        if required.is_empty() {
            return Vec::new();
        }
        self.entities
            .iter()
            .filter(|(_, mask)| mask.contains_all(required))
            .map(|(&entity, _)| entity)
            .collect()
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
