//! Core [`Component`] trait, component kinds, and membership masks.
//!
//! Every piece of data stored in the [`World`](crate::World) implements
//! [`Component`] and reports a [`ComponentKind`] — a small integer that
//! doubles as a bit position in a per-entity [`Mask`]. Masks make
//! "has all of these components" queries a single bitwise comparison.
//!
//! Concrete components live in higher-level crates; this crate only
//! defines the contract.

use serde::{Deserialize, Serialize};

/// Identifies a component kind.
///
/// The kind's index doubles as its bit position in a [`Mask`], so the
/// number of distinct kinds registered in one world must stay below
/// [`Mask::BITS`] or membership masks become ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKind(u8);

impl ComponentKind {
    /// Create a kind from its bit index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Mask::BITS`]. Kind registries are
    /// built from `const` contexts, where this becomes a compile error.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(
            (index as u32) < Mask::BITS,
            "component kind index must stay below the mask width"
        );
        Self(index)
    }

    /// Returns the bit index of this kind.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the mask with only this kind's bit set.
    #[must_use]
    pub const fn bit(self) -> Mask {
        Mask(1 << self.0)
    }
}

/// A bitset recording which component kinds an entity currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mask(u64);

impl Mask {
    /// The empty mask.
    pub const EMPTY: Self = Self(0);

    /// Number of distinct component kinds one mask can track.
    pub const BITS: u32 = u64::BITS;

    /// Set the bit for `kind`.
    pub fn insert(&mut self, kind: ComponentKind) {
        self.0 |= kind.bit().0;
    }

    /// Clear the bit for `kind`.
    pub fn remove(&mut self, kind: ComponentKind) {
        self.0 &= !kind.bit().0;
    }

    /// Returns `true` if the bit for `kind` is set.
    #[must_use]
    pub const fn has(self, kind: ComponentKind) -> bool {
        self.0 & kind.bit().0 != 0
    }

    /// Returns `true` if every bit of `required` is also set in `self`.
    #[must_use]
    pub const fn contains_all(self, required: Mask) -> bool {
        self.0 & required.0 == required.0
    }

    /// Returns `true` if no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Compute the mask covering all of the given component kinds.
///
/// Pure function — no [`World`](crate::World) involved, so queries can be
/// described before any world exists.
#[must_use]
pub fn mask_for(kinds: &[ComponentKind]) -> Mask {
    let mut mask = Mask::EMPTY;
    for &kind in kinds {
        mask.insert(kind);
    }
    mask
}

/// The core component trait.
///
/// All data stored in the [`World`](crate::World) must implement this
/// trait. Components must be serialisable so adapters can translate
/// persisted level data into component values, and `Send + Sync` so a
/// world can be handed between threads wholesale (component access itself
/// is single-threaded).
pub trait Component: Send + Sync + 'static + Serialize + for<'de> Deserialize<'de> {
    /// The kind this component reports for storage and mask queries.
    fn kind() -> ComponentKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_bit_matches_index() {
        assert_eq!(ComponentKind::new(0).bit(), Mask(1));
        assert_eq!(ComponentKind::new(3).bit(), Mask(1 << 3));
        assert_eq!(ComponentKind::new(63).bit(), Mask(1 << 63));
    }

    #[test]
    fn test_mask_insert_remove_has() {
        let a = ComponentKind::new(2);
        let b = ComponentKind::new(5);

        let mut mask = Mask::EMPTY;
        assert!(mask.is_empty());

        mask.insert(a);
        assert!(mask.has(a));
        assert!(!mask.has(b));

        mask.insert(b);
        mask.remove(a);
        assert!(!mask.has(a));
        assert!(mask.has(b));
    }

    #[test]
    fn test_mask_for_ors_kind_bits() {
        let a = ComponentKind::new(0);
        let b = ComponentKind::new(4);

        let mask = mask_for(&[a, b]);
        assert!(mask.has(a));
        assert!(mask.has(b));
        assert_eq!(mask, mask_for(&[b, a]));
        assert_eq!(mask_for(&[]), Mask::EMPTY);
    }

    #[test]
    fn test_contains_all_is_a_superset_test() {
        let a = ComponentKind::new(1);
        let b = ComponentKind::new(2);
        let c = ComponentKind::new(3);

        let held = mask_for(&[a, b, c]);
        let required = mask_for(&[a, c]);

        assert!(held.contains_all(required));
        assert!(!required.contains_all(held));
        // Every mask is a superset of the empty mask.
        assert!(Mask::EMPTY.contains_all(Mask::EMPTY));
        assert!(held.contains_all(Mask::EMPTY));
    }
}
