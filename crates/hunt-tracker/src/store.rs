//! The `TrackerStore` — per-target visibility, transition generations, and
//! discovery state.

use hunt_core::TargetIdx;

use crate::Visibility;

/// Holds mutable state for every configured target.
///
/// All vectors are indexed by `TargetIdx` and are always length
/// `target_count`.  `found_order` records discoveries in the order they
/// happened and only ever grows.
pub struct TrackerStore {
    /// Per-target marker state, indexed by `TargetIdx`.
    pub visibility: Vec<Visibility>,

    /// Bumped on every transition so that settle requests scheduled for an
    /// earlier transition can be recognised as stale.
    pub generation: Vec<u32>,

    /// `true` once the target has been discovered.  Never reset.
    pub found: Vec<bool>,

    /// Discovered targets in discovery order.
    pub found_order: Vec<TargetIdx>,
}

impl TrackerStore {
    /// Create a store with every target Hidden and undiscovered.
    pub fn new(target_count: usize) -> Self {
        Self {
            visibility:  vec![Visibility::Hidden; target_count],
            generation:  vec![0; target_count],
            found:       vec![false; target_count],
            found_order: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.visibility.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visibility.is_empty()
    }

    #[inline]
    pub fn visibility(&self, target: TargetIdx) -> Visibility {
        self.visibility[target.index()]
    }

    #[inline]
    pub fn generation(&self, target: TargetIdx) -> u32 {
        self.generation[target.index()]
    }

    #[inline]
    pub fn is_found(&self, target: TargetIdx) -> bool {
        self.found[target.index()]
    }

    /// Number of targets discovered so far.
    #[inline]
    pub fn found_count(&self) -> usize {
        self.found_order.len()
    }

    /// Number of targets still to be discovered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.len() - self.found_count()
    }

    /// Move `target` to `to` and return the new generation.
    pub fn transition(&mut self, target: TargetIdx, to: Visibility) -> u32 {
        let i = target.index();
        self.visibility[i] = to;
        self.generation[i] = self.generation[i].wrapping_add(1);
        self.generation[i]
    }

    /// Record `target` as discovered.
    ///
    /// Returns `false` (and changes nothing) if it was already found.
    pub fn mark_found(&mut self, target: TargetIdx) -> bool {
        let i = target.index();
        if self.found[i] {
            return false;
        }
        self.found[i] = true;
        self.found_order.push(target);
        self.transition(target, Visibility::Hidden);
        true
    }

    /// Undiscovered targets in configuration order.
    pub fn undiscovered(&self) -> impl Iterator<Item = TargetIdx> + '_ {
        self.found
            .iter()
            .enumerate()
            .filter(|(_, found)| !**found)
            .map(|(i, _)| TargetIdx(i as u16))
    }
}
