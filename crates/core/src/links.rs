// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Association tables.
//!
//! Each table indexes a relationship in both directions and exposes a single
//! pair of mutators, so the two directions cannot drift apart.

use std::collections::{BTreeMap, BTreeSet};

/// A many-to-many association between `L` and `R`.
///
/// One-to-many relationships use the same table; the caller enforces the
/// "at most one left" side.
#[derive(Debug, Clone)]
pub struct Links<L, R> {
    forward: BTreeMap<L, BTreeSet<R>>,
    backward: BTreeMap<R, BTreeSet<L>>,
}

impl<L, R> Default for Links<L, R> {
    fn default() -> Self {
        Self {
            forward: BTreeMap::new(),
            backward: BTreeMap::new(),
        }
    }
}

impl<L: Copy + Ord, R: Copy + Ord> Links<L, R> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `left` and `right`. Returns `false` if they were already linked.
    pub fn link(&mut self, left: L, right: R) -> bool {
        let added: bool = self.forward.entry(left).or_default().insert(right);
        self.backward.entry(right).or_default().insert(left);
        added
    }

    /// Unlinks `left` and `right`. Returns `false` if they were not linked.
    pub fn unlink(&mut self, left: L, right: R) -> bool {
        let removed: bool = remove_from(&mut self.forward, left, right);
        remove_from(&mut self.backward, right, left);
        removed
    }

    #[must_use]
    pub fn contains(&self, left: L, right: R) -> bool {
        self.forward
            .get(&left)
            .is_some_and(|rights| rights.contains(&right))
    }

    pub fn rights_of(&self, left: L) -> impl Iterator<Item = R> + '_ {
        self.forward
            .get(&left)
            .into_iter()
            .flat_map(|rights| rights.iter().copied())
    }

    pub fn lefts_of(&self, right: R) -> impl Iterator<Item = L> + '_ {
        self.backward
            .get(&right)
            .into_iter()
            .flat_map(|lefts| lefts.iter().copied())
    }

    /// Returns the single left end for one-to-many tables.
    #[must_use]
    pub fn left_of(&self, right: R) -> Option<L> {
        self.lefts_of(right).next()
    }

    #[must_use]
    pub fn right_count(&self, left: L) -> usize {
        self.forward.get(&left).map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn left_count(&self, right: R) -> usize {
        self.backward.get(&right).map_or(0, BTreeSet::len)
    }

    /// Unlinks every right end of `left`, returning them.
    pub fn detach_left(&mut self, left: L) -> Vec<R> {
        let rights: Vec<R> = self.rights_of(left).collect();
        for right in &rights {
            self.unlink(left, *right);
        }
        rights
    }

    /// Unlinks every left end of `right`, returning them.
    pub fn detach_right(&mut self, right: R) -> Vec<L> {
        let lefts: Vec<L> = self.lefts_of(right).collect();
        for left in &lefts {
            self.unlink(*left, right);
        }
        lefts
    }

    /// Iterates over every linked pair, ordered by left end.
    pub fn pairs(&self) -> impl Iterator<Item = (L, R)> + '_ {
        self.forward
            .iter()
            .flat_map(|(left, rights)| rights.iter().map(move |right| (*left, *right)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }
}

fn remove_from<A: Ord, B: Ord>(index: &mut BTreeMap<A, BTreeSet<B>>, key: A, value: B) -> bool {
    let Some(set) = index.get_mut(&key) else {
        return false;
    };
    let removed: bool = set.remove(&value);
    if set.is_empty() {
        index.remove(&key);
    }
    removed
}

/// Why a keyed link was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyedLinkError {
    /// The owner already maps the key to another value.
    KeyTaken,
    /// The value already belongs to a different owner.
    OwnedElsewhere,
}

/// A qualified association: each owner maps keys to values, and each value
/// belongs to at most one owner.
#[derive(Debug, Clone)]
pub struct KeyedLinks<O, K, V> {
    by_owner: BTreeMap<O, BTreeMap<K, V>>,
    owner_of: BTreeMap<V, O>,
}

impl<O, K, V> Default for KeyedLinks<O, K, V> {
    fn default() -> Self {
        Self {
            by_owner: BTreeMap::new(),
            owner_of: BTreeMap::new(),
        }
    }
}

impl<O: Copy + Ord, K: Clone + Ord, V: Copy + Ord> KeyedLinks<O, K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `key` to `value` under `owner`.
    ///
    /// Returns `Ok(false)` if exactly this entry already exists.
    ///
    /// # Errors
    ///
    /// Returns `KeyTaken` if the owner already uses `key` for another value
    /// and `OwnedElsewhere` if `value` belongs to a different owner.
    pub fn insert(&mut self, owner: O, key: K, value: V) -> Result<bool, KeyedLinkError> {
        if self.get(owner, &key) == Some(value) {
            return Ok(false);
        }
        if self.get(owner, &key).is_some() {
            return Err(KeyedLinkError::KeyTaken);
        }
        if self.owner_of.contains_key(&value) {
            return Err(KeyedLinkError::OwnedElsewhere);
        }
        self.by_owner.entry(owner).or_default().insert(key, value);
        self.owner_of.insert(value, owner);
        Ok(true)
    }

    /// Removes the entry for `key` under `owner`, returning its value.
    pub fn remove(&mut self, owner: O, key: &K) -> Option<V> {
        let entries: &mut BTreeMap<K, V> = self.by_owner.get_mut(&owner)?;
        let value: V = entries.remove(key)?;
        if entries.is_empty() {
            self.by_owner.remove(&owner);
        }
        self.owner_of.remove(&value);
        Some(value)
    }

    /// Moves the value stored under `old_key` to `new_key`.
    ///
    /// Returns `Ok(false)` if `old_key` is not present.
    ///
    /// # Errors
    ///
    /// Returns `KeyTaken` if `new_key` is already used by another value.
    pub fn rekey(&mut self, owner: O, old_key: &K, new_key: K) -> Result<bool, KeyedLinkError> {
        let Some(entries) = self.by_owner.get_mut(&owner) else {
            return Ok(false);
        };
        if !entries.contains_key(old_key) {
            return Ok(false);
        }
        if old_key == &new_key {
            return Ok(true);
        }
        if entries.contains_key(&new_key) {
            return Err(KeyedLinkError::KeyTaken);
        }
        if let Some(value) = entries.remove(old_key) {
            entries.insert(new_key, value);
        }
        Ok(true)
    }

    #[must_use]
    pub fn get(&self, owner: O, key: &K) -> Option<V> {
        self.by_owner
            .get(&owner)
            .and_then(|entries| entries.get(key))
            .copied()
    }

    #[must_use]
    pub fn owner_of(&self, value: V) -> Option<O> {
        self.owner_of.get(&value).copied()
    }

    /// Iterates over an owner's entries in key order.
    pub fn entries(&self, owner: O) -> impl Iterator<Item = (&K, V)> + '_ {
        self.by_owner
            .get(&owner)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(key, value)| (key, *value)))
    }

    #[must_use]
    pub fn len(&self, owner: O) -> usize {
        self.by_owner.get(&owner).map_or(0, BTreeMap::len)
    }

    /// Removes every entry of `owner`, returning the released values.
    pub fn detach_owner(&mut self, owner: O) -> Vec<V> {
        let released: Vec<V> = self
            .by_owner
            .remove(&owner)
            .map(|entries| entries.into_values().collect())
            .unwrap_or_default();
        for value in &released {
            self.owner_of.remove(value);
        }
        released
    }

    pub fn clear(&mut self) {
        self.by_owner.clear();
        self.owner_of.clear();
    }
}
