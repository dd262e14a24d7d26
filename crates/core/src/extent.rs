// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ids::EntityId;
use std::collections::BTreeMap;

/// All live instances of one entity type.
///
/// Identifiers are allocated in increasing order and never reused, so
/// iteration follows insertion order. Callers outside the crate only ever
/// see `&Extent`: a read-only view of the live entities, not a copy.
#[derive(Debug, Clone)]
pub struct Extent<I, T> {
    entries: BTreeMap<I, T>,
    next_id: u64,
}

impl<I, T> Default for Extent<I, T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<I: EntityId, T> Extent<I, T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: I) -> Option<&T> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: I) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(id, entity)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.entries.iter().map(|(id, value)| (*id, value))
    }

    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.entries.keys().copied()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.values()
    }

    /// Returns the entity at `index` in insertion order.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<(I, &T)> {
        self.iter().nth(index)
    }

    pub(crate) fn insert(&mut self, value: T) -> Result<I, CoreError> {
        let id: I = I::from_raw(self.next_id);
        self.next_id = successor(id)?;
        self.entries.insert(id, value);
        Ok(id)
    }

    pub(crate) fn require(&self, id: I) -> Result<&T, CoreError> {
        self.entries.get(&id).ok_or(CoreError::UnknownEntity {
            kind: I::KIND,
            id: id.raw(),
        })
    }

    pub(crate) fn require_mut(&mut self, id: I) -> Result<&mut T, CoreError> {
        self.entries.get_mut(&id).ok_or(CoreError::UnknownEntity {
            kind: I::KIND,
            id: id.raw(),
        })
    }

    pub(crate) fn take(&mut self, id: I) -> Result<T, CoreError> {
        self.entries.remove(&id).ok_or(CoreError::UnknownEntity {
            kind: I::KIND,
            id: id.raw(),
        })
    }

    pub(crate) fn ensure(&self, id: I) -> Result<(), CoreError> {
        self.require(id).map(|_| ())
    }

    /// Clears the extent and bulk-replaces its contents.
    ///
    /// Identifier allocation continues after the largest loaded id.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the extent unchanged, if the largest id
    /// leaves no room for another allocation.
    pub(crate) fn load(
        &mut self,
        entries: impl IntoIterator<Item = (I, T)>,
    ) -> Result<(), CoreError> {
        let entries: BTreeMap<I, T> = entries.into_iter().collect();
        let next_id: u64 = entries
            .keys()
            .next_back()
            .map_or(Ok(1), |last| successor(*last))?;
        self.entries = entries;
        self.next_id = next_id;
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_id = 1;
    }
}

fn successor<I: EntityId>(id: I) -> Result<u64, CoreError> {
    id.raw().checked_add(1).ok_or_else(|| {
        CoreError::illegal(format!("{} id {} is out of range", I::KIND, id.raw()))
    })
}
