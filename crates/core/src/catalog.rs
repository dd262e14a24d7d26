// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Services and their consists-of / part-of structure.

use crate::error::CoreError;
use crate::ids::ServiceId;
use crate::state::SpaContext;
use spa_center_domain::{DomainError, Service};
use tracing::debug;

impl SpaContext {
    /// Adds a service to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if service identifiers are exhausted.
    pub fn create_service(&mut self, service: Service) -> Result<ServiceId, CoreError> {
        let id: ServiceId = self.services.insert(service)?;
        debug!(%id, "Created service");
        Ok(id)
    }

    /// Makes `part` a sub-service of `whole`. Adding twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown, or if the link would make a
    /// service part of itself, directly or through a cycle.
    pub fn add_sub_service(&mut self, whole: ServiceId, part: ServiceId) -> Result<(), CoreError> {
        self.services.ensure(whole)?;
        self.services.ensure(part)?;
        if whole == part || self.contains_transitively(part, whole) {
            return Err(DomainError::InvalidValue("Service cannot be part of itself").into());
        }
        if self.parts.link(whole, part) {
            debug!(%whole, %part, "Linked sub-service");
        }
        Ok(())
    }

    /// Removes `part` from `whole`. Removing a missing link is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if either id is not live.
    pub fn remove_sub_service(&mut self, whole: ServiceId, part: ServiceId) -> Result<(), CoreError> {
        self.services.ensure(whole)?;
        self.services.ensure(part)?;
        if self.parts.unlink(whole, part) {
            debug!(%whole, %part, "Unlinked sub-service");
        }
        Ok(())
    }

    /// Direct parts of `service`.
    #[must_use]
    pub fn sub_services(&self, service: ServiceId) -> Vec<ServiceId> {
        self.parts.rights_of(service).collect()
    }

    /// Services that directly contain `service`.
    #[must_use]
    pub fn part_of(&self, service: ServiceId) -> Vec<ServiceId> {
        self.parts.lefts_of(service).collect()
    }

    /// Whether `target` is reachable from `root` through consists-of links.
    fn contains_transitively(&self, root: ServiceId, target: ServiceId) -> bool {
        let mut pending: Vec<ServiceId> = vec![root];
        let mut seen: Vec<ServiceId> = Vec::new();
        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if seen.contains(&current) {
                continue;
            }
            seen.push(current);
            pending.extend(self.parts.rights_of(current));
        }
        false
    }
}
