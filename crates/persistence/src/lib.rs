// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON file persistence for the Spa Center registry.
//!
//! The whole registry is written as one pretty-printed JSON document built
//! from [`Snapshot`]. Loading parses the document into a fresh
//! [`SpaContext`], re-checking every association, and only replaces the
//! caller's context once that succeeds.
//!
//! [`JsonStore::write`] and [`JsonStore::read`] propagate every failure.
//! [`JsonStore::save`] and [`JsonStore::load`] are the lenient variants used
//! by the console harness: failures are logged, and only a missing file is
//! reported back from `load`.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use spa_center::{Snapshot, SpaContext};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use time::Date;
use tracing::{error, info};

/// Default data file name used by the console harness.
pub const DEFAULT_DATA_FILE: &str = "spa-center.json";

/// A registry stored in a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every extent of `ctx` to the file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn write(&self, ctx: &SpaContext) -> Result<(), PersistenceError> {
        let json: String = serde_json::to_string_pretty(&ctx.snapshot())?;
        fs::write(&self.path, json)?;
        info!(
            path = %self.path.display(),
            persons = ctx.persons().len(),
            bookings = ctx.bookings().len(),
            "Saved registry"
        );
        Ok(())
    }

    /// Reads the file into a new registry pinned to `today` (or using the
    /// current date when `None`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file does not exist, or an error if it
    /// cannot be read, parsed, or describes an inconsistent registry.
    pub fn read(&self, today: Option<Date>) -> Result<SpaContext, PersistenceError> {
        let content: String = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        let ctx: SpaContext = SpaContext::restore(snapshot, today)?;
        info!(
            path = %self.path.display(),
            persons = ctx.persons().len(),
            bookings = ctx.bookings().len(),
            "Loaded registry"
        );
        Ok(ctx)
    }

    /// Writes `ctx`, logging instead of returning any failure.
    pub fn save(&self, ctx: &SpaContext) {
        if let Err(err) = self.write(ctx) {
            error!(path = %self.path.display(), error = %err, "Failed to save registry");
        }
    }

    /// Replaces `ctx` with the file's contents, keeping its pinned date.
    ///
    /// On any failure other than a missing file the error is logged and
    /// `ctx` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the file does not exist.
    pub fn load(&self, ctx: &mut SpaContext) -> Result<(), PersistenceError> {
        match self.read(ctx.pinned_today()) {
            Ok(loaded) => {
                *ctx = loaded;
                Ok(())
            }
            Err(err @ PersistenceError::NotFound(_)) => Err(err),
            Err(err) => {
                error!(path = %self.path.display(), error = %err, "Failed to load registry");
                Ok(())
            }
        }
    }
}
