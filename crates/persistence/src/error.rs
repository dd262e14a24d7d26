// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use spa_center::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading the data file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The data file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file parsed but describes an inconsistent registry.
    #[error("Restore error: {0}")]
    Restore(#[from] CoreError),
}
