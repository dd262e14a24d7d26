// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use spa_center_domain::DomainError;

/// Errors that can occur while operating on the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A field failed validation.
    DomainViolation(DomainError),
    /// The operation would break an association invariant.
    IllegalOperation(String),
    /// An identifier does not refer to a live entity.
    UnknownEntity {
        /// The entity type, e.g. "Employee".
        kind: &'static str,
        /// The raw identifier.
        id: u64,
    },
}

impl CoreError {
    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        Self::IllegalOperation(message.into())
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "{err}"),
            Self::IllegalOperation(msg) => write!(f, "{msg}"),
            Self::UnknownEntity { kind, id } => write!(f, "{kind} {id} not found"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::IllegalOperation(_) | Self::UnknownEntity { .. } => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
