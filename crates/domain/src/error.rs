// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while validating a domain value.
///
/// The message carried by each variant is fixed and human readable; callers
/// may match on it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required value is empty.
    MissingValue(&'static str),
    /// A value is out of range, malformed, or violates a date rule.
    InvalidValue(&'static str),
    /// A string could not be parsed into a domain value.
    ParseError {
        /// The rejected input.
        input: String,
        /// What the input was expected to be.
        expected: &'static str,
    },
}

impl DomainError {
    /// Returns the fixed message for validation failures.
    ///
    /// Parse errors have no fixed message and return `None`.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::MissingValue(msg) | Self::InvalidValue(msg) => Some(msg),
            Self::ParseError { .. } => None,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingValue(msg) | Self::InvalidValue(msg) => write!(f, "{msg}"),
            Self::ParseError { input, expected } => {
                write!(f, "Cannot parse '{input}' as {expected}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
