// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking payment and status values.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a booking is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Paid on site at the spa.
    AtTheSpa,
    /// Paid online ahead of the visit.
    PaymentGateway,
}

impl PaymentMethod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AtTheSpa => "AtTheSpa",
            Self::PaymentGateway => "PaymentGateway",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AtTheSpa" => Ok(Self::AtTheSpa),
            "PaymentGateway" => Ok(Self::PaymentGateway),
            _ => Err(DomainError::ParseError {
                input: s.to_string(),
                expected: "payment method",
            }),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Initial state for every new booking.
    #[default]
    Accepted,
    /// The visit took place.
    Completed,
    /// The booking was called off.
    Canceled,
}

impl BookingStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }

    /// Checks if a transition from this state to another is valid.
    ///
    /// Valid transitions are:
    /// - Accepted → Completed
    /// - Accepted → Canceled
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Accepted, Self::Completed | Self::Canceled)
        )
    }

    /// Returns whether the booking can no longer change.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(Self::Accepted),
            "Completed" => Ok(Self::Completed),
            "Canceled" => Ok(Self::Canceled),
            _ => Err(DomainError::ParseError {
                input: s.to_string(),
                expected: "booking status",
            }),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
