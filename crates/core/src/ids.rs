// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed entity identifiers.

use serde::{Deserialize, Serialize};

/// An identifier allocated by an [`Extent`](crate::Extent).
pub trait EntityId: Copy + Ord + std::fmt::Debug {
    /// Human-readable entity type name used in error messages.
    const KIND: &'static str;

    fn from_raw(raw: u64) -> Self;

    fn raw(self) -> u64;
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl EntityId for $name {
            const KIND: &'static str = $kind;

            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} {}", $kind, self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies a [`Person`](spa_center_domain::Person).
    PersonId,
    "Person"
);
entity_id!(
    /// Identifies a [`Customer`](crate::Customer) role.
    CustomerId,
    "Customer"
);
entity_id!(
    /// Identifies an [`Employee`](crate::Employee) role.
    EmployeeId,
    "Employee"
);
entity_id!(ServiceId, "Service");
entity_id!(BookingId, "Booking");
entity_id!(BranchId, "Branch");
entity_id!(RoomId, "Room");
