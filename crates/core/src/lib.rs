// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity registry for the Spa Center object model.
//!
//! [`SpaContext`] owns one [`Extent`] per entity type and every association
//! between entities. Entities are addressed by typed identifiers; all
//! operations that touch more than one entity go through the context so both
//! ends of an association are always updated together.

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

mod booking;
mod branch;
mod catalog;
mod entities;
mod error;
mod extent;
mod ids;
mod links;
mod people;
mod seniority;
mod snapshot;
mod state;

#[cfg(test)]
mod tests;

pub use entities::{Booking, Customer, Employee, EmploymentTerms};
pub use error::CoreError;
pub use extent::Extent;
pub use ids::{BookingId, BranchId, CustomerId, EmployeeId, EntityId, PersonId, RoomId, ServiceId};
pub use links::{KeyedLinkError, KeyedLinks, Links};
pub use snapshot::{
    BookingRecord, BranchRecord, EmployeeRecord, Record, RoomRecord, ServiceRecord, Snapshot,
};
pub use state::SpaContext;
