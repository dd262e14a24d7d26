// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain value types for the Spa Center object model.
//!
//! Everything in this crate is a plain value: construction and every setter
//! validate their input and return a [`DomainError`] on the first violation,
//! leaving the value untouched. Relationships between entities live in the
//! `spa-center` core crate.

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

mod address;
mod booking;
mod branch;
mod date_format;
mod employment;
mod error;
mod person;
mod room;
mod seniority;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use address::Address;
pub use booking::{BookingStatus, PaymentMethod};
pub use branch::{Branch, OpeningHours};
pub use date_format::{appointment, calendar_date, clock_time};
pub use employment::{
    Duties, DutyKind, NailTechnicianDuty, Pesel, ReceptionistDuty, SaunaSupervisorDuty,
    TherapistDuty,
};
pub use error::DomainError;
pub use person::Person;
pub use room::Room;
pub use seniority::{JuniorProfile, Seniority, SeniorProfile};
pub use service::Service;
pub use validation::{
    age_on, validate_birth_date, validate_booking_date, validate_email, validate_hire_date,
    validate_leave_date, validate_phone_number, validate_years_of_experience,
};
