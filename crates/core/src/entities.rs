// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role and booking entities.
//!
//! These hold only their own attributes. Links to other entities live in the
//! association tables of [`SpaContext`](crate::SpaContext).

use crate::ids::PersonId;
use serde::{Deserialize, Serialize};
use spa_center_domain::{
    BookingStatus, DomainError, Duties, PaymentMethod, Pesel, Seniority, age_on, appointment,
    calendar_date, validate_birth_date, validate_hire_date, validate_leave_date,
    validate_years_of_experience,
};
use time::{Date, PrimitiveDateTime};

/// The customer role of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    person: PersonId,
    #[serde(with = "calendar_date")]
    date_of_birth: Date,
    #[serde(default)]
    logged_in: bool,
}

impl Customer {
    pub(crate) const fn new(person: PersonId, date_of_birth: Date) -> Self {
        Self {
            person,
            date_of_birth,
            logged_in: false,
        }
    }

    #[must_use]
    pub const fn person(&self) -> PersonId {
        self.person
    }

    #[must_use]
    pub const fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    /// Returns the customer's age in whole years on `today`.
    #[must_use]
    pub fn age(&self, today: Date) -> u32 {
        age_on(self.date_of_birth, today)
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub const fn login(&mut self) {
        self.logged_in = true;
    }

    pub const fn logout(&mut self) {
        self.logged_in = false;
    }

    pub(crate) fn validate(&self, today: Date) -> Result<(), DomainError> {
        validate_birth_date(self.date_of_birth, today)
    }

    /// # Errors
    ///
    /// Returns an error if the date lies after `today`.
    pub fn set_date_of_birth(&mut self, date_of_birth: Date, today: Date) -> Result<(), DomainError> {
        validate_birth_date(date_of_birth, today)?;
        self.date_of_birth = date_of_birth;
        Ok(())
    }
}

/// Terms under which a person is employed.
///
/// Validated as a whole when the employee role is created.
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentTerms {
    pub pesel: Pesel,
    pub hire_date: Date,
    pub leave_date: Option<Date>,
    pub years_of_experience: f64,
    pub duties: Duties,
}

impl EmploymentTerms {
    #[must_use]
    pub fn new(pesel: Pesel, hire_date: Date, years_of_experience: f64) -> Self {
        Self {
            pesel,
            hire_date,
            leave_date: None,
            years_of_experience,
            duties: Duties::new(),
        }
    }

    #[must_use]
    pub const fn with_leave_date(mut self, leave_date: Date) -> Self {
        self.leave_date = Some(leave_date);
        self
    }

    #[must_use]
    pub fn with_duties(mut self, duties: Duties) -> Self {
        self.duties = duties;
        self
    }

    pub(crate) fn validate(&self, today: Date) -> Result<(), DomainError> {
        validate_employment(
            self.hire_date,
            self.leave_date,
            self.years_of_experience,
            today,
        )
    }
}

fn validate_employment(
    hire_date: Date,
    leave_date: Option<Date>,
    years_of_experience: f64,
    today: Date,
) -> Result<(), DomainError> {
    validate_hire_date(hire_date, today)?;
    if let Some(leave_date) = leave_date {
        validate_leave_date(leave_date, hire_date, today)?;
    }
    validate_years_of_experience(years_of_experience)
}

/// The employee role of a person.
///
/// The PESEL and seniority level are changed through the registry only:
/// the PESEL doubles as the key in a branch's staff map, and seniority
/// transitions must keep supervision links consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    person: PersonId,
    pesel: Pesel,
    #[serde(with = "calendar_date")]
    hire_date: Date,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "calendar_date::option"
    )]
    leave_date: Option<Date>,
    years_of_experience: f64,
    #[serde(default)]
    duties: Duties,
    #[serde(default)]
    seniority: Seniority,
}

impl Employee {
    pub(crate) fn new(person: PersonId, terms: EmploymentTerms) -> Self {
        Self {
            person,
            pesel: terms.pesel,
            hire_date: terms.hire_date,
            leave_date: terms.leave_date,
            years_of_experience: terms.years_of_experience,
            duties: terms.duties,
            seniority: Seniority::Unassigned,
        }
    }

    #[must_use]
    pub const fn person(&self) -> PersonId {
        self.person
    }

    #[must_use]
    pub const fn pesel(&self) -> &Pesel {
        &self.pesel
    }

    #[must_use]
    pub const fn hire_date(&self) -> Date {
        self.hire_date
    }

    #[must_use]
    pub const fn leave_date(&self) -> Option<Date> {
        self.leave_date
    }

    #[must_use]
    pub const fn years_of_experience(&self) -> f64 {
        self.years_of_experience
    }

    #[must_use]
    pub const fn duties(&self) -> &Duties {
        &self.duties
    }

    #[must_use]
    pub const fn seniority(&self) -> &Seniority {
        &self.seniority
    }

    pub(crate) fn validate(&self, today: Date) -> Result<(), DomainError> {
        validate_employment(
            self.hire_date,
            self.leave_date,
            self.years_of_experience,
            today,
        )
    }

    /// Whole calendar years between the hire year and `today`'s year.
    #[must_use]
    pub const fn years_of_service(&self, today: Date) -> i32 {
        today.year() - self.hire_date.year()
    }

    /// # Errors
    ///
    /// Returns an error if the date lies after `today`, or if an existing
    /// leave date would no longer fall after it.
    pub fn set_hire_date(&mut self, hire_date: Date, today: Date) -> Result<(), DomainError> {
        validate_hire_date(hire_date, today)?;
        if let Some(leave_date) = self.leave_date {
            validate_leave_date(leave_date, hire_date, today)?;
        }
        self.hire_date = hire_date;
        Ok(())
    }

    /// Sets or clears the leave date.
    ///
    /// # Errors
    ///
    /// Returns an error if the date is not after the hire date or lies after
    /// `today`.
    pub fn set_leave_date(&mut self, leave_date: Option<Date>, today: Date) -> Result<(), DomainError> {
        if let Some(date) = leave_date {
            validate_leave_date(date, self.hire_date, today)?;
        }
        self.leave_date = leave_date;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the value is outside 0-40.
    pub fn set_years_of_experience(&mut self, years: f64) -> Result<(), DomainError> {
        validate_years_of_experience(years)?;
        self.years_of_experience = years;
        Ok(())
    }

    pub fn set_duties(&mut self, duties: Duties) {
        self.duties = duties;
    }

    pub const fn duties_mut(&mut self) -> &mut Duties {
        &mut self.duties
    }

    pub(crate) fn set_pesel(&mut self, pesel: Pesel) {
        self.pesel = pesel;
    }

    pub(crate) const fn set_seniority(&mut self, seniority: Seniority) {
        self.seniority = seniority;
    }

    pub(crate) const fn seniority_mut(&mut self) -> &mut Seniority {
        &mut self.seniority
    }
}

/// An appointment of a customer with an employee for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(with = "appointment")]
    date: PrimitiveDateTime,
    payment_method: PaymentMethod,
    #[serde(default)]
    status: BookingStatus,
}

impl Booking {
    pub(crate) const fn new(date: PrimitiveDateTime, payment_method: PaymentMethod) -> Self {
        Self {
            date,
            payment_method,
            status: BookingStatus::Accepted,
        }
    }

    #[must_use]
    pub const fn date(&self) -> PrimitiveDateTime {
        self.date
    }

    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    #[must_use]
    pub const fn status(&self) -> BookingStatus {
        self.status
    }

    pub const fn set_payment_method(&mut self, payment_method: PaymentMethod) {
        self.payment_method = payment_method;
    }

    pub(crate) const fn set_date(&mut self, date: PrimitiveDateTime) {
        self.date = date;
    }

    pub(crate) const fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}
