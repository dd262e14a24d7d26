// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules.
//!
//! All functions here are pure and deterministic. Rules that depend on the
//! current date take `today` as an argument instead of reading the clock.

use crate::error::DomainError;
use regex::Regex;
use std::sync::LazyLock;
use time::{Date, PrimitiveDateTime};

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

#[allow(clippy::expect_used)]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+48)? ?\d{9}$").expect("phone pattern is valid"));

/// Rejects empty or whitespace-only text with the given message.
pub(crate) fn require_text(value: &str, message: &'static str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingValue(message));
    }
    Ok(())
}

/// Rejects values that are not strictly positive (NaN and infinities included).
pub(crate) fn require_positive(value: f64, message: &'static str) -> Result<(), DomainError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::InvalidValue(message));
    }
    Ok(())
}

/// Rejects values that are negative (NaN and infinities included).
pub(crate) fn require_non_negative(value: f64, message: &'static str) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidValue(message));
    }
    Ok(())
}

/// Validates an email address.
///
/// # Errors
///
/// Returns `MissingValue` if the address is empty and `InvalidValue` if it
/// does not look like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    require_text(email, "Email can't be empty")?;
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DomainError::InvalidValue("Invalid email address"));
    }
    Ok(())
}

/// Validates a phone number: nine digits, optionally prefixed by `+48`.
///
/// # Errors
///
/// Returns `MissingValue` if the number is empty and `InvalidValue` if it
/// does not match the accepted pattern.
pub fn validate_phone_number(phone_number: &str) -> Result<(), DomainError> {
    require_text(phone_number, "Phone number can't be empty")?;
    if !PHONE_PATTERN.is_match(phone_number) {
        return Err(DomainError::InvalidValue("Invalid phone number"));
    }
    Ok(())
}

/// Validates a date of birth.
///
/// # Errors
///
/// Returns an error if the date lies after `today`.
pub fn validate_birth_date(date_of_birth: Date, today: Date) -> Result<(), DomainError> {
    if date_of_birth > today {
        return Err(DomainError::InvalidValue("Birth date can't be in the future"));
    }
    Ok(())
}

/// Validates an employee hire date.
///
/// # Errors
///
/// Returns an error if the date lies after `today`.
pub fn validate_hire_date(hire_date: Date, today: Date) -> Result<(), DomainError> {
    if hire_date > today {
        return Err(DomainError::InvalidValue("Hire date can't be in the future"));
    }
    Ok(())
}

/// Validates an employee leave date against the hire date.
///
/// The leave date must fall strictly after the hire date and no later
/// than `today`.
///
/// # Errors
///
/// Returns an error if either bound is violated.
pub fn validate_leave_date(
    leave_date: Date,
    hire_date: Date,
    today: Date,
) -> Result<(), DomainError> {
    if leave_date <= hire_date {
        return Err(DomainError::InvalidValue(
            "Leave date can't be before hire date",
        ));
    }
    if leave_date > today {
        return Err(DomainError::InvalidValue("Leave date can't be in the future"));
    }
    Ok(())
}

/// Validates years of experience (0 to 40 inclusive).
///
/// # Errors
///
/// Returns an error if the value is outside the range or not a number.
pub fn validate_years_of_experience(years: f64) -> Result<(), DomainError> {
    if !(0.0..=40.0).contains(&years) {
        return Err(DomainError::InvalidValue(
            "Years of experience should be in the range of 0 to 40",
        ));
    }
    Ok(())
}

/// Validates that a booking is not planned before `today`.
///
/// # Errors
///
/// Returns an error if the booking's calendar date is earlier than `today`.
pub fn validate_booking_date(date: PrimitiveDateTime, today: Date) -> Result<(), DomainError> {
    if date.date() < today {
        return Err(DomainError::InvalidValue(
            "Booking can't be planned on date earlier than today",
        ));
    }
    Ok(())
}

/// Computes the age in whole years of someone born on `date_of_birth`.
///
/// Returns zero for dates after `today`.
#[must_use]
pub fn age_on(date_of_birth: Date, today: Date) -> u32 {
    let mut years: i32 = today.year() - date_of_birth.year();
    let birthday_pending: bool = (u8::from(today.month()), today.day())
        < (u8::from(date_of_birth.month()), date_of_birth.day());
    if birthday_pending {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
