// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::address::Address;
use crate::date_format::clock_time;
use crate::error::DomainError;
use crate::validation::{require_text, validate_phone_number};
use serde::{Deserialize, Serialize};
use time::Time;
use time::macros::time;

/// Daily opening hours of a branch. Defaults to 09:00-21:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OpeningHoursDe")]
pub struct OpeningHours {
    #[serde(with = "clock_time")]
    opening: Time,
    #[serde(with = "clock_time")]
    closing: Time,
}

#[derive(Debug, Deserialize)]
struct OpeningHoursDe {
    #[serde(with = "clock_time")]
    opening: Time,
    #[serde(with = "clock_time")]
    closing: Time,
}

impl TryFrom<OpeningHoursDe> for OpeningHours {
    type Error = DomainError;

    fn try_from(value: OpeningHoursDe) -> Result<Self, Self::Error> {
        Self::new(value.opening, value.closing)
    }
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            opening: time!(9:00),
            closing: time!(21:00),
        }
    }
}

impl OpeningHours {
    /// # Errors
    ///
    /// Returns an error unless `opening` is strictly before `closing`.
    pub fn new(opening: Time, closing: Time) -> Result<Self, DomainError> {
        if opening >= closing {
            return Err(DomainError::InvalidValue(
                "Opening time must be before closing time",
            ));
        }
        Ok(Self { opening, closing })
    }

    #[must_use]
    pub const fn opening(&self) -> Time {
        self.opening
    }

    #[must_use]
    pub const fn closing(&self) -> Time {
        self.closing
    }

    /// Returns whether `at` falls within `[opening, closing)`.
    #[must_use]
    pub fn is_open_at(&self, at: Time) -> bool {
        self.opening <= at && at < self.closing
    }
}

/// Attributes of a spa branch.
///
/// Rooms and staff are owned through the registry; this value only carries
/// the branch's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BranchDe")]
pub struct Branch {
    name: String,
    address: Address,
    phone_numbers: Vec<String>,
    opening_hours: OpeningHours,
}

#[derive(Debug, Deserialize)]
struct BranchDe {
    name: String,
    address: Address,
    phone_numbers: Vec<String>,
    #[serde(default)]
    opening_hours: OpeningHours,
}

impl TryFrom<BranchDe> for Branch {
    type Error = DomainError;

    fn try_from(value: BranchDe) -> Result<Self, Self::Error> {
        let mut branch: Self = Self::new(&value.name, value.address, value.phone_numbers)?;
        branch.set_opening_hours(value.opening_hours);
        Ok(branch)
    }
}

impl Branch {
    /// Creates a new `Branch` open during the default hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, any phone number is empty or
    /// malformed, or no phone number is given.
    pub fn new(name: &str, address: Address, phone_numbers: Vec<String>) -> Result<Self, DomainError> {
        require_text(name, "Name can't be empty")?;
        validate_phone_numbers(&phone_numbers)?;

        Ok(Self {
            name: name.to_string(),
            address,
            phone_numbers,
            opening_hours: OpeningHours::default(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    #[must_use]
    pub const fn opening_hours(&self) -> OpeningHours {
        self.opening_hours
    }

    pub const fn set_opening_hours(&mut self, opening_hours: OpeningHours) {
        self.opening_hours = opening_hours;
    }

    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        require_text(name, "Name can't be empty")?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// Replaces every phone number at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains an invalid number.
    pub fn set_phone_numbers(&mut self, phone_numbers: Vec<String>) -> Result<(), DomainError> {
        validate_phone_numbers(&phone_numbers)?;
        self.phone_numbers = phone_numbers;
        Ok(())
    }

    /// Adds a phone number. Adding a number already listed is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is empty or malformed.
    pub fn add_phone_number(&mut self, phone_number: &str) -> Result<(), DomainError> {
        validate_phone_number(phone_number)?;
        if !self.phone_numbers.iter().any(|p| p == phone_number) {
            self.phone_numbers.push(phone_number.to_string());
        }
        Ok(())
    }

    /// Removes a phone number. Removing an unknown number is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is the branch's last one.
    pub fn remove_phone_number(&mut self, phone_number: &str) -> Result<(), DomainError> {
        let listed: bool = self.phone_numbers.iter().any(|p| p == phone_number);
        if listed && self.phone_numbers.len() == 1 {
            return Err(DomainError::InvalidValue(
                "At least one phone number is required",
            ));
        }
        self.phone_numbers.retain(|p| p != phone_number);
        Ok(())
    }
}

fn validate_phone_numbers(phone_numbers: &[String]) -> Result<(), DomainError> {
    for number in phone_numbers {
        validate_phone_number(number)?;
    }
    if phone_numbers.is_empty() {
        return Err(DomainError::InvalidValue(
            "At least one phone number is required",
        ));
    }
    Ok(())
}
