// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{require_positive, require_text};
use serde::{Deserialize, Serialize};

/// A treatment offered by the spa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ServiceDe")]
pub struct Service {
    name: String,
    description: String,
    /// Duration in whole minutes.
    duration_minutes: u32,
    price: f64,
    /// Minimum customer age in years.
    minimal_age: u32,
}

#[derive(Debug, Deserialize)]
struct ServiceDe {
    name: String,
    description: String,
    duration_minutes: u32,
    price: f64,
    minimal_age: u32,
}

impl TryFrom<ServiceDe> for Service {
    type Error = DomainError;

    fn try_from(value: ServiceDe) -> Result<Self, Self::Error> {
        Self::new(
            &value.name,
            &value.description,
            value.duration_minutes,
            value.price,
            value.minimal_age,
        )
    }
}

impl Service {
    /// Creates a new `Service`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or description is empty, or if the
    /// duration, price or minimal age is not strictly positive.
    pub fn new(
        name: &str,
        description: &str,
        duration_minutes: u32,
        price: f64,
        minimal_age: u32,
    ) -> Result<Self, DomainError> {
        require_text(name, "Name can't be empty")?;
        require_text(description, "Description can't be empty")?;
        validate_duration(duration_minutes)?;
        validate_price(price)?;
        validate_minimal_age(minimal_age)?;

        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            duration_minutes,
            price,
            minimal_age,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub const fn minimal_age(&self) -> u32 {
        self.minimal_age
    }

    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        require_text(name, "Name can't be empty")?;
        self.name = name.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the description is empty.
    pub fn set_description(&mut self, description: &str) -> Result<(), DomainError> {
        require_text(description, "Description can't be empty")?;
        self.description = description.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the duration is zero.
    pub fn set_duration_minutes(&mut self, duration_minutes: u32) -> Result<(), DomainError> {
        validate_duration(duration_minutes)?;
        self.duration_minutes = duration_minutes;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the price is zero, negative or not a number.
    pub fn set_price(&mut self, price: f64) -> Result<(), DomainError> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the minimal age is zero.
    pub fn set_minimal_age(&mut self, minimal_age: u32) -> Result<(), DomainError> {
        validate_minimal_age(minimal_age)?;
        self.minimal_age = minimal_age;
        Ok(())
    }
}

const fn validate_duration(duration_minutes: u32) -> Result<(), DomainError> {
    if duration_minutes == 0 {
        return Err(DomainError::InvalidValue("Duration can't be zero"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), DomainError> {
    require_positive(price, "Price can't be zero or negative")
}

const fn validate_minimal_age(minimal_age: u32) -> Result<(), DomainError> {
    if minimal_age == 0 {
        return Err(DomainError::InvalidValue("Age can't be zero or negative"));
    }
    Ok(())
}
