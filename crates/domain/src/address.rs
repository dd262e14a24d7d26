// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::require_text;
use serde::{Deserialize, Serialize};

/// A postal address. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressDe")]
pub struct Address {
    street: String,
    building: u32,
    city: String,
    postal_code: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct AddressDe {
    street: String,
    building: u32,
    city: String,
    postal_code: String,
    country: String,
}

impl TryFrom<AddressDe> for Address {
    type Error = DomainError;

    fn try_from(value: AddressDe) -> Result<Self, Self::Error> {
        Self::new(
            &value.street,
            value.building,
            &value.city,
            &value.postal_code,
            &value.country,
        )
    }
}

impl Address {
    /// Creates a new `Address`.
    ///
    /// # Errors
    ///
    /// Returns an error if any text field is empty or the building number
    /// is zero.
    pub fn new(
        street: &str,
        building: u32,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> Result<Self, DomainError> {
        require_text(street, "Street can't be empty")?;
        if building == 0 {
            return Err(DomainError::InvalidValue(
                "Building can't be less or equal to 0",
            ));
        }
        require_text(city, "City can't be empty")?;
        require_text(postal_code, "Postal code can't be empty")?;
        require_text(country, "Country can't be empty")?;

        Ok(Self {
            street: street.to_string(),
            building,
            city: city.to_string(),
            postal_code: postal_code.to_string(),
            country: country.to_string(),
        })
    }

    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    #[must_use]
    pub const fn building(&self) -> u32 {
        self.building
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {} {}, {}",
            self.street, self.building, self.postal_code, self.city, self.country
        )
    }
}
