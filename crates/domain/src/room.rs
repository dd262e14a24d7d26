// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{require_non_negative, require_text};
use serde::{Deserialize, Serialize};

/// A treatment room. Which branch owns it is tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomDe")]
pub struct Room {
    number: u32,
    #[serde(rename = "type")]
    kind: String,
    /// Degrees Celsius.
    temperature: f64,
    /// Relative humidity in percent.
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct RoomDe {
    number: u32,
    #[serde(rename = "type")]
    kind: String,
    temperature: f64,
    humidity: f64,
}

impl TryFrom<RoomDe> for Room {
    type Error = DomainError;

    fn try_from(value: RoomDe) -> Result<Self, Self::Error> {
        Self::new(value.number, &value.kind, value.temperature, value.humidity)
    }
}

impl Room {
    /// Creates a new `Room`.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is zero, the type is empty, the
    /// temperature is below zero, or the humidity is outside 0-100.
    pub fn new(number: u32, kind: &str, temperature: f64, humidity: f64) -> Result<Self, DomainError> {
        validate_number(number)?;
        require_text(kind, "Room type cannot be empty")?;
        validate_temperature(temperature)?;
        validate_humidity(humidity)?;

        Ok(Self {
            number,
            kind: kind.to_string(),
            temperature,
            humidity,
        })
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the room type, e.g. "Massage" or "Sauna".
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub const fn humidity(&self) -> f64 {
        self.humidity
    }

    /// # Errors
    ///
    /// Returns an error if the number is zero.
    pub fn set_number(&mut self, number: u32) -> Result<(), DomainError> {
        validate_number(number)?;
        self.number = number;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the type is empty.
    pub fn set_kind(&mut self, kind: &str) -> Result<(), DomainError> {
        require_text(kind, "Room type cannot be empty")?;
        self.kind = kind.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the temperature is below zero.
    pub fn set_temperature(&mut self, temperature: f64) -> Result<(), DomainError> {
        validate_temperature(temperature)?;
        self.temperature = temperature;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the humidity is outside 0-100.
    pub fn set_humidity(&mut self, humidity: f64) -> Result<(), DomainError> {
        validate_humidity(humidity)?;
        self.humidity = humidity;
        Ok(())
    }
}

const fn validate_number(number: u32) -> Result<(), DomainError> {
    if number == 0 {
        return Err(DomainError::InvalidValue(
            "Room number must be greater than 0",
        ));
    }
    Ok(())
}

fn validate_temperature(temperature: f64) -> Result<(), DomainError> {
    require_non_negative(temperature, "Temperature can't be below 0°C")
}

fn validate_humidity(humidity: f64) -> Result<(), DomainError> {
    if !(0.0..=100.0).contains(&humidity) {
        return Err(DomainError::InvalidValue(
            "Humidity level must be between 0% and 100%",
        ));
    }
    Ok(())
}
