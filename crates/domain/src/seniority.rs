// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::require_non_negative;
use serde::{Deserialize, Serialize};

/// Seniority level of an employee.
///
/// An employee holds at most one level at a time. An unassigned employee
/// may be given any level once; after that the only moves are the
/// promotions `Junior` → `Mid` and `Mid` → `Senior`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Seniority {
    #[default]
    Unassigned,
    /// Supervision links to mids are held by the registry.
    Junior(JuniorProfile),
    Mid,
    Senior(SeniorProfile),
}

impl Seniority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unassigned => "Unassigned",
            Self::Junior(_) => "Junior",
            Self::Mid => "Mid",
            Self::Senior(_) => "Senior",
        }
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        !matches!(self, Self::Unassigned)
    }

    #[must_use]
    pub const fn is_junior(&self) -> bool {
        matches!(self, Self::Junior(_))
    }

    #[must_use]
    pub const fn is_mid(&self) -> bool {
        matches!(self, Self::Mid)
    }

    #[must_use]
    pub const fn is_senior(&self) -> bool {
        matches!(self, Self::Senior(_))
    }

    /// Checks if `target` is the next level up from this one.
    #[must_use]
    pub const fn can_promote_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (Self::Junior(_), Self::Mid) | (Self::Mid, Self::Senior(_))
        )
    }
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Data carried by a junior employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JuniorProfile {
    /// Learning period in months.
    learning_period: u32,
}

impl JuniorProfile {
    #[must_use]
    pub const fn new(learning_period: u32) -> Self {
        Self { learning_period }
    }

    #[must_use]
    pub const fn learning_period(&self) -> u32 {
        self.learning_period
    }

    pub const fn set_learning_period(&mut self, learning_period: u32) {
        self.learning_period = learning_period;
    }
}

/// Data carried by a senior employee.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeniorProfileDe")]
pub struct SeniorProfile {
    bonus_coefficient: f64,
}

#[derive(Debug, Deserialize)]
struct SeniorProfileDe {
    bonus_coefficient: f64,
}

impl TryFrom<SeniorProfileDe> for SeniorProfile {
    type Error = DomainError;

    fn try_from(value: SeniorProfileDe) -> Result<Self, Self::Error> {
        Self::new(value.bonus_coefficient)
    }
}

impl SeniorProfile {
    /// # Errors
    ///
    /// Returns an error if the coefficient is negative or not a number.
    pub fn new(bonus_coefficient: f64) -> Result<Self, DomainError> {
        validate_bonus(bonus_coefficient)?;
        Ok(Self { bonus_coefficient })
    }

    #[must_use]
    pub const fn bonus_coefficient(&self) -> f64 {
        self.bonus_coefficient
    }

    /// # Errors
    ///
    /// Returns an error if the coefficient is negative or not a number.
    pub fn set_bonus_coefficient(&mut self, bonus_coefficient: f64) -> Result<(), DomainError> {
        validate_bonus(bonus_coefficient)?;
        self.bonus_coefficient = bonus_coefficient;
        Ok(())
    }
}

fn validate_bonus(bonus_coefficient: f64) -> Result<(), DomainError> {
    require_non_negative(bonus_coefficient, "Bonus coefficient cannot be less than 0")
}
