// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{require_text, validate_email, validate_phone_number};
use serde::{Deserialize, Serialize};

/// Identity and contact details shared by every role a person may hold.
///
/// A person can be a customer, an employee, or both at once; the roles
/// reference the person rather than copying these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonDe")]
pub struct Person {
    name: String,
    surname: String,
    email: String,
    phone_number: String,
}

#[derive(Debug, Deserialize)]
struct PersonDe {
    name: String,
    surname: String,
    email: String,
    phone_number: String,
}

impl TryFrom<PersonDe> for Person {
    type Error = DomainError;

    fn try_from(value: PersonDe) -> Result<Self, Self::Error> {
        Self::new(&value.name, &value.surname, &value.email, &value.phone_number)
    }
}

impl Person {
    /// Creates a new `Person`.
    ///
    /// Fields are validated in declaration order; the first violation wins.
    ///
    /// # Errors
    ///
    /// Returns an error if any field is empty, the email is malformed, or
    /// the phone number does not match the accepted pattern.
    pub fn new(
        name: &str,
        surname: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<Self, DomainError> {
        require_text(name, "Name can't be empty")?;
        require_text(surname, "Surname can't be empty")?;
        validate_email(email)?;
        validate_phone_number(phone_number)?;

        Ok(Self {
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
        })
    }

    /// Returns the given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Returns `"{name} {surname}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
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
    /// Returns an error if the surname is empty.
    pub fn set_surname(&mut self, surname: &str) -> Result<(), DomainError> {
        require_text(surname, "Surname can't be empty")?;
        self.surname = surname.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the email is empty or malformed.
    pub fn set_email(&mut self, email: &str) -> Result<(), DomainError> {
        validate_email(email)?;
        self.email = email.to_string();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the phone number is empty or malformed.
    pub fn set_phone_number(&mut self, phone_number: &str) -> Result<(), DomainError> {
        validate_phone_number(phone_number)?;
        self.phone_number = phone_number.to_string();
        Ok(())
    }
}
