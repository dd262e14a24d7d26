// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee identification and job duties.
//!
//! Each duty carries the data it requires, so an employee cannot hold
//! companion data (languages, certificates) for a duty they do not perform.

use crate::error::DomainError;
use crate::validation::require_text;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An 11-digit national identification number.
///
/// Serves as an employee's key within a branch.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pesel(String);

impl Pesel {
    /// Number of digits in a PESEL.
    pub const LENGTH: usize = 11;

    /// Creates a new `Pesel`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `value` is exactly 11 ASCII digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.len() != Self::LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidValue("Invalid pesel number"));
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pesel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Pesel {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Pesel> for String {
    fn from(pesel: Pesel) -> Self {
        pesel.0
    }
}

impl std::fmt::Display for Pesel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kinds of duty an employee may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DutyKind {
    Receptionist,
    Therapist,
    SaunaSupervisor,
    NailTechnician,
}

impl DutyKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Receptionist => "Receptionist",
            Self::Therapist => "Therapist",
            Self::SaunaSupervisor => "SaunaSupervisor",
            Self::NailTechnician => "NailTechnician",
        }
    }
}

impl std::fmt::Display for DutyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Front-desk duty. Requires at least one spoken language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReceptionistDutyDe")]
pub struct ReceptionistDuty {
    languages: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ReceptionistDutyDe {
    languages: Vec<String>,
}

impl TryFrom<ReceptionistDutyDe> for ReceptionistDuty {
    type Error = DomainError;

    fn try_from(value: ReceptionistDutyDe) -> Result<Self, Self::Error> {
        Self::new(value.languages)
    }
}

impl ReceptionistDuty {
    /// # Errors
    ///
    /// Returns an error if no language is given or any language is empty.
    pub fn new(languages: Vec<String>) -> Result<Self, DomainError> {
        require_non_empty_list(&languages, "Receptionist must speak at least one language")?;
        Ok(Self { languages })
    }

    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

/// Treatment duty. Requires at least one certification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TherapistDutyDe")]
pub struct TherapistDuty {
    certifications: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TherapistDutyDe {
    certifications: Vec<String>,
}

impl TryFrom<TherapistDutyDe> for TherapistDuty {
    type Error = DomainError;

    fn try_from(value: TherapistDutyDe) -> Result<Self, Self::Error> {
        Self::new(value.certifications)
    }
}

impl TherapistDuty {
    /// # Errors
    ///
    /// Returns an error if no certification is given or any is empty.
    pub fn new(certifications: Vec<String>) -> Result<Self, DomainError> {
        require_non_empty_list(
            &certifications,
            "Therapist must hold at least one certification",
        )?;
        Ok(Self { certifications })
    }

    #[must_use]
    pub fn certifications(&self) -> &[String] {
        &self.certifications
    }
}

/// Sauna supervision duty. Requires a first aid certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SaunaSupervisorDutyDe")]
pub struct SaunaSupervisorDuty {
    first_aid_certificate: String,
}

#[derive(Debug, Deserialize)]
struct SaunaSupervisorDutyDe {
    first_aid_certificate: String,
}

impl TryFrom<SaunaSupervisorDutyDe> for SaunaSupervisorDuty {
    type Error = DomainError;

    fn try_from(value: SaunaSupervisorDutyDe) -> Result<Self, Self::Error> {
        Self::new(&value.first_aid_certificate)
    }
}

impl SaunaSupervisorDuty {
    /// # Errors
    ///
    /// Returns an error if the certificate is empty.
    pub fn new(first_aid_certificate: &str) -> Result<Self, DomainError> {
        require_text(
            first_aid_certificate,
            "Sauna supervisor requires a first aid certificate",
        )?;
        Ok(Self {
            first_aid_certificate: first_aid_certificate.to_string(),
        })
    }

    #[must_use]
    pub fn first_aid_certificate(&self) -> &str {
        &self.first_aid_certificate
    }
}

/// Manicure and pedicure duty, graded by certification level 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NailTechnicianDutyDe")]
pub struct NailTechnicianDuty {
    certification_level: u8,
}

#[derive(Debug, Deserialize)]
struct NailTechnicianDutyDe {
    certification_level: u8,
}

impl TryFrom<NailTechnicianDutyDe> for NailTechnicianDuty {
    type Error = DomainError;

    fn try_from(value: NailTechnicianDutyDe) -> Result<Self, Self::Error> {
        Self::new(value.certification_level)
    }
}

impl NailTechnicianDuty {
    pub const MAX_LEVEL: u8 = 5;

    /// # Errors
    ///
    /// Returns an error if the level is outside 1-5.
    pub const fn new(certification_level: u8) -> Result<Self, DomainError> {
        if certification_level == 0 || certification_level > Self::MAX_LEVEL {
            return Err(DomainError::InvalidValue(
                "Certification level must be between 1 and 5",
            ));
        }
        Ok(Self {
            certification_level,
        })
    }

    #[must_use]
    pub const fn certification_level(&self) -> u8 {
        self.certification_level
    }
}

/// The set of duties an employee performs.
///
/// Any combination is allowed, including none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receptionist: Option<ReceptionistDuty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    therapist: Option<TherapistDuty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sauna_supervisor: Option<SaunaSupervisorDuty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nail_technician: Option<NailTechnicianDuty>,
}

impl Duties {
    /// Creates an empty set of duties.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            receptionist: None,
            therapist: None,
            sauna_supervisor: None,
            nail_technician: None,
        }
    }

    #[must_use]
    pub fn with_receptionist(mut self, duty: ReceptionistDuty) -> Self {
        self.receptionist = Some(duty);
        self
    }

    #[must_use]
    pub fn with_therapist(mut self, duty: TherapistDuty) -> Self {
        self.therapist = Some(duty);
        self
    }

    #[must_use]
    pub fn with_sauna_supervisor(mut self, duty: SaunaSupervisorDuty) -> Self {
        self.sauna_supervisor = Some(duty);
        self
    }

    #[must_use]
    pub const fn with_nail_technician(mut self, duty: NailTechnicianDuty) -> Self {
        self.nail_technician = Some(duty);
        self
    }

    #[must_use]
    pub const fn receptionist(&self) -> Option<&ReceptionistDuty> {
        self.receptionist.as_ref()
    }

    #[must_use]
    pub const fn therapist(&self) -> Option<&TherapistDuty> {
        self.therapist.as_ref()
    }

    #[must_use]
    pub const fn sauna_supervisor(&self) -> Option<&SaunaSupervisorDuty> {
        self.sauna_supervisor.as_ref()
    }

    #[must_use]
    pub const fn nail_technician(&self) -> Option<&NailTechnicianDuty> {
        self.nail_technician.as_ref()
    }

    pub fn set_receptionist(&mut self, duty: Option<ReceptionistDuty>) {
        self.receptionist = duty;
    }

    pub fn set_therapist(&mut self, duty: Option<TherapistDuty>) {
        self.therapist = duty;
    }

    pub fn set_sauna_supervisor(&mut self, duty: Option<SaunaSupervisorDuty>) {
        self.sauna_supervisor = duty;
    }

    pub const fn set_nail_technician(&mut self, duty: Option<NailTechnicianDuty>) {
        self.nail_technician = duty;
    }

    /// Returns whether the given duty is performed.
    #[must_use]
    pub const fn has(&self, kind: DutyKind) -> bool {
        match kind {
            DutyKind::Receptionist => self.receptionist.is_some(),
            DutyKind::Therapist => self.therapist.is_some(),
            DutyKind::SaunaSupervisor => self.sauna_supervisor.is_some(),
            DutyKind::NailTechnician => self.nail_technician.is_some(),
        }
    }

    /// Returns the performed duties in declaration order.
    #[must_use]
    pub fn kinds(&self) -> Vec<DutyKind> {
        [
            DutyKind::Receptionist,
            DutyKind::Therapist,
            DutyKind::SaunaSupervisor,
            DutyKind::NailTechnician,
        ]
        .into_iter()
        .filter(|kind| self.has(*kind))
        .collect()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.receptionist.is_none()
            && self.therapist.is_none()
            && self.sauna_supervisor.is_none()
            && self.nail_technician.is_none()
    }
}

fn require_non_empty_list(values: &[String], message: &'static str) -> Result<(), DomainError> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(DomainError::InvalidValue(message));
    }
    Ok(())
}
