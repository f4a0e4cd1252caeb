//! Draft form values and the creation payload derived from them.

use super::professional::Source;
use super::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Editable form field. The wire key matches the collaborator's field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    CompanyName,
    JobTitle,
    Source,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::CompanyName,
        Field::JobTitle,
        Field::Source,
    ];

    /// Wire key used in payloads and server error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CompanyName => "company_name",
            Self::JobTitle => "job_title",
            Self::Source => "source",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CompanyName => "Company",
            Self::JobTitle => "Job Title",
            Self::Source => "Source",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == value.trim())
            .ok_or_else(|| ParseError::UnknownField(value.trim().to_string()))
    }
}

/// In-progress form values. Empty strings mean "not entered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub job_title: String,
    pub source: Source,
}

impl ProfessionalDraft {
    /// Returns the current text for one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::CompanyName => &self.company_name,
            Field::JobTitle => &self.job_title,
            Field::Source => self.source.as_str(),
        }
    }

    /// Replaces one field value.
    ///
    /// # Errors
    /// - Returns `ParseError::UnknownSource` when `field == Field::Source` and
    ///   the value is not a known source. The draft is left unchanged.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), ParseError> {
        let value = value.into();
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::CompanyName => self.company_name = value,
            Field::JobTitle => self.job_title = value,
            Field::Source => self.source = value.parse()?,
        }
        Ok(())
    }

    /// Builds the creation payload: text trimmed, blank contacts dropped.
    pub fn to_payload(&self) -> NewProfessional {
        NewProfessional {
            full_name: self.full_name.trim().to_string(),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            company_name: self.company_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            source: self.source,
        }
    }
}

impl From<&NewProfessional> for ProfessionalDraft {
    fn from(value: &NewProfessional) -> Self {
        Self {
            full_name: value.full_name.clone(),
            email: value.email.clone().unwrap_or_default(),
            phone: value.phone.clone().unwrap_or_default(),
            company_name: value.company_name.clone(),
            job_title: value.job_title.clone(),
            source: value.source,
        }
    }
}

/// Payload handed to the creation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfessional {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company_name: String,
    pub job_title: String,
    pub source: Source,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
