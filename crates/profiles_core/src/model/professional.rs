//! Professional record and source enumeration.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and never reused.
//! - `created_at` is immutable once set by the creation collaborator.
//! - `Source` is a closed set; the wire form is the lowercase name.

use super::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Opaque record identifier assigned by the creation collaborator.
pub type ProfessionalId = i64;

/// Where a professional record came from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[default]
    Direct,
    Partner,
    Internal,
}

impl Source {
    /// Every source in display order.
    pub const ALL: [Source; 3] = [Source::Direct, Source::Partner, Source::Internal];

    /// Stable wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Partner => "partner",
            Self::Internal => "internal",
        }
    }

    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Direct => "Direct",
            Self::Partner => "Partner",
            Self::Internal => "Internal",
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "partner" => Ok(Self::Partner),
            "internal" => Ok(Self::Internal),
            _ => Err(ParseError::UnknownSource(value.trim().to_string())),
        }
    }
}

/// Active list filter. `All` means the fetch is unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceFilter {
    #[default]
    All,
    Only(Source),
}

impl SourceFilter {
    /// Filter options in selector order.
    pub const OPTIONS: [SourceFilter; 4] = [
        SourceFilter::All,
        SourceFilter::Only(Source::Direct),
        SourceFilter::Only(Source::Partner),
        SourceFilter::Only(Source::Internal),
    ];

    /// Source passed to the fetch collaborator; `None` for the unrestricted query.
    pub fn source(self) -> Option<Source> {
        match self {
            Self::All => None,
            Self::Only(source) => Some(source),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(source) => source.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Sources",
            Self::Only(source) => source.label(),
        }
    }
}

impl Display for SourceFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFilter {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }
        normalized
            .parse::<Source>()
            .map(Self::Only)
            .map_err(|_| ParseError::UnknownFilter(value.trim().to_string()))
    }
}

/// Professional record as returned by the list/create collaborators.
///
/// Read-only to core. `company_name` and `job_title` may be absent or carry a
/// placeholder such as `"NA"`; see `display::company_display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: ProfessionalId,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub source: Source,
    pub created_at: DateTime<Utc>,
}

impl Professional {
    /// Returns whether at least one contact method is present and non-blank.
    pub fn has_contact(&self) -> bool {
        [self.email.as_deref(), self.phone.as_deref()]
            .into_iter()
            .flatten()
            .any(|value| !value.trim().is_empty())
    }
}
