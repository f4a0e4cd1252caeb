//! Professional record domain model.
//!
//! # Responsibility
//! - Define the read-only record shape returned by the list collaborator.
//! - Define the draft shape owned by the form controller and the creation
//!   payload derived from it.
//!
//! # Invariants
//! - Records are never mutated by core; a fetch replaces the set wholesale.
//! - At least one of email/phone is present at creation time only.

pub mod draft;
pub mod professional;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors for enumerations parsed from external text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownSource(String),
    UnknownFilter(String),
    UnknownField(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSource(value) => {
                write!(f, "unknown source `{value}`; expected direct|partner|internal")
            }
            Self::UnknownFilter(value) => {
                write!(f, "unknown filter `{value}`; expected all|direct|partner|internal")
            }
            Self::UnknownField(value) => write!(f, "unknown form field `{value}`"),
        }
    }
}

impl Error for ParseError {}
