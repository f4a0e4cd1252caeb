//! Collaborator contracts for listing and creating professionals.
//!
//! # Responsibility
//! - Define the fetch/create seams the controllers call through.
//! - Keep transport and persistence out of core.
//!
//! # Invariants
//! - A fetch returns the full matching set; callers replace, never merge.
//! - A create either returns the stored record or a `CreateError`.

mod error;
mod memory;
mod sample;

pub use error::{CreateError, FetchError, GENERIC_CREATE_FAILURE_MESSAGE, NETWORK_FAILURE_MESSAGE};
pub use memory::MemoryGateway;
pub use sample::sample_professionals;

use crate::model::draft::NewProfessional;
use crate::model::professional::{Professional, Source};

/// List collaborator. `None` requests every source.
pub trait ProfessionalLister {
    fn fetch_professionals(&self, source: Option<Source>) -> Result<Vec<Professional>, FetchError>;
}

/// Creation collaborator.
pub trait ProfessionalCreator {
    fn create_professional(&self, payload: &NewProfessional) -> Result<Professional, CreateError>;
}
