//! Core logic for the professional profiles list.
//! Pagination, validation, derived display values and the two controllers
//! live here; transport and persistence stay behind the `gateway` traits.

pub mod config;
pub mod display;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod service;
pub mod validation;

pub use config::{normalize_page_size, ListConfig, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use display::{avatar_color, color_index, initials};
pub use gateway::{
    CreateError, FetchError, MemoryGateway, ProfessionalCreator, ProfessionalLister,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::draft::{Field, NewProfessional, ProfessionalDraft};
pub use model::professional::{Professional, ProfessionalId, Source, SourceFilter};
pub use model::ParseError;
pub use pagination::{paginate, page_window, Page, PageToken, MAX_VISIBLE_PAGES};
pub use service::form_controller::{FormController, PendingSubmit, SubmitOutcome, SubmitTicket};
pub use service::list_coordinator::{FetchOutcome, FetchRequest, ListCoordinator, ListStatus};
pub use validation::{validate, ValidationReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
