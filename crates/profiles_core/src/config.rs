//! List configuration.
//!
//! # Invariants
//! - Page size is always within `1..=MAX_PAGE_SIZE`.
//! - Unset or zero inputs fall back to `DEFAULT_PAGE_SIZE`.

use log::warn;
use std::num::NonZeroUsize;

pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const MAX_PAGE_SIZE: usize = 200;
/// Environment override for the list page size.
pub const PAGE_SIZE_ENV: &str = "PROFILES_PAGE_SIZE";

/// Settings for the list coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub page_size: NonZeroUsize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: normalize_page_size(None),
        }
    }
}

impl ListConfig {
    pub fn with_page_size(page_size: Option<usize>) -> Self {
        Self {
            page_size: normalize_page_size(page_size),
        }
    }

    /// Reads `PROFILES_PAGE_SIZE`; unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        let raw = match std::env::var(PAGE_SIZE_ENV) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match raw.trim().parse::<usize>() {
            Ok(value) => Self::with_page_size(Some(value)),
            Err(err) => {
                warn!(
                    "event=config_load module=config status=ignored key={} error={}",
                    PAGE_SIZE_ENV, err
                );
                Self::default()
            }
        }
    }
}

/// Normalizes a requested page size against list defaults.
pub fn normalize_page_size(page_size: Option<usize>) -> NonZeroUsize {
    let value = match page_size {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(value) if value > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
        Some(value) => value,
    };
    // Why: `value` is already clamped to at least 1, so the fallback is never
    // taken; it keeps the conversion free of a panic path.
    NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN)
}
