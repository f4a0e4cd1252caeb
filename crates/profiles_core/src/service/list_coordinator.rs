//! List/filter coordinator.
//!
//! # Responsibility
//! - Track records, active filter, current page and load status.
//! - Issue fetch requests on mount, filter change and refresh.
//! - Apply only the most recently issued fetch result.
//!
//! # Invariants
//! - Entering `Loading` resets the page to 1 before the fetch resolves.
//! - `1 <= page <= max(1, total_pages)` at every observable point.
//! - A result whose sequence number is not the latest issued one is dropped.
//! - A failed fetch keeps the previously loaded records visible.

use crate::config::ListConfig;
use crate::gateway::{FetchError, ProfessionalLister};
use crate::model::professional::{Professional, Source, SourceFilter};
use crate::pagination::{self, Page};
use log::{debug, info, warn};

/// Load lifecycle of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// A fetch the caller must perform and hand back via `apply_fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic request number used for the discard rule.
    pub seq: u64,
    /// Source to fetch; `None` for every source.
    pub source: Option<Source>,
}

/// What happened to a fetch result handed to `apply_fetch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued (or this one was already applied).
    Superseded,
}

/// Owner of the list view state.
#[derive(Debug)]
pub struct ListCoordinator {
    config: ListConfig,
    records: Vec<Professional>,
    filter: SourceFilter,
    page: usize,
    status: ListStatus,
    latest_seq: u64,
    last_error: Option<String>,
}

impl Default for ListCoordinator {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

impl ListCoordinator {
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            filter: SourceFilter::All,
            page: 1,
            status: ListStatus::Idle,
            latest_seq: 0,
            last_error: None,
        }
    }

    pub fn records(&self) -> &[Professional] {
        &self.records
    }

    pub fn filter(&self) -> SourceFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    /// Notice for the last failed fetch, cleared when a new fetch starts.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.records.len(), self.config.page_size)
    }

    /// Initial load for the current filter.
    pub fn mount(&mut self) -> FetchRequest {
        self.begin_fetch("mount")
    }

    /// Switches the filter and starts a fetch for it.
    ///
    /// Returns `None` when `filter` equals the active filter.
    pub fn set_filter(&mut self, filter: SourceFilter) -> Option<FetchRequest> {
        if filter == self.filter {
            return None;
        }
        self.filter = filter;
        Some(self.begin_fetch("filter_change"))
    }

    /// Reloads the current filter, e.g. after a record was created.
    pub fn refresh(&mut self) -> FetchRequest {
        self.begin_fetch("refresh")
    }

    /// Applies the result of a previously issued request.
    pub fn apply_fetch(
        &mut self,
        seq: u64,
        result: Result<Vec<Professional>, FetchError>,
    ) -> FetchOutcome {
        // Why: a second result for the latest seq would overwrite state the
        // caller may already have changed locally (page, filter).
        if seq != self.latest_seq || self.status != ListStatus::Loading {
            debug!(
                "event=list_fetch module=list status=superseded seq={} latest_seq={}",
                seq, self.latest_seq
            );
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(records) => {
                info!(
                    "event=list_fetch module=list status=ok seq={} filter={} count={}",
                    seq,
                    self.filter,
                    records.len()
                );
                self.records = records;
                self.page = 1;
                self.status = ListStatus::Loaded;
            }
            Err(err) => {
                warn!(
                    "event=list_fetch module=list status=error seq={} filter={} error={}",
                    seq, self.filter, err
                );
                self.last_error = Some(err.to_string());
                self.status = ListStatus::Failed;
            }
        }
        FetchOutcome::Applied
    }

    /// Performs `request` against `lister` and applies the result.
    pub fn resolve_with<L>(&mut self, request: FetchRequest, lister: &L) -> FetchOutcome
    where
        L: ProfessionalLister + ?Sized,
    {
        let result = lister.fetch_professionals(request.source);
        self.apply_fetch(request.seq, result)
    }

    /// Moves to `target`. Honored only while `Loaded` and in range.
    pub fn set_page(&mut self, target: usize) -> bool {
        let total_pages = self.total_pages();
        if self.status != ListStatus::Loaded || !pagination::is_navigable(target, total_pages) {
            debug!(
                "event=list_page module=list status=rejected target={} total_pages={} list_status={:?}",
                target, total_pages, self.status
            );
            return false;
        }
        self.page = target;
        true
    }

    /// Current page, recomputed from the full record set on every call.
    pub fn page_view(&self) -> Page<'_, Professional> {
        pagination::paginate(&self.records, self.config.page_size, self.page)
    }

    fn begin_fetch(&mut self, trigger: &str) -> FetchRequest {
        self.latest_seq += 1;
        self.status = ListStatus::Loading;
        self.page = 1;
        self.last_error = None;
        info!(
            "event=list_fetch module=list status=start seq={} filter={} trigger={}",
            self.latest_seq, self.filter, trigger
        );
        FetchRequest {
            seq: self.latest_seq,
            source: self.filter.source(),
        }
    }
}
