//! In-process collaborator holding records in memory.
//!
//! # Invariants
//! - Ids increase monotonically and are never reused.
//! - Non-empty email and phone values are unique across records.
//! - Fetch results are ordered newest first (`created_at DESC, id DESC`).

use super::error::{CreateError, FetchError};
use super::sample::sample_professionals;
use super::{ProfessionalCreator, ProfessionalLister};
use crate::model::draft::{Field, NewProfessional, ProfessionalDraft};
use crate::model::professional::{Professional, ProfessionalId, Source};
use crate::validation::validate;
use chrono::Utc;
use log::{debug, info};
use std::cell::RefCell;
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// Error key for failures not tied to one field.
const NON_FIELD_ERRORS_KEY: &str = "non_field_errors";

/// Single-threaded in-memory implementation of both collaborators.
#[derive(Debug)]
pub struct MemoryGateway {
    state: RefCell<MemoryState>,
}

#[derive(Debug)]
struct MemoryState {
    records: Vec<Professional>,
    next_id: ProfessionalId,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(MemoryState {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a gateway pre-loaded with `sample_professionals()`.
    pub fn with_sample_data() -> Self {
        let gateway = Self::new();
        gateway.seed_sample_data();
        gateway
    }

    pub fn len(&self) -> usize {
        self.state.borrow().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().records.is_empty()
    }

    /// Upserts the sample set, matching existing rows by email, then by
    /// phone. Samples that would collide with another record's contact are
    /// skipped.
    ///
    /// Returns `(created, updated)` counts.
    pub fn seed_sample_data(&self) -> (usize, usize) {
        let mut state = self.state.borrow_mut();
        let mut created = 0;
        let mut updated = 0;
        let mut skipped = 0;

        for payload in sample_professionals() {
            let existing = state.find_by_contact(&payload);
            let owner = existing.map(|index| state.records[index].id);
            if state.conflict(&payload, owner).is_some() {
                skipped += 1;
                continue;
            }
            match existing {
                Some(index) => {
                    apply_payload(&mut state.records[index], &payload);
                    updated += 1;
                }
                None => {
                    state.insert(&payload);
                    created += 1;
                }
            }
        }

        info!(
            "event=sample_seed module=gateway status=ok created={} updated={} skipped={}",
            created, updated, skipped
        );
        (created, updated)
    }
}

impl MemoryState {
    fn insert(&mut self, payload: &NewProfessional) -> Professional {
        let record = Professional {
            id: self.next_id,
            full_name: payload.full_name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            company_name: Some(payload.company_name.clone()),
            job_title: Some(payload.job_title.clone()),
            source: payload.source,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    /// Index of the record sharing the payload's email, else its phone.
    fn find_by_contact(&self, payload: &NewProfessional) -> Option<usize> {
        let by_email = payload.email.as_deref().and_then(|email| {
            self.records
                .iter()
                .position(|record| record.email.as_deref() == Some(email))
        });
        by_email.or_else(|| {
            payload.phone.as_deref().and_then(|phone| {
                self.records
                    .iter()
                    .position(|record| record.phone.as_deref() == Some(phone))
            })
        })
    }

    /// Uniqueness check for email then phone, ignoring the record `except`.
    fn conflict(
        &self,
        payload: &NewProfessional,
        except: Option<ProfessionalId>,
    ) -> Option<CreateError> {
        let others = || {
            self.records
                .iter()
                .filter(move |record| Some(record.id) != except)
        };

        if let Some(email) = payload.email.as_deref() {
            if others().any(|record| record.email.as_deref() == Some(email)) {
                return Some(CreateError::field(
                    Field::Email.as_str(),
                    "A professional with this email already exists.",
                ));
            }
        }
        if let Some(phone) = payload.phone.as_deref() {
            if others().any(|record| record.phone.as_deref() == Some(phone)) {
                return Some(CreateError::field(
                    Field::Phone.as_str(),
                    "A professional with this phone already exists.",
                ));
            }
        }
        None
    }
}

fn apply_payload(record: &mut Professional, payload: &NewProfessional) {
    record.full_name = payload.full_name.clone();
    record.email = payload.email.clone();
    record.phone = payload.phone.clone();
    record.company_name = Some(payload.company_name.clone());
    record.job_title = Some(payload.job_title.clone());
    record.source = payload.source;
}

fn rejection_from_validation(payload: &NewProfessional) -> Option<CreateError> {
    let report = validate(&ProfessionalDraft::from(payload));
    if report.is_valid() {
        return None;
    }

    let mut fields = report
        .field_errors
        .into_iter()
        .map(|(field, message)| (field.as_str().to_string(), vec![message]))
        .collect::<BTreeMap<_, _>>();
    if let Some(message) = report.top_level_error {
        fields.insert(NON_FIELD_ERRORS_KEY.to_string(), vec![message]);
    }
    Some(CreateError::Fields(fields))
}

impl ProfessionalLister for MemoryGateway {
    fn fetch_professionals(&self, source: Option<Source>) -> Result<Vec<Professional>, FetchError> {
        let state = self.state.borrow();
        let mut records = state
            .records
            .iter()
            .filter(|record| source.map_or(true, |source| record.source == source))
            .cloned()
            .collect::<Vec<_>>();
        records.sort_by_key(|record| (Reverse(record.created_at), Reverse(record.id)));
        Ok(records)
    }
}

impl ProfessionalCreator for MemoryGateway {
    fn create_professional(&self, payload: &NewProfessional) -> Result<Professional, CreateError> {
        let mut state = self.state.borrow_mut();
        if let Some(err) =
            rejection_from_validation(payload).or_else(|| state.conflict(payload, None))
        {
            if let CreateError::Fields(fields) = &err {
                debug!(
                    "event=gateway_create module=gateway status=rejected fields={}",
                    fields.keys().cloned().collect::<Vec<_>>().join(",")
                );
            }
            return Err(err);
        }

        let record = state.insert(payload);
        info!(
            "event=gateway_create module=gateway status=ok id={} source={}",
            record.id, record.source
        );
        Ok(record)
    }
}
