//! Creation form controller.
//!
//! # Responsibility
//! - Own the draft, its field errors, the top-level error and the
//!   submitting flag.
//! - Run local validation before any call to the creation collaborator.
//! - Fold collaborator errors back into the form.
//!
//! # Invariants
//! - Editing a field clears only that field's error.
//! - A submit attempt clears all errors before validating.
//! - A successful save resets the draft and every error.
//! - At most one submission is in flight.
//! - A result for a submission started before the last `cancel()` is dropped.

use crate::gateway::{CreateError, ProfessionalCreator};
use crate::model::draft::{Field, NewProfessional, ProfessionalDraft};
use crate::model::professional::{Professional, Source};
use crate::model::ParseError;
use crate::validation::validate;
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Server error keys that carry a form-wide message.
const TOP_LEVEL_ERROR_KEYS: [&str; 2] = ["non_field_errors", "detail"];

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The collaborator stored the record; the draft has been reset.
    Saved(Professional),
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The collaborator rejected the payload; errors were merged into the form.
    Rejected,
    /// A previous submission has not finished yet.
    InFlight,
    /// The submission was cancelled before its result arrived; the form
    /// was left untouched.
    Discarded,
}

/// A validated payload plus the ticket `finish_submit` needs to apply its
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub ticket: SubmitTicket,
    pub payload: NewProfessional,
}

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
}

/// Owner of the draft form state.
#[derive(Debug, Default)]
pub struct FormController {
    draft: ProfessionalDraft,
    field_errors: BTreeMap<Field, String>,
    top_level_error: Option<String>,
    submitting: bool,
    generation: u64,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProfessionalDraft {
        &self.draft
    }

    pub fn field_errors(&self) -> &BTreeMap<Field, String> {
        &self.field_errors
    }

    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn top_level_error(&self) -> Option<&str> {
        self.top_level_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Updates one field and clears that field's stored error.
    ///
    /// Re-validation is deferred to the next submit attempt.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), ParseError> {
        self.draft.set(field, value)?;
        self.field_errors.remove(&field);
        Ok(())
    }

    pub fn set_source(&mut self, source: Source) {
        self.draft.source = source;
        self.field_errors.remove(&Field::Source);
    }

    /// Discards the draft and every error, and abandons any in-flight
    /// submission.
    pub fn cancel(&mut self) {
        // Why: the abandoned request may still resolve; bumping the
        // generation makes `finish_submit` drop it instead of touching the
        // next draft.
        self.generation += 1;
        self.submitting = false;
        self.reset();
    }

    /// Validates the draft and, when valid, marks the form as submitting.
    ///
    /// Returns the payload to send with its ticket, or `None` when
    /// validation failed or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        if self.submitting {
            return None;
        }
        self.field_errors.clear();
        self.top_level_error = None;

        let report = validate(&self.draft);
        if !report.is_valid() {
            debug!(
                "event=form_submit module=form status=invalid fields={} top_level={}",
                join_fields(report.field_errors.keys()),
                report.top_level_error.is_some()
            );
            self.field_errors = report.field_errors;
            self.top_level_error = report.top_level_error;
            return None;
        }

        self.submitting = true;
        self.generation += 1;
        info!(
            "event=form_submit module=form status=start generation={}",
            self.generation
        );
        Some(PendingSubmit {
            ticket: SubmitTicket {
                generation: self.generation,
            },
            payload: self.draft.to_payload(),
        })
    }

    /// Completes a submission started with `begin_submit`.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        result: Result<Professional, CreateError>,
    ) -> SubmitOutcome {
        if !self.submitting || ticket.generation != self.generation {
            debug!(
                "event=form_submit module=form status=discarded generation={} latest_generation={}",
                ticket.generation, self.generation
            );
            return SubmitOutcome::Discarded;
        }
        self.submitting = false;
        match result {
            Ok(record) => {
                info!("event=form_submit module=form status=ok id={}", record.id);
                self.reset();
                SubmitOutcome::Saved(record)
            }
            Err(err) => {
                warn!(
                    "event=form_submit module=form status=error kind={}",
                    match &err {
                        CreateError::Fields(_) => "fields",
                        CreateError::Message(_) => "message",
                    }
                );
                self.merge_create_error(err);
                SubmitOutcome::Rejected
            }
        }
    }

    /// Validates, calls `creator` and applies its result.
    pub fn submit_with<C>(&mut self, creator: &C) -> SubmitOutcome
    where
        C: ProfessionalCreator + ?Sized,
    {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }
        let Some(pending) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };
        let result = creator.create_professional(&pending.payload);
        self.finish_submit(pending.ticket, result)
    }

    fn merge_create_error(&mut self, err: CreateError) {
        match err {
            CreateError::Message(message) => self.top_level_error = Some(message),
            CreateError::Fields(fields) => {
                let mut top_level_lines = Vec::new();
                for (key, messages) in fields {
                    let message = messages.join(" ");
                    match key.parse::<Field>() {
                        Ok(field) => {
                            self.field_errors.insert(field, message);
                        }
                        Err(_) if TOP_LEVEL_ERROR_KEYS.contains(&key.as_str()) => {
                            top_level_lines.push(message);
                        }
                        Err(_) => top_level_lines.push(format!("{key}: {message}")),
                    }
                }
                if !top_level_lines.is_empty() {
                    self.top_level_error = Some(top_level_lines.join("\n"));
                }
            }
        }
    }

    fn reset(&mut self) {
        self.draft = ProfessionalDraft::default();
        self.field_errors.clear();
        self.top_level_error = None;
    }
}

fn join_fields<'a>(fields: impl Iterator<Item = &'a Field>) -> String {
    fields.map(|field| field.as_str()).collect::<Vec<_>>().join(",")
}
