use chrono::Utc;
use profiles_core::validation::{CONTACT_REQUIRED_MESSAGE, INVALID_EMAIL_MESSAGE};
use profiles_core::{
    CreateError, Field, FormController, ListCoordinator, MemoryGateway, NewProfessional,
    Professional, ProfessionalCreator, Source, SubmitOutcome,
};
use std::cell::RefCell;

/// Creator that records payloads and replies with a canned result.
struct CannedCreator {
    reply: Result<(), CreateError>,
    seen: RefCell<Vec<NewProfessional>>,
}

impl CannedCreator {
    fn accepting() -> Self {
        Self {
            reply: Ok(()),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn rejecting(err: CreateError) -> Self {
        Self {
            reply: Err(err),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl ProfessionalCreator for CannedCreator {
    fn create_professional(&self, payload: &NewProfessional) -> Result<Professional, CreateError> {
        self.seen.borrow_mut().push(payload.clone());
        self.reply.clone()?;
        Ok(Professional {
            id: 42,
            full_name: payload.full_name.clone(),
            email: payload.email.clone(),
            phone: payload.phone.clone(),
            company_name: Some(payload.company_name.clone()),
            job_title: Some(payload.job_title.clone()),
            source: payload.source,
            created_at: Utc::now(),
        })
    }
}

fn filled_form(email: &str, phone: &str) -> FormController {
    let mut form = FormController::new();
    form.set_field(Field::FullName, "Jane Doe").unwrap();
    form.set_field(Field::Email, email).unwrap();
    form.set_field(Field::Phone, phone).unwrap();
    form.set_field(Field::CompanyName, "Acme Inc.").unwrap();
    form.set_field(Field::JobTitle, "Software Engineer").unwrap();
    form
}

#[test]
fn invalid_draft_never_reaches_the_creator() {
    let creator = CannedCreator::accepting();
    let mut form = filled_form("", "");

    assert_eq!(form.submit_with(&creator), SubmitOutcome::Invalid);
    assert_eq!(form.top_level_error(), Some(CONTACT_REQUIRED_MESSAGE));
    assert!(form.field_errors().is_empty());
    assert!(creator.seen.borrow().is_empty());
    assert!(!form.is_submitting());
}

#[test]
fn editing_a_field_clears_only_that_error() {
    let creator = CannedCreator::accepting();
    let mut form = filled_form("bad", "not-a-phone!!");

    assert_eq!(form.submit_with(&creator), SubmitOutcome::Invalid);
    assert_eq!(form.field_error(Field::Email), Some(INVALID_EMAIL_MESSAGE));
    assert!(form.field_error(Field::Phone).is_some());

    form.set_field(Field::Email, "jane@example.com").unwrap();
    assert_eq!(form.field_error(Field::Email), None);
    assert!(form.field_error(Field::Phone).is_some(), "no re-validation on edit");
}

#[test]
fn submit_attempt_clears_previous_errors_first() {
    let creator = CannedCreator::accepting();
    let mut form = filled_form("", "");
    form.submit_with(&creator);
    assert!(form.top_level_error().is_some());

    form.set_field(Field::Phone, "not-a-phone!!").unwrap();
    assert_eq!(form.submit_with(&creator), SubmitOutcome::Invalid);
    assert_eq!(form.top_level_error(), None);
    assert!(form.field_error(Field::Phone).is_some());
}

#[test]
fn successful_save_resets_draft_and_sends_trimmed_payload() {
    let creator = CannedCreator::accepting();
    let mut form = filled_form(" jane@example.com ", "");
    form.set_source(Source::Partner);

    let SubmitOutcome::Saved(record) = form.submit_with(&creator) else {
        panic!("expected a saved record");
    };
    assert_eq!(record.id, 42);

    let seen = creator.seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].email.as_deref(), Some("jane@example.com"));
    assert_eq!(seen[0].phone, None);
    assert_eq!(seen[0].source, Source::Partner);

    assert_eq!(form.draft().full_name, "");
    assert_eq!(form.draft().source, Source::Direct);
    assert!(form.field_errors().is_empty());
    assert_eq!(form.top_level_error(), None);
}

#[test]
fn structured_server_errors_override_field_messages() {
    let mut fields = std::collections::BTreeMap::new();
    fields.insert(
        "email".to_string(),
        vec!["A professional with this email already exists.".to_string()],
    );
    fields.insert(
        "non_field_errors".to_string(),
        vec!["Either email or phone is required.".to_string()],
    );
    fields.insert("nickname".to_string(), vec!["Unknown field.".to_string()]);
    let creator = CannedCreator::rejecting(CreateError::Fields(fields));
    let mut form = filled_form("jane@example.com", "");

    assert_eq!(form.submit_with(&creator), SubmitOutcome::Rejected);
    assert_eq!(
        form.field_error(Field::Email),
        Some("A professional with this email already exists.")
    );
    assert_eq!(
        form.top_level_error(),
        Some("nickname: Unknown field.\nEither email or phone is required.")
    );
    assert_eq!(form.draft().email, "jane@example.com", "draft is kept");
    assert!(!form.is_submitting());
}

#[test]
fn unstructured_server_error_becomes_top_level() {
    let creator = CannedCreator::rejecting(CreateError::from_response_body(None));
    let mut form = filled_form("", "+1 234 567 8900");

    assert_eq!(form.submit_with(&creator), SubmitOutcome::Rejected);
    assert_eq!(
        form.top_level_error(),
        Some("Failed to create professional. Please check the network.")
    );
    assert!(form.field_errors().is_empty());
}

#[test]
fn two_phase_submit_blocks_concurrent_attempts() {
    let mut form = filled_form("jane@example.com", "");
    let pending = form.begin_submit().expect("valid draft");
    assert!(form.is_submitting());
    assert_eq!(form.begin_submit(), None);
    assert_eq!(
        form.submit_with(&CannedCreator::accepting()),
        SubmitOutcome::InFlight
    );

    let outcome = form.finish_submit(
        pending.ticket,
        Err(CreateError::Message("boom".to_string())),
    );
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(pending.payload.full_name, "Jane Doe");
    assert!(form.begin_submit().is_some());
}

#[test]
fn cancel_mid_flight_drops_the_late_result() {
    let mut form = filled_form("alice@example.com", "");
    let abandoned = form.begin_submit().expect("valid draft");
    form.cancel();
    assert!(!form.is_submitting());

    form.set_field(Field::FullName, "Bob Roe").unwrap();
    form.set_field(Field::Email, "bob@example.com").unwrap();
    form.set_field(Field::CompanyName, "Roe Ltd").unwrap();
    form.set_field(Field::JobTitle, "Designer").unwrap();

    let late_error = CreateError::field("email", "A professional with this email already exists.");
    assert_eq!(
        form.finish_submit(abandoned.ticket, Err(late_error)),
        SubmitOutcome::Discarded
    );
    assert_eq!(form.field_error(Field::Email), None);
    assert_eq!(form.draft().email, "bob@example.com");

    let current = form.begin_submit().expect("new draft should not be blocked");
    let stale_success = CannedCreator::accepting().create_professional(&abandoned.payload);
    assert_eq!(
        form.finish_submit(abandoned.ticket, stale_success),
        SubmitOutcome::Discarded
    );
    assert_eq!(form.draft().full_name, "Bob Roe", "stale success must not reset the draft");
    assert!(form.is_submitting());

    let fresh = CannedCreator::accepting().create_professional(&current.payload);
    assert!(matches!(
        form.finish_submit(current.ticket, fresh),
        SubmitOutcome::Saved(record) if record.email.as_deref() == Some("bob@example.com")
    ));
}

#[test]
fn result_for_an_already_finished_submission_is_discarded() {
    let mut form = filled_form("jane@example.com", "");
    let pending = form.begin_submit().expect("valid draft");
    let saved = CannedCreator::accepting().create_professional(&pending.payload);
    assert!(matches!(
        form.finish_submit(pending.ticket, saved.clone()),
        SubmitOutcome::Saved(_)
    ));
    assert_eq!(
        form.finish_submit(pending.ticket, saved),
        SubmitOutcome::Discarded
    );
}

#[test]
fn cancel_discards_draft_and_errors() {
    let mut form = filled_form("bad", "");
    assert_eq!(
        form.submit_with(&CannedCreator::accepting()),
        SubmitOutcome::Invalid
    );
    assert_eq!(form.field_error(Field::Email), Some(INVALID_EMAIL_MESSAGE));
    form.cancel();

    assert_eq!(form.draft().email, "");
    assert!(form.field_errors().is_empty());
    assert_eq!(form.top_level_error(), None);
}

#[test]
fn unknown_source_is_rejected_without_touching_errors() {
    let mut form = FormController::new();
    assert!(form.set_field(Field::Source, "vendor").is_err());
    assert_eq!(form.draft().source, Source::Direct);
}

#[test]
fn saved_record_shows_up_after_refresh() {
    let gateway = MemoryGateway::with_sample_data();
    let mut list = ListCoordinator::default();
    let request = list.mount();
    list.resolve_with(request, &gateway);
    assert_eq!(list.records().len(), 10);

    let mut form = filled_form("jane@example.com", "");
    assert!(matches!(form.submit_with(&gateway), SubmitOutcome::Saved(_)));

    let request = list.refresh();
    list.resolve_with(request, &gateway);
    assert_eq!(list.records().len(), 11);
    assert_eq!(list.records()[0].full_name, "Jane Doe");
}
