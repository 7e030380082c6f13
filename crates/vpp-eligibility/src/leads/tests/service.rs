use std::sync::Arc;

use super::common::*;
use crate::eligibility::{EligibilityEngine, ReasonCode};
use crate::leads::{
    CreditComfort, DisqualificationReason, FormType, LeadId, LeadService, LeadServiceError,
    LeadStatus, LeadValidationError, RepositoryError,
};

#[test]
fn eligible_homeowner_is_qualified_and_notified() {
    let (service, repository, notifier) = build_service();

    let record = service.submit(submission()).expect("lead stored");

    assert!(record.id.0.starts_with("lead-"));
    assert_eq!(record.status, LeadStatus::Qualified);
    assert!(record.disqualification.is_none());
    let eligibility = record.eligibility.as_ref().expect("address evaluated");
    assert_eq!(eligibility.reason, ReasonCode::EnergyCommunityEligible);

    let stored = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .get(&record.id)
        .cloned()
        .expect("record persisted");
    assert_eq!(stored.submission.name, "Maria Gonzalez");

    let events = notifier.events();
    let templates: Vec<_> = events.iter().map(|event| event.template.as_str()).collect();
    assert_eq!(templates, ["sales_new_lead", "customer_confirmation"]);

    let sales = &events[0];
    assert_eq!(sales.lead_id, record.id);
    assert_eq!(sales.details.get("provider").map(String::as_str), Some("Centerpoint"));
    assert_eq!(sales.details.get("status").map(String::as_str), Some("qualified"));
    assert_eq!(sales.details.get("homeowner").map(String::as_str), Some("Yes"));
    assert_eq!(
        sales.details.get("appointment").map(String::as_str),
        Some("Tuesday, November 4 12:00 PM - 5:00 PM")
    );

    let confirmation = &events[1];
    assert_eq!(
        confirmation.details.get("email").map(String::as_str),
        Some("maria@example.com")
    );
}

#[test]
fn zip_is_taken_from_address_text_when_missing() {
    let (service, _, _) = build_service();
    let mut lead = submission();
    lead.zip_code = None;
    lead.county = Some("Dallas".to_string());
    lead.address = "500 Main St, Dallas, TX 75201".to_string();

    let record = service.submit(lead).expect("lead stored");

    let eligibility = record.eligibility.expect("zip extracted");
    assert_eq!(eligibility.reason, ReasonCode::NotEnergyCommunity);
    assert_eq!(record.status, LeadStatus::NeedsReview);
}

#[test]
fn lead_without_any_zip_needs_review() {
    let (service, _, notifier) = build_service();
    let mut lead = submission();
    lead.zip_code = None;
    lead.address = "Fannin St, Houston".to_string();
    lead.email = None;

    let record = service.submit(lead).expect("lead stored");

    assert!(record.eligibility.is_none());
    assert_eq!(record.status, LeadStatus::NeedsReview);
    assert_eq!(record.status_view().message, "address pending review");
    assert_eq!(notifier.events().len(), 1, "no confirmation without email");
}

#[test]
fn disqualified_household_is_waitlisted() {
    let (service, _, _) = build_service();
    let mut lead = submission();
    lead.answers.credit_comfort = Some(CreditComfort::Unlikely);

    let record = service.submit(lead).expect("lead stored");

    assert_eq!(
        record.disqualification,
        Some(DisqualificationReason::CreditUnlikely)
    );
    assert_eq!(record.status, LeadStatus::Waitlisted);

    let view = record.status_view();
    assert_eq!(view.reason, Some("credit_unlikely"));
    assert_eq!(view.message, "This program has credit requirements.");
    assert_eq!(view.eligible, Some(true));
}

#[test]
fn waitlist_form_is_always_waitlisted() {
    let (service, _, _) = build_service();
    let mut lead = submission();
    lead.form_type = FormType::Waitlist;
    lead.name = String::new();

    let record = service.submit(lead).expect("lead stored");

    assert_eq!(record.status, LeadStatus::Waitlisted);
}

#[test]
fn invalid_submission_is_not_stored() {
    let (service, repository, notifier) = build_service();
    let mut lead = submission();
    lead.email = None;
    lead.phone = None;

    let err = service.submit(lead).expect_err("validation fails");

    assert!(matches!(
        err,
        LeadServiceError::Validation(LeadValidationError::MissingContact)
    ));
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
    assert!(notifier.events().is_empty());
}

#[test]
fn notifier_failure_keeps_stored_lead_accepted() {
    let repository = Arc::new(MemoryRepository::default());
    let service = LeadService::new(
        repository.clone(),
        Arc::new(FailingNotifier),
        Arc::new(EligibilityEngine::builtin()),
    );

    let record = service
        .submit(submission())
        .expect("stored lead is accepted despite notifier failure");

    assert_eq!(record.status, LeadStatus::Qualified);
    let records = repository.records.lock().expect("repository mutex poisoned");
    assert_eq!(records.len(), 1);
    assert!(records.contains_key(&record.id));
}

#[test]
fn county_suffix_is_dropped_before_evaluation() {
    let (service, _, notifier) = build_service();
    let mut lead = submission();
    lead.zip_code = Some("75201".to_string());
    lead.county = Some("Dallas County".to_string());

    let record = service.submit(lead).expect("lead stored");

    let eligibility = record.eligibility.as_ref().expect("address evaluated");
    assert_eq!(eligibility.reason, ReasonCode::NotEnergyCommunity);
    assert!(eligibility.message.starts_with("Dallas County is not"));
    assert!(!eligibility.message.contains("County County"));
    assert_eq!(
        notifier.events()[0].details.get("status").map(String::as_str),
        Some("needs_review")
    );
}

#[test]
fn get_returns_stored_lead_or_not_found() {
    let (service, _, _) = build_service();
    let record = service.submit(submission()).expect("lead stored");

    let fetched = service.get(&record.id).expect("lead fetched");
    assert_eq!(fetched.id, record.id);

    let missing = service
        .get(&LeadId("lead-999999".to_string()))
        .expect_err("unknown lead");
    assert!(matches!(
        missing,
        LeadServiceError::Repository(RepositoryError::NotFound)
    ));
}
