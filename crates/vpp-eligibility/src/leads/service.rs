use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{LeadId, LeadSubmission};
use super::repository::{
    LeadNotification, LeadNotifier, LeadRecord, LeadRepository, RepositoryError,
};
use super::screening::{
    lead_status, non_blank, screen_household, validate_submission, LeadValidationError,
};
use crate::eligibility::{EligibilityEngine, EligibilityResult};
use crate::resolver::{extract_zip_from_free_text, strip_county_suffix, AddressData};

/// Lead intake: validation, eligibility, household screening, storage, and hand-off.
pub struct LeadService<R, N> {
    repository: Arc<R>,
    notifier: Arc<N>,
    engine: Arc<EligibilityEngine>,
}

static LEAD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_lead_id() -> LeadId {
    let id = LEAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    LeadId(format!("lead-{id:06}"))
}

impl<R, N> LeadService<R, N>
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    pub fn new(repository: Arc<R>, notifier: Arc<N>, engine: Arc<EligibilityEngine>) -> Self {
        Self {
            repository,
            notifier,
            engine,
        }
    }

    /// Validate, evaluate, and store a lead, then notify sales and the customer.
    ///
    /// Once stored, the lead is accepted: notification failures are logged, not returned.
    pub fn submit(&self, submission: LeadSubmission) -> Result<LeadRecord, LeadServiceError> {
        validate_submission(&submission)?;

        let eligibility = self.evaluate_address(&submission);
        let disqualification = screen_household(&submission.answers);
        let status = lead_status(
            submission.form_type,
            eligibility.as_ref(),
            disqualification,
        );

        let record = LeadRecord {
            id: next_lead_id(),
            submission,
            eligibility,
            disqualification,
            status,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            lead_id = %stored.id.0,
            status = stored.status.label(),
            form = stored.submission.form_type.as_str(),
            "lead captured"
        );

        self.deliver(LeadNotification {
            template: "sales_new_lead".to_string(),
            lead_id: stored.id.clone(),
            details: sales_details(&stored),
        });

        if let Some(email) = non_blank(stored.submission.email.as_deref()) {
            let mut details = BTreeMap::new();
            details.insert("email".to_string(), email.to_string());
            details.insert("name".to_string(), stored.submission.name.trim().to_string());
            if let Some(appointment) = &stored.submission.appointment {
                details.insert("appointment".to_string(), appointment.describe());
            }
            self.deliver(LeadNotification {
                template: "customer_confirmation".to_string(),
                lead_id: stored.id.clone(),
                details,
            });
        }

        Ok(stored)
    }

    /// Fetch a lead for status responses.
    pub fn get(&self, lead_id: &LeadId) -> Result<LeadRecord, LeadServiceError> {
        let record = self
            .repository
            .fetch(lead_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn deliver(&self, notification: LeadNotification) {
        let template = notification.template.clone();
        let lead_id = notification.lead_id.0.clone();
        if let Err(error) = self.notifier.notify(notification) {
            warn!(%error, %lead_id, template = %template, "lead notification failed");
        }
    }

    fn evaluate_address(&self, submission: &LeadSubmission) -> Option<EligibilityResult> {
        let zip_code = non_blank(submission.zip_code.as_deref())
            .map(str::to_string)
            .or_else(|| extract_zip_from_free_text(&submission.address))?;

        let address = AddressData {
            formatted_address: submission.address.trim().to_string(),
            zip_code,
            county: submission
                .county
                .as_deref()
                .map(strip_county_suffix)
                .unwrap_or_default(),
            state: submission.state.clone().unwrap_or_default(),
            ..AddressData::default()
        };
        Some(self.engine.check(&address))
    }
}

fn sales_details(record: &LeadRecord) -> BTreeMap<String, String> {
    let submission = &record.submission;
    let mut details = BTreeMap::new();
    let mut put = |key: &str, value: String| {
        if !value.is_empty() {
            details.insert(key.to_string(), value);
        }
    };

    put("name", submission.name.trim().to_string());
    put("email", submission.email.clone().unwrap_or_default());
    put("phone", submission.phone.clone().unwrap_or_default());
    put("address", submission.address.trim().to_string());
    put("status", record.status.label().to_string());
    put("form_type", submission.form_type.as_str().to_string());

    if let Some(result) = &record.eligibility {
        put("eligible", result.eligible.to_string());
        put("reason", result.reason.as_str().to_string());
        put("county", result.county.clone().unwrap_or_default());
        if let Some(utility) = &result.utility {
            put("provider", utility.territory.name.clone());
        }
    }
    if let Some(reason) = record.disqualification {
        put("disqualification", reason.as_str().to_string());
    }

    let answers = &submission.answers;
    if let Some(homeowner) = answers.is_homeowner {
        put("homeowner", yes_no(homeowner));
    }
    if let Some(has_solar) = answers.has_solar {
        put("has_solar", yes_no(has_solar));
    }
    if let Some(comfort) = answers.credit_comfort {
        put("credit_comfort", comfort.label().to_string());
    }
    if let Some(appointment) = &submission.appointment {
        put("appointment", appointment.describe());
    }

    details
}

fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Error raised by the lead service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Validation(#[from] LeadValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
