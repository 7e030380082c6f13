use std::sync::OnceLock;

use regex::Regex;

use super::domain::{
    CreditComfort, DisqualificationReason, FormType, LeadStatus, LeadSubmission,
    QualificationAnswers,
};
use crate::eligibility::EligibilityResult;

const MIN_PHONE_DIGITS: usize = 10;

/// Intake validation failure surfaced to the submitting form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("an email address or phone number is required")]
    MissingContact,
    #[error("email address '{0}' is not valid")]
    InvalidEmail(String),
    #[error("phone number must contain at least 10 digits")]
    InvalidPhone,
    #[error("name is required")]
    MissingName,
}

/// Homeowner status is checked before credit comfort.
pub fn screen_household(answers: &QualificationAnswers) -> Option<DisqualificationReason> {
    if answers.is_homeowner == Some(false) {
        return Some(DisqualificationReason::NotHomeowner);
    }
    if answers.credit_comfort == Some(CreditComfort::Unlikely) {
        return Some(DisqualificationReason::CreditUnlikely);
    }
    None
}

pub fn validate_submission(submission: &LeadSubmission) -> Result<(), LeadValidationError> {
    if submission.form_type != FormType::Waitlist && submission.name.trim().is_empty() {
        return Err(LeadValidationError::MissingName);
    }

    let email = non_blank(submission.email.as_deref());
    let phone = non_blank(submission.phone.as_deref());
    if email.is_none() && phone.is_none() {
        return Err(LeadValidationError::MissingContact);
    }

    if let Some(email) = email {
        if !email_pattern().is_match(email) {
            return Err(LeadValidationError::InvalidEmail(email.to_string()));
        }
    }

    if let Some(phone) = phone {
        if phone.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
            return Err(LeadValidationError::InvalidPhone);
        }
    }

    Ok(())
}

pub(crate) fn lead_status(
    form_type: FormType,
    eligibility: Option<&EligibilityResult>,
    disqualification: Option<DisqualificationReason>,
) -> LeadStatus {
    if form_type == FormType::Waitlist || disqualification.is_some() {
        return LeadStatus::Waitlisted;
    }
    match eligibility {
        Some(result) if result.eligible => LeadStatus::Qualified,
        _ => LeadStatus::NeedsReview,
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn email_pattern() -> &'static Regex {
    static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}
