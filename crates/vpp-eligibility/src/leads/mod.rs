//! Lead capture for households that finish the qualification wizard.
//!
//! Storage and outbound notifications are ports ([`LeadRepository`], [`LeadNotifier`]);
//! the service only decides what to store and whom to tell.

pub mod domain;
pub mod repository;
pub mod router;
pub(crate) mod screening;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Appointment, AppointmentWindow, Attribution, CreditComfort, DisqualificationReason,
    FormType, JourneyPath, LeadId, LeadStatus, LeadSubmission, QualificationAnswers,
};
pub use repository::{
    LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadStatusView, NotifyError,
    RepositoryError,
};
pub use router::lead_router;
pub use screening::{screen_household, validate_submission, LeadValidationError};
pub use service::{LeadService, LeadServiceError};
