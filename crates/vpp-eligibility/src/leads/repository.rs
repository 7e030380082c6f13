use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{DisqualificationReason, LeadId, LeadStatus, LeadSubmission};
use crate::eligibility::EligibilityResult;

/// Stored lead: the submission plus everything intake derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: LeadId,
    pub submission: LeadSubmission,
    pub eligibility: Option<EligibilityResult>,
    pub disqualification: Option<DisqualificationReason>,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn status_message(&self) -> String {
        if let Some(reason) = self.disqualification {
            return reason.message().to_string();
        }
        match &self.eligibility {
            Some(result) => result.message.clone(),
            None => "address pending review".to_string(),
        }
    }

    pub fn status_view(&self) -> LeadStatusView {
        LeadStatusView {
            lead_id: self.id.clone(),
            status: self.status.label(),
            eligible: self.eligibility.as_ref().map(|result| result.eligible),
            reason: self
                .disqualification
                .map(|reason| reason.as_str())
                .or_else(|| {
                    self.eligibility
                        .as_ref()
                        .map(|result| result.reason.as_str())
                }),
            message: self.status_message(),
        }
    }
}

/// Storage abstraction so lead intake can run against any backend.
pub trait LeadRepository: Send + Sync {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError>;
    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for sales alerts and customer confirmations (email, SMS, CRM).
pub trait LeadNotifier: Send + Sync {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadNotification {
    pub template: String,
    pub lead_id: LeadId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Public status of a lead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStatusView {
    pub lead_id: LeadId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub message: String,
}
