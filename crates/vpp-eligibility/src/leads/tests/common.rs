use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::eligibility::EligibilityEngine;
use crate::leads::{
    Appointment, AppointmentWindow, Attribution, CreditComfort, FormType, JourneyPath, LeadId,
    LeadNotification, LeadNotifier, LeadRecord, LeadRepository, LeadService, LeadSubmission,
    NotifyError, QualificationAnswers, RepositoryError,
};

pub(super) fn submission() -> LeadSubmission {
    LeadSubmission {
        name: "Maria Gonzalez".to_string(),
        phone: Some("(713) 555-0142".to_string()),
        email: Some("maria@example.com".to_string()),
        address: "1001 Fannin St, Houston, TX 77002".to_string(),
        zip_code: Some("77002".to_string()),
        county: Some("Harris".to_string()),
        state: Some("TX".to_string()),
        answers: QualificationAnswers {
            is_homeowner: Some(true),
            has_solar: Some(false),
            credit_comfort: Some(CreditComfort::Confident),
        },
        appointment: Some(Appointment {
            day: NaiveDate::from_ymd_opt(2025, 11, 4).expect("valid date"),
            window: AppointmentWindow::Afternoon,
        }),
        journey_path: Some(JourneyPath::Savings),
        form_type: FormType::Hero,
        attribution: Attribution {
            utm_source: Some("facebook".to_string()),
            ..Attribution::default()
        },
    }
}

pub(super) fn build_service() -> (
    LeadService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = LeadService::new(
        repository.clone(),
        notifier.clone(),
        Arc::new(EligibilityEngine::builtin()),
    );
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for MemoryRepository {
    fn insert(&self, record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl LeadNotifier for MemoryNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl LeadRepository for ConflictRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl LeadRepository for UnavailableRepository {
    fn insert(&self, _record: LeadRecord) -> Result<LeadRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("firestore offline".to_string()))
    }

    fn fetch(&self, _id: &LeadId) -> Result<Option<LeadRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("firestore offline".to_string()))
    }
}

pub(super) struct FailingNotifier;

impl LeadNotifier for FailingNotifier {
    fn notify(&self, _notification: LeadNotification) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("smtp refused".to_string()))
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
