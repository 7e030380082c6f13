use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use vpp_eligibility::leads::{
    LeadId, LeadNotification, LeadNotifier, LeadRecord, LeadRepository, NotifyError,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadRepository {
    records: Arc<Mutex<HashMap<LeadId, LeadRecord>>>,
}

impl LeadRepository for InMemoryLeadRepository {
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

/// Records notifications and logs them; no email or SMS leaves the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLeadNotifier {
    events: Arc<Mutex<Vec<LeadNotification>>>,
}

impl LeadNotifier for InMemoryLeadNotifier {
    fn notify(&self, notification: LeadNotification) -> Result<(), NotifyError> {
        info!(
            template = %notification.template,
            lead_id = %notification.lead_id.0,
            "lead notification queued"
        );
        let mut guard = self.events.lock().expect("notifier mutex poisoned");
        guard.push(notification);
        Ok(())
    }
}

impl InMemoryLeadNotifier {
    #[cfg(test)]
    pub(crate) fn events(&self) -> Vec<LeadNotification> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn notifier_keeps_notifications_in_order() {
        let notifier = InMemoryLeadNotifier::default();
        for template in ["sales_new_lead", "customer_confirmation"] {
            notifier
                .notify(LeadNotification {
                    template: template.to_string(),
                    lead_id: LeadId("lead-000001".to_string()),
                    details: BTreeMap::new(),
                })
                .expect("notify succeeds");
        }

        let templates: Vec<_> = notifier
            .events()
            .into_iter()
            .map(|event| event.template)
            .collect();
        assert_eq!(templates, ["sales_new_lead", "customer_confirmation"]);
    }
}
