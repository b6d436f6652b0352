//! Alert lifecycle: creation, updates, one-way deactivation, and queries.
//!
//! Alerts are the second entry point into the safety synchronizer. Every
//! lifecycle transition and the beach-level writes it implies happen
//! under a single write-lock critical section: an alert can never be
//! observed without its affected beaches marked dangerous, and a
//! deactivated alert can never be observed with its beaches still forced.

use chrono::{DateTime, Utc};
use coastwatch_core::SafetySignal;
use coastwatch_types::{Alert, AlertId, AlertSeverity, AlertStatus, AlertType, BeachId};
use serde::Deserialize;
use tracing::info;

use crate::error::RegistryError;
use crate::store::{Registry, RegistryInner};
use crate::sync;

/// Payload for creating an alert.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    /// The kind of hazard.
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// How serious the hazard is.
    pub severity: AlertSeverity,
    /// Human-readable message, required.
    pub message: String,
    /// Beaches this alert applies to. Every ID must resolve to an
    /// existing beach.
    #[serde(default)]
    pub affected_beaches: Vec<BeachId>,
    /// When the alert takes effect. Defaults to creation time.
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    /// Scheduled end, if known up front.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

/// Partial update for an alert.
///
/// The affected-beach set is immutable after creation and therefore
/// absent here. Setting `active` to `false` triggers the deactivation
/// transition; setting it to `true` on an inactive alert is rejected
/// (the lifecycle is one-way).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertUpdate {
    /// New hazard kind.
    #[serde(rename = "type")]
    pub alert_type: Option<AlertType>,
    /// New severity.
    pub severity: Option<AlertSeverity>,
    /// New message.
    pub message: Option<String>,
    /// New scheduled end.
    pub end_time: Option<DateTime<Utc>>,
    /// Lifecycle control: `false` deactivates the alert.
    pub active: Option<bool>,
}

/// Deactivate `alert` in place and reset its beaches.
///
/// Shared by [`Registry::deactivate_alert`] and updates that set
/// `active: false`. Must be called with the write lock held; `alert_id`
/// must exist and be active.
fn deactivate_in_place(inner: &mut RegistryInner, alert_id: AlertId) {
    let affected = match inner.alerts.get_mut(&alert_id) {
        Some(alert) => {
            let now = Utc::now();
            alert.status = AlertStatus::Inactive;
            if alert.end_time.is_none() {
                alert.end_time = Some(now);
            }
            alert.updated_at = now;
            alert.affected_beaches.clone()
        }
        None => return,
    };

    for beach_id in affected {
        if let Some(beach) = inner.beaches.get_mut(&beach_id) {
            sync::apply_signal(beach, SafetySignal::AlertCleared);
        }
    }
    info!(alert_id = %alert_id, "alert deactivated");
}

impl Registry {
    /// Create an alert and force every affected beach to `Dangerous`.
    ///
    /// Beach existence is validated strictly before the alert record is
    /// written; the forced safety-level writes happen strictly after,
    /// all inside one critical section.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Validation`] if the message is empty or
    /// any affected beach does not exist (the message reports how many
    /// references failed to resolve).
    pub async fn create_alert(&self, new: NewAlert) -> Result<Alert, RegistryError> {
        let mut inner = self.inner.write().await;

        if new.message.trim().is_empty() {
            return Err(RegistryError::Validation(String::from(
                "Alert message is required",
            )));
        }

        let missing = new
            .affected_beaches
            .iter()
            .filter(|id| !inner.beaches.contains_key(id))
            .count();
        if missing > 0 {
            return Err(RegistryError::Validation(format!(
                "{missing} affected beach reference(s) do not exist"
            )));
        }

        let now = Utc::now();
        let alert = Alert {
            id: AlertId::new(),
            alert_type: new.alert_type,
            severity: new.severity,
            message: new.message,
            affected_beaches: new.affected_beaches,
            start_time: new.start_time.unwrap_or(now),
            end_time: new.end_time,
            status: AlertStatus::Active,
            created_at: now,
            updated_at: now,
        };
        inner.alerts.insert(alert.id, alert.clone());

        for beach_id in &alert.affected_beaches {
            if let Some(beach) = inner.beaches.get_mut(beach_id) {
                sync::apply_signal(beach, SafetySignal::AlertRaised);
            }
        }

        info!(
            alert_id = %alert.id,
            alert_type = ?alert.alert_type,
            severity = ?alert.severity,
            affected = alert.affected_beaches.len(),
            "alert created"
        );
        Ok(alert)
    }

    /// Merge a partial update into an alert.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlertNotFound`] if the alert is absent,
    /// or [`RegistryError::Validation`] when the update tries to
    /// reactivate an inactive alert or re-deactivate one.
    pub async fn update_alert(
        &self,
        id: AlertId,
        update: AlertUpdate,
    ) -> Result<Alert, RegistryError> {
        let mut inner = self.inner.write().await;

        let alert = inner
            .alerts
            .get_mut(&id)
            .ok_or(RegistryError::AlertNotFound)?;

        // Lifecycle checks first, before any field is touched.
        let deactivate = match update.active {
            Some(false) if alert.is_active() => true,
            Some(false) => {
                return Err(RegistryError::Validation(String::from(
                    "Alert is already inactive",
                )));
            }
            Some(true) if !alert.is_active() => {
                return Err(RegistryError::Validation(String::from(
                    "An inactive alert cannot be reactivated",
                )));
            }
            _ => false,
        };

        if let Some(alert_type) = update.alert_type {
            alert.alert_type = alert_type;
        }
        if let Some(severity) = update.severity {
            alert.severity = severity;
        }
        if let Some(message) = update.message {
            alert.message = message;
        }
        if let Some(end_time) = update.end_time {
            alert.end_time = Some(end_time);
        }
        alert.updated_at = Utc::now();

        if deactivate {
            deactivate_in_place(&mut inner, id);
        }

        inner
            .alerts
            .get(&id)
            .cloned()
            .ok_or(RegistryError::AlertNotFound)
    }

    /// Soft-delete an alert: one-way transition to `Inactive`, then reset
    /// the safety level of every beach it affected.
    ///
    /// The record is never physically removed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlertNotFound`] if the alert is absent,
    /// or [`RegistryError::Validation`] if it was already deactivated.
    pub async fn deactivate_alert(&self, id: AlertId) -> Result<Alert, RegistryError> {
        let mut inner = self.inner.write().await;

        let alert = inner.alerts.get(&id).ok_or(RegistryError::AlertNotFound)?;
        if !alert.is_active() {
            return Err(RegistryError::Validation(String::from(
                "Alert is already inactive",
            )));
        }

        deactivate_in_place(&mut inner, id);

        inner
            .alerts
            .get(&id)
            .cloned()
            .ok_or(RegistryError::AlertNotFound)
    }

    /// All currently active alerts, most recent start time first.
    pub async fn active_alerts(&self) -> Vec<Alert> {
        let inner = self.inner.read().await;
        let mut alerts: Vec<Alert> = inner
            .alerts
            .values()
            .filter(|a| a.is_active())
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        alerts
    }

    /// Active alerts whose affected set contains the given beach, most
    /// recent start time first.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::BeachNotFound`] if the beach itself does
    /// not exist.
    pub async fn alerts_for_beach(&self, beach_id: BeachId) -> Result<Vec<Alert>, RegistryError> {
        let inner = self.inner.read().await;

        if !inner.beaches.contains_key(&beach_id) {
            return Err(RegistryError::BeachNotFound);
        }

        let mut alerts: Vec<Alert> = inner
            .alerts
            .values()
            .filter(|a| a.is_active() && a.affected_beaches.contains(&beach_id))
            .cloned()
            .collect();
        alerts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(alerts)
    }
}
