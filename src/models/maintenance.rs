//! Maintenance model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{MaintenanceStatus, MaintenanceType};

/// Maintenance record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: String,
    pub equipment_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
    /// Older records were persisted without a status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
}

impl Maintenance {
    /// Effective status: a missing status means Scheduled.
    pub fn status(&self) -> MaintenanceStatus {
        self.status.unwrap_or(MaintenanceStatus::Scheduled)
    }
}

/// Create maintenance request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenance {
    #[validate(length(min = 1, message = "equipmentId is required"))]
    pub equipment_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    #[validate(length(min = 1, message = "notes are required"))]
    pub notes: String,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub completed_by: Option<String>,
    #[serde(default)]
    pub status: Option<MaintenanceStatus>,
}

/// Update maintenance request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenance {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceType>,
    #[validate(length(min = 1, message = "notes must not be empty"))]
    pub notes: Option<String>,
    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    pub cost: Option<f64>,
    pub completed_by: Option<String>,
    pub status: Option<MaintenanceStatus>,
}

impl Maintenance {
    /// Apply a partial update in place.
    pub fn apply(&mut self, updates: &UpdateMaintenance) {
        if let Some(date) = updates.date {
            self.date = date;
        }
        if let Some(kind) = updates.kind {
            self.kind = kind;
        }
        if let Some(ref notes) = updates.notes {
            self.notes = notes.clone();
        }
        if let Some(cost) = updates.cost {
            self.cost = Some(cost);
        }
        if let Some(ref completed_by) = updates.completed_by {
            self.completed_by = Some(completed_by.clone());
        }
        if let Some(status) = updates.status {
            self.status = Some(status);
        }
    }
}
