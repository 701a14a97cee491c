//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::{EquipmentCondition, EquipmentStatus};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    /// Free-text category, e.g. "Heavy Machinery"
    pub category: String,
    pub condition: EquipmentCondition,
    /// Derived field, written only through the reconciliation rules
    pub status: EquipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    pub condition: EquipmentCondition,
    #[serde(default = "default_status")]
    pub status: EquipmentStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    #[serde(default)]
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, message = "dailyRate must not be negative"))]
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
}

fn default_status() -> EquipmentStatus {
    EquipmentStatus::Available
}

/// Update equipment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    pub condition: Option<EquipmentCondition>,
    pub status: Option<EquipmentStatus>,
    pub description: Option<String>,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: Option<String>,
    #[validate(range(min = 0.0, message = "dailyRate must not be negative"))]
    pub daily_rate: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
}

impl Equipment {
    /// Apply a partial update in place.
    pub fn apply(&mut self, updates: &UpdateEquipment) {
        if let Some(ref name) = updates.name {
            self.name = name.clone();
        }
        if let Some(ref category) = updates.category {
            self.category = category.clone();
        }
        if let Some(condition) = updates.condition {
            self.condition = condition;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(ref description) = updates.description {
            self.description = Some(description.clone());
        }
        if let Some(ref image_url) = updates.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(daily_rate) = updates.daily_rate {
            self.daily_rate = Some(daily_rate);
        }
        if let Some(purchase_date) = updates.purchase_date {
            self.purchase_date = Some(purchase_date);
        }
    }
}
