//! Rental model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::enums::RentalStatus;

/// Rental record. The date range [startDate, endDate] is inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub equipment_id: String,
    pub customer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RentalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Derived: dailyRate x inclusive day count, when the rate is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

/// Create rental (booking) request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_rental"))]
pub struct CreateRental {
    #[validate(length(min = 1, message = "equipmentId is required"))]
    pub equipment_id: String,
    #[validate(length(min = 1, message = "customerId is required"))]
    pub customer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Initial status of the booking: Reserved or Rented
    #[serde(default = "default_status")]
    pub status: RentalStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_status() -> RentalStatus {
    RentalStatus::Reserved
}

fn validate_create_rental(rental: &CreateRental) -> Result<(), ValidationError> {
    if rental.end_date < rental.start_date {
        return Err(ValidationError::new("end_date_before_start_date"));
    }
    if !matches!(rental.status, RentalStatus::Reserved | RentalStatus::Rented) {
        return Err(ValidationError::new("invalid_initial_status"));
    }
    Ok(())
}

/// Update rental request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_rental"))]
pub struct UpdateRental {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<RentalStatus>,
    pub notes: Option<String>,
}

fn validate_update_rental(updates: &UpdateRental) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (updates.start_date, updates.end_date) {
        if end < start {
            return Err(ValidationError::new("end_date_before_start_date"));
        }
    }
    Ok(())
}

impl Rental {
    /// Apply a partial update in place. The caller is responsible for
    /// reconciling equipment status and recomputing the total cost.
    pub fn apply(&mut self, updates: &UpdateRental) {
        if let Some(start_date) = updates.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = updates.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(ref notes) = updates.notes {
            self.notes = Some(notes.clone());
        }
    }
}
