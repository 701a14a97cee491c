//! Status-consistency and booking-conflict rules
//!
//! Pure functions over constructed records: the reconciliation mapping from
//! rental/maintenance transitions to equipment status, the inclusive
//! date-range conflict check, the overdue predicate, and cost derivation.
//! The impure application of these rules lives in the reconcile service.

use chrono::NaiveDate;

use crate::models::{
    enums::{EquipmentStatus, MaintenanceStatus, RentalStatus},
    maintenance::Maintenance,
    rental::Rental,
};

/// Equipment status implied by a rental status. Overdue rentals still hold
/// the equipment, so they map to Rented.
pub fn equipment_status_for_rental(status: RentalStatus) -> EquipmentStatus {
    match status {
        RentalStatus::Reserved => EquipmentStatus::Reserved,
        RentalStatus::Rented => EquipmentStatus::Rented,
        RentalStatus::Returned | RentalStatus::Cancelled => EquipmentStatus::Available,
        RentalStatus::Overdue => EquipmentStatus::Rented,
    }
}

/// Inclusive-bounds overlap test: a rental ending on day X conflicts with
/// one starting on day X.
pub fn ranges_overlap(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 <= e2 && e1 >= s2
}

/// First active rental for the equipment whose date range overlaps the
/// proposed [start, end]. Cancelled and Returned rentals are ignored, as is
/// the rental being edited when `exclude_id` is given.
pub fn find_conflict<'a>(
    rentals: &'a [Rental],
    equipment_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<&str>,
) -> Option<&'a Rental> {
    rentals.iter().find(|r| {
        r.equipment_id == equipment_id
            && r.status.is_active()
            && exclude_id != Some(r.id.as_str())
            && ranges_overlap(r.start_date, r.end_date, start, end)
    })
}

pub fn has_conflict(
    rentals: &[Rental],
    equipment_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    exclude_id: Option<&str>,
) -> bool {
    find_conflict(rentals, equipment_id, start, end, exclude_id).is_some()
}

/// Whether a maintenance record currently claims the equipment: status
/// Scheduled or In Progress, dated today or earlier. A rental release only
/// returns the equipment to Available when no such claim exists.
pub fn active_maintenance_claim(
    records: &[Maintenance],
    equipment_id: &str,
    today: NaiveDate,
) -> bool {
    records.iter().any(|m| {
        m.equipment_id == equipment_id
            && m.status() != MaintenanceStatus::Completed
            && m.date <= today
    })
}

/// A Rented rental whose end date has passed is due for the overdue sweep.
pub fn is_overdue(rental: &Rental, today: NaiveDate) -> bool {
    rental.status == RentalStatus::Rented && rental.end_date < today
}

/// Day count of an inclusive [start, end] range.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}

/// Derived rental cost: daily rate times the inclusive day count.
pub fn rental_total_cost(daily_rate: f64, start: NaiveDate, end: NaiveDate) -> f64 {
    daily_rate * inclusive_days(start, end) as f64
}
