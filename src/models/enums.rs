//! Shared domain enums (serialized as their persisted label strings)

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCondition
// ---------------------------------------------------------------------------

/// Physical condition of an equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for EquipmentCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCondition::Excellent => "Excellent",
            EquipmentCondition::Good => "Good",
            EquipmentCondition::Fair => "Fair",
            EquipmentCondition::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment status. Derived data: it mirrors the most recent rental or
/// maintenance transition for the item and is only written through the
/// reconciliation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    Rented,
    Maintenance,
    Reserved,
}

impl EquipmentStatus {
    /// Whether a new booking may target equipment in this status.
    pub fn is_bookable(self) -> bool {
        matches!(self, EquipmentStatus::Available | EquipmentStatus::Reserved)
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Rented => "Rented",
            EquipmentStatus::Maintenance => "Maintenance",
            EquipmentStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RentalStatus
// ---------------------------------------------------------------------------

/// Rental lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Reserved,
    Rented,
    Returned,
    Cancelled,
    Overdue,
}

impl RentalStatus {
    /// Active rentals hold the equipment and participate in conflict checks.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            RentalStatus::Reserved | RentalStatus::Rented | RentalStatus::Overdue
        )
    }

    /// Terminal statuses: the only ones a rental may be deleted in.
    pub fn is_terminal(self) -> bool {
        matches!(self, RentalStatus::Returned | RentalStatus::Cancelled)
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RentalStatus::Reserved => "Reserved",
            RentalStatus::Rented => "Rented",
            RentalStatus::Returned => "Returned",
            RentalStatus::Cancelled => "Cancelled",
            RentalStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Kind of maintenance work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceType {
    #[serde(rename = "Routine Check")]
    RoutineCheck,
    Repair,
    Replacement,
    Cleaning,
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::RoutineCheck => "Routine Check",
            MaintenanceType::Repair => "Repair",
            MaintenanceType::Replacement => "Replacement",
            MaintenanceType::Cleaning => "Cleaning",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Maintenance record status. Records persisted without a status are
/// treated as Scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        };
        write!(f, "{}", label)
    }
}
