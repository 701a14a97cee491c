//! Dashboard statistics service

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    clock::Clock,
    error::AppResult,
    models::enums::{EquipmentStatus, MaintenanceStatus, RentalStatus},
    store::Store,
};

/// Dashboard KPI figures
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_equipment: usize,
    pub available_equipment: usize,
    pub rented_equipment: usize,
    pub maintenance_equipment: usize,
    /// Share of the inventory currently available, as a whole percentage
    pub availability_rate: u32,
    pub active_rentals: usize,
    pub overdue_rentals: usize,
    pub upcoming_maintenance: usize,
    /// Distinct customers with a Reserved or Rented rental
    pub active_customers: usize,
}

#[derive(Clone)]
pub struct StatsService {
    store: Store,
    clock: Clock,
}

impl StatsService {
    pub fn new(store: Store, clock: Clock) -> Self {
        Self { store, clock }
    }

    pub async fn dashboard(&self) -> AppResult<DashboardStats> {
        let equipment = self.store.equipment.list().await?;
        let rentals = self.store.rentals.list().await?;
        let maintenance = self.store.maintenance.list().await?;
        let today = self.clock.today();

        let total_equipment = equipment.len();
        let available_equipment = equipment
            .iter()
            .filter(|e| e.status == EquipmentStatus::Available)
            .count();
        let rented_equipment = equipment
            .iter()
            .filter(|e| e.status == EquipmentStatus::Rented)
            .count();
        let maintenance_equipment = equipment
            .iter()
            .filter(|e| e.status == EquipmentStatus::Maintenance)
            .count();
        let availability_rate = if total_equipment > 0 {
            ((available_equipment as f64 / total_equipment as f64) * 100.0).round() as u32
        } else {
            0
        };

        let active_rentals = rentals.iter().filter(|r| r.status.is_active()).count();
        let overdue_rentals = rentals
            .iter()
            .filter(|r| r.status == RentalStatus::Overdue)
            .count();

        let upcoming_maintenance = maintenance
            .iter()
            .filter(|m| m.date >= today && m.status() == MaintenanceStatus::Scheduled)
            .count();

        let active_customers = rentals
            .iter()
            .filter(|r| matches!(r.status, RentalStatus::Rented | RentalStatus::Reserved))
            .map(|r| r.customer_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        Ok(DashboardStats {
            total_equipment,
            available_equipment,
            rented_equipment,
            maintenance_equipment,
            availability_rate,
            active_rentals,
            overdue_rentals,
            upcoming_maintenance,
            active_customers,
        })
    }
}
