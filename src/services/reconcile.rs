//! Equipment status reconciliation
//!
//! The single authoritative writer of the derived `Equipment.status` field.
//! Both the rental and the maintenance mutation paths (and the overdue
//! sweep) go through this service, so the precedence between the two claim
//! sources is decided in one place: a rental release only frees the
//! equipment when no maintenance record currently claims it, and
//! maintenance never takes over equipment that is not Available.
//!
//! All methods are called with the store's write lock already held.

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    error::AppResult,
    models::{
        enums::{EquipmentStatus, MaintenanceStatus, NotificationKind, RentalStatus},
        maintenance::Maintenance,
        notification::Notification,
    },
    services::rules,
    store::Store,
};

#[derive(Clone)]
pub struct ReconcileService {
    store: Store,
    clock: Clock,
}

impl ReconcileService {
    pub fn new(store: Store, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Apply the equipment status implied by a rental status transition.
    /// No-op when the status did not change. Otherwise performs exactly one
    /// equipment write and appends one notification describing it.
    pub async fn on_rental_transition(
        &self,
        equipment_id: &str,
        old_status: Option<RentalStatus>,
        new_status: RentalStatus,
    ) -> AppResult<()> {
        if old_status == Some(new_status) {
            return Ok(());
        }

        let mut target = rules::equipment_status_for_rental(new_status);
        if target == EquipmentStatus::Available {
            // The equipment may still be held by a maintenance claim.
            let maintenance = self.store.maintenance.by_equipment(equipment_id).await?;
            if rules::active_maintenance_claim(&maintenance, equipment_id, self.today()) {
                target = EquipmentStatus::Maintenance;
            }
        }

        self.write_status(equipment_id, target).await
    }

    /// Apply the equipment effect of creating a maintenance record: a record
    /// dated today that is not yet completed takes Available equipment into
    /// Maintenance. Anything else leaves the equipment alone.
    pub async fn on_maintenance_created(&self, record: &Maintenance) -> AppResult<()> {
        if record.date != self.today() || record.status() == MaintenanceStatus::Completed {
            return Ok(());
        }
        let Some(equipment) = self.store.equipment.get(&record.equipment_id).await? else {
            return Ok(());
        };
        if equipment.status != EquipmentStatus::Available {
            return Ok(());
        }
        self.write_status(&record.equipment_id, EquipmentStatus::Maintenance)
            .await
    }

    /// Apply the equipment effect of a maintenance status transition: moving
    /// into Completed releases equipment held in Maintenance back to
    /// Available. All other transitions are no-ops for the equipment.
    pub async fn on_maintenance_transition(
        &self,
        equipment_id: &str,
        old_status: MaintenanceStatus,
        new_status: MaintenanceStatus,
    ) -> AppResult<()> {
        if new_status != MaintenanceStatus::Completed || old_status == MaintenanceStatus::Completed
        {
            return Ok(());
        }
        let Some(equipment) = self.store.equipment.get(equipment_id).await? else {
            return Ok(());
        };
        if equipment.status != EquipmentStatus::Maintenance {
            return Ok(());
        }
        self.write_status(equipment_id, EquipmentStatus::Available)
            .await
    }

    async fn write_status(&self, equipment_id: &str, status: EquipmentStatus) -> AppResult<()> {
        match self.store.equipment.set_status(equipment_id, status).await? {
            Some(equipment) => {
                tracing::debug!(
                    equipment_id,
                    status = %status,
                    "reconciled equipment status"
                );
                self.store
                    .notifications
                    .push(Notification::new(
                        NotificationKind::Info,
                        "Equipment Updated",
                        format!("{} is now {}", equipment.name, status.to_string().to_lowercase()),
                        self.clock.now(),
                    ))
                    .await
            }
            None => {
                // Dangling reference; nothing to reconcile.
                tracing::warn!(equipment_id, "reconciliation target no longer exists");
                Ok(())
            }
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
