//! Maintenance record service

use validator::Validate;

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{
        enums::{MaintenanceStatus, NotificationKind},
        maintenance::{CreateMaintenance, Maintenance, UpdateMaintenance},
        prefixed_id,
    },
    services::{notifications::NotificationsService, reconcile::ReconcileService},
    store::Store,
};

#[derive(Clone)]
pub struct MaintenanceService {
    store: Store,
    reconcile: ReconcileService,
    notifications: NotificationsService,
    clock: Clock,
}

impl MaintenanceService {
    pub fn new(
        store: Store,
        reconcile: ReconcileService,
        notifications: NotificationsService,
        clock: Clock,
    ) -> Self {
        Self {
            store,
            reconcile,
            notifications,
            clock,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Maintenance>> {
        self.store.maintenance.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Maintenance> {
        self.store
            .maintenance
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance with id {} not found", id)))
    }

    pub async fn by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Maintenance>> {
        self.store.maintenance.by_equipment(equipment_id).await
    }

    /// Records dated today or later that are still Scheduled.
    pub async fn upcoming(&self) -> AppResult<Vec<Maintenance>> {
        let today = self.clock.today();
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|m| m.date >= today && m.status() == MaintenanceStatus::Scheduled)
            .collect())
    }

    /// Schedule maintenance. A record dated today that is not already
    /// completed pulls Available equipment into Maintenance status.
    pub async fn create(&self, data: CreateMaintenance) -> AppResult<Maintenance> {
        data.validate()?;

        let _guard = self.store.write_guard().await;
        let record = Maintenance {
            id: prefixed_id("m"),
            equipment_id: data.equipment_id,
            date: data.date,
            kind: data.kind,
            notes: data.notes,
            cost: data.cost,
            completed_by: data.completed_by,
            status: Some(data.status.unwrap_or(MaintenanceStatus::Scheduled)),
        };
        self.store.maintenance.insert(record.clone()).await?;

        self.reconcile.on_maintenance_created(&record).await?;

        self.notifications
            .push(
                NotificationKind::Info,
                "Maintenance Scheduled",
                format!(
                    "New maintenance record created for equipment {}",
                    record.equipment_id
                ),
            )
            .await?;

        Ok(record)
    }

    /// Update a record. A transition into Completed releases equipment held
    /// in Maintenance status back to Available.
    pub async fn update(&self, id: &str, updates: UpdateMaintenance) -> AppResult<bool> {
        updates.validate()?;

        let _guard = self.store.write_guard().await;

        let Some(current) = self.store.maintenance.get(id).await? else {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Update Failed",
                    "Maintenance record not found",
                )
                .await?;
            return Ok(false);
        };

        let mut record = current.clone();
        record.apply(&updates);
        self.store.maintenance.replace(record.clone()).await?;

        self.reconcile
            .on_maintenance_transition(&record.equipment_id, current.status(), record.status())
            .await?;

        if record.status() == MaintenanceStatus::Completed
            && current.status() != MaintenanceStatus::Completed
        {
            self.notifications
                .push(
                    NotificationKind::Success,
                    "Maintenance Completed",
                    format!(
                        "Maintenance for equipment {} has been completed",
                        record.equipment_id
                    ),
                )
                .await?;
        } else {
            self.notifications
                .push(
                    NotificationKind::Info,
                    "Maintenance Updated",
                    format!("Maintenance record {} has been updated", id),
                )
                .await?;
        }

        Ok(true)
    }

    /// Delete a record. In-progress maintenance cannot be deleted.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let _guard = self.store.write_guard().await;

        let Some(record) = self.store.maintenance.get(id).await? else {
            return Ok(false);
        };

        if record.status() == MaintenanceStatus::InProgress {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Cannot Delete",
                    "In-progress maintenance cannot be deleted",
                )
                .await?;
            return Ok(false);
        }

        self.store.maintenance.remove(id).await?;

        self.notifications
            .push(
                NotificationKind::Warning,
                "Maintenance Deleted",
                format!("Maintenance record {} has been deleted", id),
            )
            .await?;

        Ok(true)
    }
}
