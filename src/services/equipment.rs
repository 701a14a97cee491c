//! Equipment inventory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, MaintenanceStatus, NotificationKind},
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
        prefixed_id,
    },
    services::notifications::NotificationsService,
    store::Store,
};

#[derive(Clone)]
pub struct EquipmentService {
    store: Store,
    notifications: NotificationsService,
}

impl EquipmentService {
    pub fn new(store: Store, notifications: NotificationsService) -> Self {
        Self {
            store,
            notifications,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.store.equipment.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.store
            .equipment
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", id)))
    }

    pub async fn by_status(&self, status: EquipmentStatus) -> AppResult<Vec<Equipment>> {
        self.store.equipment.by_status(status).await
    }

    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        let _guard = self.store.write_guard().await;
        let equipment = Equipment {
            id: prefixed_id("eq"),
            name: data.name,
            category: data.category,
            condition: data.condition,
            status: data.status,
            description: data.description,
            image_url: data.image_url,
            daily_rate: data.daily_rate,
            purchase_date: data.purchase_date,
        };
        self.store.equipment.insert(equipment.clone()).await?;

        self.notifications
            .push(
                NotificationKind::Success,
                "Equipment Added",
                format!("{} has been added to inventory", equipment.name),
            )
            .await?;

        Ok(equipment)
    }

    pub async fn update(&self, id: &str, updates: UpdateEquipment) -> AppResult<Equipment> {
        updates.validate()?;

        let _guard = self.store.write_guard().await;
        let mut equipment = self
            .store
            .equipment
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment with id {} not found", id)))?;
        equipment.apply(&updates);
        self.store.equipment.replace(equipment.clone()).await?;

        self.notifications
            .push(
                NotificationKind::Info,
                "Equipment Updated",
                format!("Equipment ID: {} has been updated", id),
            )
            .await?;

        Ok(equipment)
    }

    /// Delete an equipment item. Rejected while an active rental or an
    /// in-progress maintenance record still references it; rejection is a
    /// normal outcome reported through the return flag and a notification.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let _guard = self.store.write_guard().await;

        let active_rentals = self.store.rentals.active_for_equipment(id).await?;
        if !active_rentals.is_empty() {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Cannot Delete Equipment",
                    "This equipment has active rentals and cannot be deleted",
                )
                .await?;
            return Ok(false);
        }

        let in_progress = self
            .store
            .maintenance
            .by_equipment(id)
            .await?
            .into_iter()
            .any(|m| m.status() == MaintenanceStatus::InProgress);
        if in_progress {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Cannot Delete Equipment",
                    "This equipment is under maintenance and cannot be deleted",
                )
                .await?;
            return Ok(false);
        }

        let Some(equipment) = self.store.equipment.get(id).await? else {
            return Ok(false);
        };
        self.store.equipment.remove(id).await?;

        self.notifications
            .push(
                NotificationKind::Warning,
                "Equipment Deleted",
                format!("{} has been removed from inventory", equipment.name),
            )
            .await?;

        Ok(true)
    }
}
