//! Rental booking and lifecycle service

use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{NotificationKind, RentalStatus},
        prefixed_id,
        rental::{CreateRental, Rental, UpdateRental},
    },
    services::{notifications::NotificationsService, reconcile::ReconcileService, rules},
    store::Store,
};

#[derive(Clone)]
pub struct RentalsService {
    store: Store,
    reconcile: ReconcileService,
    notifications: NotificationsService,
}

impl RentalsService {
    pub fn new(
        store: Store,
        reconcile: ReconcileService,
        notifications: NotificationsService,
    ) -> Self {
        Self {
            store,
            reconcile,
            notifications,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Rental>> {
        self.store.rentals.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Rental> {
        self.store
            .rentals
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental with id {} not found", id)))
    }

    pub async fn by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Rental>> {
        self.store.rentals.by_equipment(equipment_id).await
    }

    pub async fn by_customer(&self, customer_id: &str) -> AppResult<Vec<Rental>> {
        self.store.rentals.by_customer(customer_id).await
    }

    pub async fn by_status(&self, status: RentalStatus) -> AppResult<Vec<Rental>> {
        self.store.rentals.by_status(status).await
    }

    pub async fn overdue(&self) -> AppResult<Vec<Rental>> {
        self.by_status(RentalStatus::Overdue).await
    }

    /// Book equipment. Validation failures are errors; business-rule
    /// rejections (unknown or unavailable equipment, date conflict) return
    /// Ok(None) with an explanatory notification and leave the collection
    /// unchanged. On success the total cost is derived from the equipment's
    /// daily rate and the equipment status is reconciled.
    pub async fn create(&self, data: CreateRental) -> AppResult<Option<Rental>> {
        data.validate()?;

        let _guard = self.store.write_guard().await;

        let Some(equipment) = self.store.equipment.get(&data.equipment_id).await? else {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Error Creating Rental",
                    "Equipment not found",
                )
                .await?;
            return Ok(None);
        };

        // Eligibility comes before the date scan: equipment already out or
        // in the workshop rejects regardless of the requested range.
        if !equipment.status.is_bookable() {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Equipment Unavailable",
                    format!(
                        "This {} is currently {}",
                        equipment.name,
                        equipment.status.to_string().to_lowercase()
                    ),
                )
                .await?;
            return Ok(None);
        }

        let rentals = self.store.rentals.list().await?;
        if rules::has_conflict(
            &rentals,
            &data.equipment_id,
            data.start_date,
            data.end_date,
            None,
        ) {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Date Conflict",
                    "This equipment is already booked for the selected dates",
                )
                .await?;
            return Ok(None);
        }

        let total_cost = equipment
            .daily_rate
            .map(|rate| rules::rental_total_cost(rate, data.start_date, data.end_date));

        let rental = Rental {
            id: prefixed_id("r"),
            equipment_id: data.equipment_id,
            customer_id: data.customer_id,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            notes: data.notes,
            total_cost,
        };
        self.store.rentals.insert(rental.clone()).await?;

        self.reconcile
            .on_rental_transition(&rental.equipment_id, None, rental.status)
            .await?;

        self.notifications
            .push(
                NotificationKind::Success,
                "Rental Created",
                "New rental has been created successfully",
            )
            .await?;

        Ok(Some(rental))
    }

    /// Update a rental. A status change drives equipment reconciliation; a
    /// date change or a return to an active status re-runs the conflict
    /// check (excluding this rental), and a date change re-derives the
    /// total cost.
    pub async fn update(&self, id: &str, updates: UpdateRental) -> AppResult<bool> {
        updates.validate()?;

        let _guard = self.store.write_guard().await;

        let Some(current) = self.store.rentals.get(id).await? else {
            self.notifications
                .push(NotificationKind::Error, "Update Failed", "Rental not found")
                .await?;
            return Ok(false);
        };

        let mut rental = current.clone();
        rental.apply(&updates);

        // The payload check cannot see the stored dates, so a one-sided
        // date change can invert the merged range.
        if rental.end_date < rental.start_date {
            let mut errors = ValidationErrors::new();
            errors.add("endDate", ValidationError::new("end_date_before_start_date"));
            return Err(errors.into());
        }

        let dates_changed =
            rental.start_date != current.start_date || rental.end_date != current.end_date;
        // A terminal rental coming back to life re-enters the date scan.
        let reactivated = current.status.is_terminal() && rental.status.is_active();

        if (dates_changed || reactivated) && rental.status.is_active() {
            let rentals = self.store.rentals.list().await?;
            if rules::has_conflict(
                &rentals,
                &rental.equipment_id,
                rental.start_date,
                rental.end_date,
                Some(id),
            ) {
                self.notifications
                    .push(
                        NotificationKind::Error,
                        "Date Conflict",
                        "This equipment is already booked for the selected dates",
                    )
                    .await?;
                return Ok(false);
            }
        }

        if dates_changed {
            if let Some(equipment) = self.store.equipment.get(&rental.equipment_id).await? {
                rental.total_cost = equipment
                    .daily_rate
                    .map(|rate| rules::rental_total_cost(rate, rental.start_date, rental.end_date));
            }
        }

        self.store.rentals.replace(rental.clone()).await?;

        self.reconcile
            .on_rental_transition(&rental.equipment_id, Some(current.status), rental.status)
            .await?;

        self.notifications
            .push(
                NotificationKind::Info,
                "Rental Updated",
                format!("Rental ID: {} has been updated", id),
            )
            .await?;

        Ok(true)
    }

    pub async fn update_status(&self, id: &str, status: RentalStatus) -> AppResult<bool> {
        self.update(
            id,
            UpdateRental {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    /// Delete a rental. Only terminal rentals (Returned, Cancelled) may be
    /// deleted; active ones are rejected with a notification.
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let _guard = self.store.write_guard().await;

        let Some(rental) = self.store.rentals.get(id).await? else {
            self.notifications
                .push(NotificationKind::Error, "Delete Failed", "Rental not found")
                .await?;
            return Ok(false);
        };

        if !rental.status.is_terminal() {
            self.notifications
                .push(
                    NotificationKind::Error,
                    "Cannot Delete Rental",
                    "Active rentals cannot be deleted",
                )
                .await?;
            return Ok(false);
        }

        self.store.rentals.remove(id).await?;

        self.notifications
            .push(
                NotificationKind::Warning,
                "Rental Deleted",
                format!("Rental ID: {} has been deleted", id),
            )
            .await?;

        Ok(true)
    }
}
