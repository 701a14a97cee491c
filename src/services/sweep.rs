//! Overdue sweep
//!
//! Periodic idempotent scan promoting Rented rentals whose end date has
//! passed to Overdue. Already-Overdue rentals are not matched by the
//! Rented-status filter, so re-running without intervening mutations is a
//! no-op. There is no catch-up for intervals missed while the process was
//! not running.

use std::time::Duration;

use chrono::NaiveDate;

use crate::{
    clock::Clock,
    error::AppResult,
    models::enums::{NotificationKind, RentalStatus},
    services::{notifications::NotificationsService, reconcile::ReconcileService, rules},
    store::Store,
};

#[derive(Clone)]
pub struct SweepService {
    store: Store,
    reconcile: ReconcileService,
    notifications: NotificationsService,
    clock: Clock,
}

impl SweepService {
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

    /// One sweep pass for the given date. Returns the ids of the rentals
    /// transitioned to Overdue.
    pub async fn sweep_overdue(&self, today: NaiveDate) -> AppResult<Vec<String>> {
        let _guard = self.store.write_guard().await;

        let mut rentals = self.store.rentals.list().await?;
        let mut transitioned = Vec::new();
        for rental in &mut rentals {
            if rules::is_overdue(rental, today) {
                rental.status = RentalStatus::Overdue;
                transitioned.push((rental.id.clone(), rental.equipment_id.clone()));
            }
        }

        if transitioned.is_empty() {
            return Ok(Vec::new());
        }

        self.store.rentals.save_all(&rentals).await?;

        let mut ids = Vec::with_capacity(transitioned.len());
        for (rental_id, equipment_id) in transitioned {
            self.reconcile
                .on_rental_transition(&equipment_id, Some(RentalStatus::Rented), RentalStatus::Overdue)
                .await?;
            self.notifications
                .push(
                    NotificationKind::Warning,
                    "Rental Overdue",
                    format!("Rental ID: {} is now overdue", rental_id),
                )
                .await?;
            ids.push(rental_id);
        }

        tracing::info!(count = ids.len(), "overdue sweep transitioned rentals");
        Ok(ids)
    }

    /// Run one sweep immediately, then one per interval, forever.
    pub async fn run(&self, interval: Duration) -> AppResult<()> {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(e) = self.sweep_overdue(self.clock.today()).await {
                tracing::error!(error = %e, "overdue sweep failed");
            }
        }
    }
}
