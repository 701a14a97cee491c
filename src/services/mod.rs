//! Business logic services

pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod reconcile;
pub mod rentals;
pub mod rules;
pub mod stats;
pub mod sweep;
pub mod users;

use crate::{clock::Clock, store::Store};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub equipment: equipment::EquipmentService,
    pub rentals: rentals::RentalsService,
    pub maintenance: maintenance::MaintenanceService,
    pub notifications: notifications::NotificationsService,
    pub sweep: sweep::SweepService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the given store and clock
    pub fn new(store: Store, clock: Clock) -> Self {
        let notifications = notifications::NotificationsService::new(store.clone(), clock.clone());
        let reconcile = reconcile::ReconcileService::new(store.clone(), clock.clone());
        Self {
            users: users::UsersService::new(store.clone()),
            equipment: equipment::EquipmentService::new(store.clone(), notifications.clone()),
            rentals: rentals::RentalsService::new(
                store.clone(),
                reconcile.clone(),
                notifications.clone(),
            ),
            maintenance: maintenance::MaintenanceService::new(
                store.clone(),
                reconcile.clone(),
                notifications.clone(),
                clock.clone(),
            ),
            sweep: sweep::SweepService::new(
                store.clone(),
                reconcile,
                notifications.clone(),
                clock.clone(),
            ),
            stats: stats::StatsService::new(store, clock),
            notifications,
        }
    }
}
