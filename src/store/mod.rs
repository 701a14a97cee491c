//! Record store: serialized collections in a sqlite key-value table
//!
//! Each collection persists as one JSON array under a stable key, so it
//! can read data sets written by earlier tooling. Mutating operations
//! are read-modify-write over a whole collection, so every mutating service
//! entry point serializes on the store's write lock; there is exactly one
//! logical writer at a time.

pub mod collection;
pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod rentals;
pub mod users;

use std::sync::Arc;

use sqlx::{Pool, Sqlite};
use tokio::sync::{Mutex, MutexGuard};

/// Stable collection keys
pub const USERS: &str = "users";
pub const EQUIPMENT: &str = "equipment";
pub const RENTALS: &str = "rentals";
pub const MAINTENANCE: &str = "maintenance";
pub const NOTIFICATIONS: &str = "notifications";

/// Main store struct holding the database pool and the typed collections
#[derive(Clone)]
pub struct Store {
    pub pool: Pool<Sqlite>,
    pub users: users::UsersStore,
    pub equipment: equipment::EquipmentStore,
    pub rentals: rentals::RentalsStore,
    pub maintenance: maintenance::MaintenanceStore,
    pub notifications: notifications::NotificationsStore,
    write_lock: Arc<Mutex<()>>,
}

impl Store {
    /// Create a new store over the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            users: users::UsersStore::new(pool.clone()),
            equipment: equipment::EquipmentStore::new(pool.clone()),
            rentals: rentals::RentalsStore::new(pool.clone()),
            maintenance: maintenance::MaintenanceStore::new(pool.clone()),
            notifications: notifications::NotificationsStore::new(pool.clone()),
            write_lock: Arc::new(Mutex::new(())),
            pool,
        }
    }

    /// Acquire the single-writer lock. Held for the duration of one mutating
    /// service operation; internal helpers called under it must not acquire
    /// it again.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
