//! Notifications collection

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::notification::Notification,
    store::collection::{Collection, Record},
};

/// The log keeps only the most recent entries.
pub const MAX_NOTIFICATIONS: usize = 50;

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct NotificationsStore {
    collection: Collection<Notification>,
}

impl NotificationsStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            collection: Collection::new(pool, super::NOTIFICATIONS),
        }
    }

    pub fn collection(&self) -> &Collection<Notification> {
        &self.collection
    }

    /// Newest first.
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.collection.load().await
    }

    /// Prepend an entry and drop everything past the cap.
    pub async fn push(&self, notification: Notification) -> AppResult<()> {
        let mut notifications = self.collection.load().await?;
        notifications.insert(0, notification);
        notifications.truncate(MAX_NOTIFICATIONS);
        self.collection.save(&notifications).await
    }

    pub async fn save_all(&self, notifications: &[Notification]) -> AppResult<()> {
        self.collection.save(notifications).await
    }

    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        self.collection.remove(id).await
    }
}
