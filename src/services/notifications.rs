//! Notification log service

use crate::{
    clock::Clock,
    error::AppResult,
    models::{enums::NotificationKind, notification::Notification},
    store::Store,
};

#[derive(Clone)]
pub struct NotificationsService {
    store: Store,
    clock: Clock,
}

impl NotificationsService {
    pub fn new(store: Store, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// All notifications, newest first.
    pub async fn list(&self) -> AppResult<Vec<Notification>> {
        self.store.notifications.list().await
    }

    pub async fn unread_count(&self) -> AppResult<usize> {
        Ok(self.list().await?.iter().filter(|n| !n.read).count())
    }

    /// Append an entry. Called from other services while the write lock is
    /// held, so it does not take the lock itself.
    pub(crate) async fn push(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> AppResult<()> {
        self.store
            .notifications
            .push(Notification::new(kind, title, message, self.clock.now()))
            .await
    }

    pub async fn mark_read(&self, id: &str) -> AppResult<bool> {
        let _guard = self.store.write_guard().await;
        let mut notifications = self.store.notifications.list().await?;
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        notification.read = true;
        self.store.notifications.save_all(&notifications).await?;
        Ok(true)
    }

    pub async fn mark_all_read(&self) -> AppResult<()> {
        let _guard = self.store.write_guard().await;
        let mut notifications = self.store.notifications.list().await?;
        for notification in &mut notifications {
            notification.read = true;
        }
        self.store.notifications.save_all(&notifications).await
    }

    pub async fn dismiss(&self, id: &str) -> AppResult<bool> {
        let _guard = self.store.write_guard().await;
        self.store.notifications.remove(id).await
    }

    pub async fn clear(&self) -> AppResult<()> {
        let _guard = self.store.write_guard().await;
        self.store.notifications.save_all(&[]).await
    }
}
