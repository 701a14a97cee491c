//! Maintenance collection

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::maintenance::Maintenance,
    store::collection::{Collection, Record},
};

impl Record for Maintenance {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct MaintenanceStore {
    collection: Collection<Maintenance>,
}

impl MaintenanceStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            collection: Collection::new(pool, super::MAINTENANCE),
        }
    }

    pub fn collection(&self) -> &Collection<Maintenance> {
        &self.collection
    }

    pub async fn list(&self) -> AppResult<Vec<Maintenance>> {
        self.collection.load().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Maintenance>> {
        self.collection.get(id).await
    }

    pub async fn by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Maintenance>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|m| m.equipment_id == equipment_id)
            .collect())
    }

    pub async fn insert(&self, record: Maintenance) -> AppResult<()> {
        self.collection.insert(record).await
    }

    pub async fn replace(&self, record: Maintenance) -> AppResult<bool> {
        self.collection.replace(record).await
    }

    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        self.collection.remove(id).await
    }
}
