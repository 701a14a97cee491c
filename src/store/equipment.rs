//! Equipment collection

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::{
        enums::EquipmentStatus,
        equipment::Equipment,
    },
    store::collection::{Collection, Record},
};

impl Record for Equipment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct EquipmentStore {
    collection: Collection<Equipment>,
}

impl EquipmentStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            collection: Collection::new(pool, super::EQUIPMENT),
        }
    }

    pub fn collection(&self) -> &Collection<Equipment> {
        &self.collection
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.collection.load().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Equipment>> {
        self.collection.get(id).await
    }

    pub async fn by_status(&self, status: EquipmentStatus) -> AppResult<Vec<Equipment>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|e| e.status == status)
            .collect())
    }

    pub async fn insert(&self, equipment: Equipment) -> AppResult<()> {
        self.collection.insert(equipment).await
    }

    pub async fn replace(&self, equipment: Equipment) -> AppResult<bool> {
        self.collection.replace(equipment).await
    }

    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        self.collection.remove(id).await
    }

    /// Write the derived status field. Returns the updated record, or None
    /// when the equipment no longer exists.
    pub async fn set_status(
        &self,
        id: &str,
        status: EquipmentStatus,
    ) -> AppResult<Option<Equipment>> {
        let Some(mut equipment) = self.get(id).await? else {
            return Ok(None);
        };
        equipment.status = status;
        self.collection.replace(equipment.clone()).await?;
        Ok(Some(equipment))
    }
}
