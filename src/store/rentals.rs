//! Rentals collection

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::{
        enums::RentalStatus,
        rental::Rental,
    },
    store::collection::{Collection, Record},
};

impl Record for Rental {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct RentalsStore {
    collection: Collection<Rental>,
}

impl RentalsStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            collection: Collection::new(pool, super::RENTALS),
        }
    }

    pub fn collection(&self) -> &Collection<Rental> {
        &self.collection
    }

    pub async fn list(&self) -> AppResult<Vec<Rental>> {
        self.collection.load().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Rental>> {
        self.collection.get(id).await
    }

    pub async fn by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.equipment_id == equipment_id)
            .collect())
    }

    pub async fn by_customer(&self, customer_id: &str) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.customer_id == customer_id)
            .collect())
    }

    pub async fn by_status(&self, status: RentalStatus) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.status == status)
            .collect())
    }

    /// Active rentals (Reserved, Rented, Overdue) holding the equipment.
    pub async fn active_for_equipment(&self, equipment_id: &str) -> AppResult<Vec<Rental>> {
        Ok(self
            .by_equipment(equipment_id)
            .await?
            .into_iter()
            .filter(|r| r.status.is_active())
            .collect())
    }

    pub async fn insert(&self, rental: Rental) -> AppResult<()> {
        self.collection.insert(rental).await
    }

    pub async fn replace(&self, rental: Rental) -> AppResult<bool> {
        self.collection.replace(rental).await
    }

    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        self.collection.remove(id).await
    }

    pub async fn save_all(&self, rentals: &[Rental]) -> AppResult<()> {
        self.collection.save(rentals).await
    }
}
