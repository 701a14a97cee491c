//! Users collection

use sqlx::{Pool, Sqlite};

use crate::{
    error::AppResult,
    models::user::User,
    store::collection::{Collection, Record},
};

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct UsersStore {
    collection: Collection<User>,
}

impl UsersStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            collection: Collection::new(pool, super::USERS),
        }
    }

    pub fn collection(&self) -> &Collection<User> {
        &self.collection
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.collection.load().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<User>> {
        self.collection.get(id).await
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.list().await?.into_iter().find(|u| u.email == email))
    }
}
