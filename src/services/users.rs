//! User lookup and login service

use crate::{
    error::{AppError, AppResult},
    models::user::User,
    store::Store,
};

#[derive(Clone)]
pub struct UsersService {
    store: Store,
}

impl UsersService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.store.users.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<User> {
        self.store
            .users
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Plaintext credential check against the stored users; existing data
    /// sets keep passwords in the clear. Returns the matching user, or None
    /// on a mismatch.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let user = self.store.users.get_by_email(email).await?;
        Ok(user.filter(|u| u.password == password))
    }
}
