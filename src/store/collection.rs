//! Generic serialized-collection access
//!
//! Every collection is one row of the `collections` table: the collection
//! name as the key and the full JSON array of records as the value.

use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// A record stored in a collection, addressable by its string id.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn id(&self) -> &str;
}

#[derive(Clone)]
pub struct Collection<T> {
    pool: Pool<Sqlite>,
    name: &'static str,
    /// Set when the persisted data failed to deserialize at load time;
    /// the collection then reads as empty instead of failing.
    load_error: Arc<RwLock<Option<String>>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> Collection<T> {
    pub fn new(pool: Pool<Sqlite>, name: &'static str) -> Self {
        Self {
            pool,
            name,
            load_error: Arc::new(RwLock::new(None)),
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Error recorded by the most recent load of malformed data, if any.
    pub fn load_error(&self) -> Option<String> {
        self.load_error.read().expect("load_error lock poisoned").clone()
    }

    /// Whether the collection key exists in the store at all.
    pub async fn exists(&self) -> AppResult<bool> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM collections WHERE name = $1")
                .bind(self.name)
                .fetch_optional(&self.pool)
                .await?;
        Ok(found.is_some())
    }

    /// Load all records. A missing key reads as an empty collection, and so
    /// does malformed persisted data (logged and recorded in the load-error
    /// flag rather than propagated).
    pub async fn load(&self) -> AppResult<Vec<T>> {
        let raw: Option<String> =
            sqlx::query_scalar("SELECT data FROM collections WHERE name = $1")
                .bind(self.name)
                .fetch_optional(&self.pool)
                .await?;

        let Some(raw) = raw else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(records) => {
                *self.load_error.write().expect("load_error lock poisoned") = None;
                Ok(records)
            }
            Err(e) => {
                tracing::error!(
                    collection = self.name,
                    error = %e,
                    "malformed collection data, initializing empty"
                );
                *self.load_error.write().expect("load_error lock poisoned") =
                    Some(e.to_string());
                Ok(Vec::new())
            }
        }
    }

    /// Replace the whole collection.
    pub async fn save(&self, records: &[T]) -> AppResult<()> {
        let data = serde_json::to_string(records)?;
        sqlx::query(
            r#"
            INSERT INTO collections (name, data) VALUES ($1, $2)
            ON CONFLICT(name) DO UPDATE SET data = excluded.data
            "#,
        )
        .bind(self.name)
        .bind(data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Get one record by id.
    pub async fn get(&self, id: &str) -> AppResult<Option<T>> {
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    /// Append a record.
    pub async fn insert(&self, record: T) -> AppResult<()> {
        let mut records = self.load().await?;
        records.push(record);
        self.save(&records).await
    }

    /// Replace the record with the same id. Returns false when absent.
    pub async fn replace(&self, record: T) -> AppResult<bool> {
        let mut records = self.load().await?;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                self.save(&records).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the record with the given id. Returns false when absent.
    pub async fn remove(&self, id: &str) -> AppResult<bool> {
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save(&records).await?;
        Ok(true)
    }
}
