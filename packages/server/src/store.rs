use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, Set, TransactionSession,
    TransactionTrait,
};

use crate::entity::advertisement;
use crate::models::advertisement::{CreateAdRequest, UpdateAdRequest};

/// Failure of a single store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No advertisement with this id exists.
    #[error("advertisement {0} not found")]
    NotFound(i32),
    #[error(transparent)]
    Database(#[from] DbErr),
}

/// Gateway for reading and writing advertisement records.
///
/// Every method is one logical unit against the store. Load-then-write
/// operations run in their own transaction, which rolls back when dropped on
/// an error path, so the connection is always handed back to the pool.
pub struct AdStore<'a, C: ConnectionTrait + TransactionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> AdStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<advertisement::Model, StoreError> {
        find_ad(self.conn, id).await
    }

    /// Insert a new record. `id` comes from the sequence and `published_at`
    /// is stamped here, never taken from the client.
    pub async fn create(&self, ad: CreateAdRequest) -> Result<advertisement::Model, StoreError> {
        let new_ad = advertisement::ActiveModel {
            title: Set(ad.title),
            description: Set(ad.description),
            owner: Set(ad.owner),
            published_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(new_ad.insert(self.conn).await?)
    }

    /// Apply only the fields present in `patch`. An empty patch still checks
    /// that the record exists but issues no write.
    pub async fn patch_fields(&self, id: i32, patch: UpdateAdRequest) -> Result<(), StoreError> {
        let txn = self.conn.begin().await?;
        let existing = find_ad(&txn, id).await?;

        if !patch.is_empty() {
            let mut active: advertisement::ActiveModel = existing.into();
            if let Some(title) = patch.title {
                active.title = Set(title);
            }
            if let Some(description) = patch.description {
                active.description = Set(description);
            }
            active.update(&txn).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let txn = self.conn.begin().await?;
        let existing = find_ad(&txn, id).await?;
        existing.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}

async fn find_ad<C: ConnectionTrait>(db: &C, id: i32) -> Result<advertisement::Model, StoreError> {
    advertisement::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound(id))
}
