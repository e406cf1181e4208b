use crate::db;
use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;

/// Storage seam for reviews. The lifecycle layer only talks to this trait,
/// keeping the ownership rules independent of the postgres plumbing.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn fetch(&self, id: i32) -> Result<Option<models::Review>, String>;
    async fn fetch_all(&self) -> Result<Vec<models::Review>, String>;
    async fn insert(&self, review: models::Review) -> Result<models::Review, String>;
    async fn update(&self, review: models::Review) -> Result<models::Review, String>;
    async fn delete(&self, id: i32) -> Result<bool, String>;
}

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgRepository {
    async fn fetch(&self, id: i32) -> Result<Option<models::Review>, String> {
        db::review::fetch(&self.pool, id).await
    }

    async fn fetch_all(&self) -> Result<Vec<models::Review>, String> {
        db::review::fetch_all(&self.pool).await
    }

    async fn insert(&self, review: models::Review) -> Result<models::Review, String> {
        db::review::insert(&self.pool, review).await
    }

    async fn update(&self, review: models::Review) -> Result<models::Review, String> {
        db::review::update(&self.pool, review).await
    }

    async fn delete(&self, id: i32) -> Result<bool, String> {
        db::review::delete(&self.pool, id).await
    }
}
