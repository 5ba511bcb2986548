//! Persistence gateway for categories and the users that own them.
//!
//! Handlers only see the traits; `main` picks [`postgres`] when a
//! `DATABASE_URL` is configured and [`memory`] otherwise. Tests use the
//! in-memory stores.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::category::{Category, CategoryFilter, NewCategory};
use crate::models::user::{NewUser, User};

pub use memory::{MemoryCategoryStore, MemoryUserStore};
pub use postgres::{PgCategoryStore, PgUserStore};

#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Persist a built category and return the stored row.
    async fn create(&self, new: NewCategory) -> sqlx::Result<Category>;

    /// All categories matching `filter`, oldest first.
    async fn find_all(&self, filter: CategoryFilter) -> sqlx::Result<Vec<Category>>;

    async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<Category>>;

    /// Set a new title. `None` when the row no longer exists.
    async fn update_title(&self, id: i64, title: &str) -> sqlx::Result<Option<Category>>;

    /// Remove the row and return its last state. `None` when it was already gone.
    async fn delete(&self, id: i64) -> sqlx::Result<Option<Category>>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> sqlx::Result<Option<User>>;

    async fn create(&self, new: NewUser) -> sqlx::Result<User>;

    async fn count(&self) -> sqlx::Result<i64>;
}
