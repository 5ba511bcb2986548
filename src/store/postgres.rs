use async_trait::async_trait;
use sqlx::PgPool;

use super::{CategoryStore, UserStore};
use crate::models::category::{Category, CategoryFilter, NewCategory};
use crate::models::user::{NewUser, User};

const CATEGORY_COLUMNS: &str = "id, title, user_id, created_at, updated_at";

pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn create(&self, new: NewCategory) -> sqlx::Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (title, user_id) VALUES ($1, $2) RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_all(&self, filter: CategoryFilter) -> sqlx::Result<Vec<Category>> {
        // NULL owner filter matches every row
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
             ORDER BY id"
        ))
        .bind(filter.user_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update_title(&self, id: i64, title: &str) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET title = $2, updated_at = now() \
             WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> sqlx::Result<Option<Category>> {
        sqlx::query_as::<_, Category>(&format!(
            "DELETE FROM categories WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_username(&self, username: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create(&self, new: NewUser) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash) VALUES ($1, $2) \
             RETURNING id, username, password_hash",
        )
        .bind(&new.username)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await
    }

    async fn count(&self) -> sqlx::Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
    }
}
