use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{CategoryStore, UserStore};
use crate::models::category::{Category, CategoryFilter, NewCategory};
use crate::models::user::{NewUser, User};

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new(), next_id: 1 }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local category store. Ids are never reused.
#[derive(Default)]
pub struct MemoryCategoryStore {
    table: RwLock<Table<Category>>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn create(&self, new: NewCategory) -> sqlx::Result<Category> {
        let mut table = self.table.write().await;
        let now = Utc::now();
        let category = Category {
            id: table.allocate_id(),
            title: new.title,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.push(category.clone());
        Ok(category)
    }

    async fn find_all(&self, filter: CategoryFilter) -> sqlx::Result<Vec<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().filter(|c| filter.matches(c)).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> sqlx::Result<Option<Category>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn update_title(&self, id: i64, title: &str) -> sqlx::Result<Option<Category>> {
        let mut table = self.table.write().await;
        Ok(table.rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.title = title.to_string();
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn delete(&self, id: i64) -> sqlx::Result<Option<Category>> {
        let mut table = self.table.write().await;
        let idx = table.rows.iter().position(|c| c.id == id);
        Ok(idx.map(|i| table.rows.remove(i)))
    }
}

/// Process-local user store; usernames are unique.
#[derive(Default)]
pub struct MemoryUserStore {
    table: RwLock<Table<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> sqlx::Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, new: NewUser) -> sqlx::Result<User> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.username == new.username) {
            return Err(sqlx::Error::Protocol(format!(
                "username '{}' already exists",
                new.username
            )));
        }
        let user = User {
            id: table.allocate_id(),
            username: new.username,
            password_hash: new.password_hash,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn count(&self) -> sqlx::Result<i64> {
        let table = self.table.read().await;
        Ok(table.rows.len() as i64)
    }
}
