use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::user::NewUser;
use crate::store::{
    CategoryStore, MemoryCategoryStore, MemoryUserStore, PgCategoryStore, PgUserStore, UserStore,
};

/// The two stores handlers are given through `web::Data`.
#[derive(Clone)]
pub struct Stores {
    pub categories: Arc<dyn CategoryStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(MemoryCategoryStore::new()),
            users: Arc::new(MemoryUserStore::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            categories: Arc::new(PgCategoryStore::new(pool.clone())),
            users: Arc::new(PgUserStore::new(pool)),
        }
    }
}

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Connect to PostgreSQL when configured, otherwise fall back to memory.
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    let Some(url) = &config.database_url else {
        log::warn!("No DATABASE_URL set, keeping categories in memory (lost on restart)");
        return Ok(Stores::in_memory());
    };

    let pool = init_pool(url, config.db_max_connections).await?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Db(sqlx::Error::Migrate(Box::new(e))))?;
    Ok(Stores::postgres(pool))
}

/// Create the configured admin account if there are no users yet.
pub async fn seed_admin(users: &dyn UserStore, config: &AppConfig) -> Result<(), AppError> {
    let count = users.count().await?;
    if count > 0 {
        log::info!("Database already has {count} user(s), skipping admin seed");
        return Ok(());
    }

    let password_hash = password::hash_password(&config.admin_password)?;
    let admin = users
        .create(NewUser {
            username: config.admin_username.clone(),
            password_hash,
        })
        .await?;
    log::info!("Seeded user '{}' (id {})", admin.username, admin.id);
    Ok(())
}
