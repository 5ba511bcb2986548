//! Runtime configuration read from the environment (and `.env` via dotenvy).
//!
//! - `DATABASE_URL` — PostgreSQL URL. Unset: categories live in memory.
//! - `DB_MAX_CONNECTIONS` — pool size (default 8).
//! - `BIND_ADDR` — listen address (default `127.0.0.1:8080`).
//! - `SESSION_KEY` — cookie key, at least 64 bytes; otherwise a random key.
//! - `COOKIE_SECURE` — mark the session cookie `Secure` (default false).
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD` — seeded when no user exists.
//! - `RUST_LOG` — env_logger filter.

use std::env;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

pub const SESSION_COOKIE: &str = "session";
const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub bind_addr: String,
    pub session_key: Option<String>,
    pub cookie_secure: bool,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            db_max_connections: 8,
            bind_addr: "127.0.0.1:8080".to_string(),
            session_key: None,
            cookie_secure: false,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let db_max_connections = match non_empty("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
                log::warn!("DB_MAX_CONNECTIONS={raw} is not a number, using {}", defaults.db_max_connections);
                defaults.db_max_connections
            }),
            None => defaults.db_max_connections,
        };

        let cookie_secure = non_empty("COOKIE_SECURE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.cookie_secure);

        Self {
            database_url: non_empty("DATABASE_URL"),
            db_max_connections,
            bind_addr: non_empty("BIND_ADDR").unwrap_or(defaults.bind_addr),
            session_key: lookup("SESSION_KEY"),
            cookie_secure,
            admin_username: non_empty("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: non_empty("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        }
    }

    /// Session encryption key. A random key means sessions are lost on restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

/// Cookie-backed session middleware.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build()
}
