use sqlx::FromRow;

/// Internal user struct for authentication — includes password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// New user data for creation.
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
