use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored category as returned by the store and serialised to JSON clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub title: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unsaved category. The create form renders an empty one.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub title: String,
    pub user_id: i64,
}

impl NewCategory {
    pub fn build(title: impl Into<String>, user_id: i64) -> Self {
        Self { title: title.into(), user_id }
    }
}

/// Row filter for `CategoryStore::find_all`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    pub user_id: Option<i64>,
}

impl CategoryFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn owned_by(user_id: i64) -> Self {
        Self { user_id: Some(user_id) }
    }

    pub fn matches(&self, category: &Category) -> bool {
        self.user_id.is_none_or(|uid| uid == category.user_id)
    }
}

/// Form data from the "Add Category" page.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// JSON body of `POST /categories/api/create`. The task page sends `value`.
#[derive(Debug, Deserialize)]
pub struct ApiCreateCategory {
    #[serde(alias = "value", default)]
    pub title: String,
}

/// JSON body of `PUT /categories/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    #[serde(default)]
    pub title: String,
}
