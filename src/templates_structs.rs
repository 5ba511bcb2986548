use actix_session::Session;
use askama::Template;

use crate::auth::csrf;
use crate::auth::session::{get_username, take_flash};
use crate::models::category::NewCategory;

/// Common context shared by all pages.
/// Templates access these as `ctx.username`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub username: Option<String>,
    pub flash: Option<String>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            username: get_username(session),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "categories/form.html")]
pub struct CategoryFormTemplate {
    pub ctx: PageContext,
    pub title: String,
    pub category: NewCategory,
    pub errors: Vec<String>,
}

impl CategoryFormTemplate {
    pub fn new(ctx: PageContext, category: NewCategory, errors: Vec<String>) -> Self {
        Self {
            ctx,
            title: "Add Category:".to_string(),
            category,
            errors,
        }
    }
}
