use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::session::{get_user_id, set_flash, sign_in};
use crate::auth::{csrf, password};
use crate::errors::{AppError, render};
use crate::store::UserStore;
use crate::templates_structs::{LoginTemplate, PageContext};
use crate::validate;

/// Landing page after a successful login.
pub const AFTER_LOGIN_REDIRECT: &str = "/categories/create";

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    #[serde(default)]
    pub csrf_token: String,
}

fn login_error(session: &Session, error: &str) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(session);
    render(LoginTemplate { ctx, error: Some(error.to_string()) })
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    // If already logged in, skip the form
    if get_user_id(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", AFTER_LOGIN_REDIRECT))
            .finish());
    }

    let ctx = PageContext::build(&session);
    render(LoginTemplate { ctx, error: None })
}

pub async fn login_submit(
    users: web::Data<dyn UserStore>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(error) = validate::validate_required(&form.username, "Username")
        .or_else(|| validate::validate_required(&form.password, "Password"))
    {
        return login_error(&session, &error);
    }

    let found = users.find_by_username(form.username.trim()).await?;
    let Some(user) = found else {
        log::warn!("Login failed: unknown user '{}'", form.username.trim());
        return login_error(&session, "Invalid username or password");
    };

    if !password::verify_password(&form.password, &user.password_hash)? {
        log::warn!("Login failed: wrong password for '{}'", user.username);
        return login_error(&session, "Invalid username or password");
    }

    sign_in(&session, user.id, &user.username)?;
    set_flash(&session, &format!("Welcome back, {}", user.username));
    log::info!("User '{}' logged in", user.username);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", AFTER_LOGIN_REDIRECT))
        .finish())
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish())
}
