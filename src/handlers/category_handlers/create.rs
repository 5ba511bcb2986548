use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::AFTER_CREATE_REDIRECT;
use crate::auth::csrf;
use crate::auth::session::CurrentUser;
use crate::errors::{AppError, render};
use crate::models::category::{ApiCreateCategory, CategoryFilter, CategoryForm, NewCategory};
use crate::store::CategoryStore;
use crate::templates_structs::{CategoryFormTemplate, PageContext};
use crate::validate;

/// GET /categories/create
pub async fn new_form(session: Session, user: CurrentUser) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    render(CategoryFormTemplate::new(ctx, NewCategory::build("", user.id), vec![]))
}

/// POST /categories
pub async fn create(
    store: web::Data<dyn CategoryStore>,
    session: Session,
    user: CurrentUser,
    form: web::Form<CategoryForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let form = form.into_inner();
    let errors = validate::validate_category_title(&form.title);
    if !errors.is_empty() {
        let ctx = PageContext::build(&session);
        let category = NewCategory::build(form.title, user.id);
        return render(CategoryFormTemplate::new(ctx, category, errors));
    }

    let created = store
        .create(NewCategory::build(form.title.trim(), user.id))
        .await?;
    log::info!("User {} created category {}", user.id, created.id);

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", AFTER_CREATE_REDIRECT))
        .finish())
}

/// POST /categories/api/create
///
/// Responds with every category the caller owns, the new one included.
pub async fn api_create(
    store: web::Data<dyn CategoryStore>,
    user: CurrentUser,
    body: web::Json<ApiCreateCategory>,
) -> Result<HttpResponse, AppError> {
    let errors = validate::validate_category_title(&body.title);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let created = store
        .create(NewCategory::build(body.title.trim(), user.id))
        .await?;
    log::info!("User {} created category {} via API", user.id, created.id);

    let categories = store.find_all(CategoryFilter::owned_by(user.id)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "categories": categories })))
}
