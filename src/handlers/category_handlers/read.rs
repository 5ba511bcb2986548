use actix_web::{HttpResponse, web};

use super::helpers::find_or_404;
use crate::auth::session::CurrentUser;
use crate::errors::AppError;
use crate::models::category::CategoryFilter;
use crate::store::CategoryStore;

/// GET /categories
// Public and unfiltered: every user's categories are visible here.
pub async fn list_all(store: web::Data<dyn CategoryStore>) -> Result<HttpResponse, AppError> {
    let categories = store.find_all(CategoryFilter::all()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "category": categories })))
}

/// GET /categories/{id}
pub async fn read(
    store: web::Data<dyn CategoryStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let category = find_or_404(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "findCat": category })))
}

/// GET /categories/api/get
pub async fn list_mine(
    store: web::Data<dyn CategoryStore>,
    user: CurrentUser,
) -> Result<HttpResponse, AppError> {
    let categories = store.find_all(CategoryFilter::owned_by(user.id)).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "categories": categories })))
}
