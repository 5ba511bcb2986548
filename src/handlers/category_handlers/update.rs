use actix_web::{HttpRequest, HttpResponse, web};

use super::helpers::find_or_404;
use crate::auth::middleware::{JSON_CONTENT_TYPE_REQUIRED, is_json_content_type};
use crate::errors::AppError;
use crate::models::category::UpdateCategory;
use crate::store::CategoryStore;
use crate::validate;

/// PUT /categories/{id}
///
/// Unknown ids are 404 whatever the body holds.
pub async fn update(
    req: HttpRequest,
    store: web::Data<dyn CategoryStore>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let existing = find_or_404(store.get_ref(), &path).await?;

    if !is_json_content_type(req.headers()) {
        return Err(AppError::BadRequest(JSON_CONTENT_TYPE_REQUIRED.to_string()));
    }
    let body: UpdateCategory = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    let errors = validate::validate_category_title(&body.title);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    // The row can disappear between the lookup and the write
    let updated = store
        .update_title(existing.id, body.title.trim())
        .await?
        .ok_or_else(|| AppError::category_not_found(existing.id))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "updateCat": updated })))
}
