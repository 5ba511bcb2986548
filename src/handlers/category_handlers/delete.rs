use actix_web::{HttpResponse, web};

use super::helpers::parse_id;
use crate::errors::AppError;
use crate::store::CategoryStore;

/// DELETE /categories/{id}
///
/// Responds with the row as it was just before removal.
pub async fn delete(
    store: web::Data<dyn CategoryStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path)?;
    let removed = store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::category_not_found(id))?;
    log::info!("Deleted category {} owned by user {}", removed.id, removed.user_id);

    Ok(HttpResponse::Ok().json(serde_json::json!({ "deleteCat": removed })))
}
