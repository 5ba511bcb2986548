use crate::errors::AppError;
use crate::models::category::Category;
use crate::store::CategoryStore;

/// Parse a path id. Anything that is not an integer cannot name a stored row.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::category_not_found(raw))
}

pub async fn find_or_404(store: &dyn CategoryStore, raw_id: &str) -> Result<Category, AppError> {
    let id = parse_id(raw_id)?;
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::category_not_found(id))
}
