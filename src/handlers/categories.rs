use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    db::Category,
    pagination::{paginate, QUESTIONS_PER_PAGE},
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
}

/// The `{id: type}` object shape clients expect for category listings.
pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<i64, &str> {
    categories.iter().map(|c| (c.id, c.kind.as_str())).collect()
}

async fn list_categories(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not list categories")?;

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let category = state
        .db
        .find_category(category_id)
        .await
        .reject("could not look up category")?
        .ok_or(AppError::Unprocessable)?;

    let questions = state
        .db
        .questions_by_category(category.id)
        .await
        .reject("could not list questions for category")?;

    if questions.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&questions, 1, QUESTIONS_PER_PAGE),
        "total_questions": questions.len(),
        "current_category": category.kind,
    })))
}
