use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    models::QuizBody,
    rejections::{AppError, ResultExt},
    selection, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}

async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body.map_err(|err| {
        tracing::warn!("malformed quiz body: {err}");
        AppError::BadRequest
    })?;

    let (Some(previous), Some(category)) = (body.previous_questions, body.quiz_category) else {
        return Err(AppError::Unprocessable);
    };

    // Category id 0 plays across the whole question bank.
    let pool = if category.id == 0 {
        state
            .db
            .questions()
            .await
            .reject("could not load quiz pool")?
    } else {
        state
            .db
            .questions_by_category(category.id)
            .await
            .reject("could not load quiz pool")?
    };

    match selection::next_question(&pool, &previous) {
        Some(question) => Ok(Json(json!({ "success": true, "question": question }))),
        None => Ok(Json(json!({ "success": true }))),
    }
}
