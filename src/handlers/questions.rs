use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    models::{NewQuestion, QuestionRequest, QuestionsPostBody},
    pagination::{paginate, QUESTIONS_PER_PAGE},
    rejections::{AppError, ResultExt},
    AppState,
};

use super::categories::category_map;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/{question_id}", delete(delete_question))
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    // Values that do not parse fall back to the first page.
    fn page_index(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Value>, AppError> {
    let categories = state
        .db
        .categories()
        .await
        .reject("could not list categories")?;
    let questions = state
        .db
        .questions()
        .await
        .reject("could not list questions")?;

    let page = paginate(&questions, query.page_index(), QUESTIONS_PER_PAGE);
    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": page,
        "total_questions": questions.len(),
        "categories": category_map(&categories),
        "current_category": null,
    })))
}

async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = state
        .db
        .delete_question(question_id)
        .await
        .reject("could not delete question")?;

    if !deleted {
        return Err(AppError::Unprocessable);
    }

    Ok(Json(json!({ "success": true, "deleted": question_id })))
}

async fn post_questions(
    State(state): State<AppState>,
    body: Result<Json<QuestionsPostBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = body.map_err(|err| {
        tracing::warn!("malformed questions body: {err}");
        AppError::BadRequest
    })?;

    match body.into_request().ok_or(AppError::Unprocessable)? {
        QuestionRequest::Search(term) => search_questions(&state, &term).await,
        QuestionRequest::Create(new) => create_question(&state, new).await,
    }
}

async fn search_questions(state: &AppState, term: &str) -> Result<Json<Value>, AppError> {
    let matches = state
        .db
        .search_questions(term)
        .await
        .reject("could not search questions")?;

    if matches.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({
        "success": true,
        "questions": paginate(&matches, 1, QUESTIONS_PER_PAGE),
        "total_questions": matches.len(),
    })))
}

async fn create_question(state: &AppState, new: NewQuestion) -> Result<Json<Value>, AppError> {
    let created = state
        .db
        .insert_question(&new)
        .await
        .reject("could not insert question")?;

    let questions = state
        .db
        .questions()
        .await
        .reject("could not list questions")?;
    let last_page = questions.len() / QUESTIONS_PER_PAGE + 1;

    Ok(Json(json!({
        "success": true,
        "created": created,
        "question_created": new.question,
        "questions": paginate(&questions, last_page, QUESTIONS_PER_PAGE),
        "total_questions": questions.len(),
    })))
}
