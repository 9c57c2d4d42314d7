pub mod db;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod rejections;
pub mod selection;

use axum::{
    http::{header, Method},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use rejections::AppError;

#[derive(Clone)]
pub struct AppState {
    pub db: db::Db,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(handlers::categories::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quizzes::routes())
        .fallback(unknown_route)
        .method_not_allowed_fallback(unsupported_method)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<Value> {
    Json(json!({ "Project": "Trivia API" }))
}

// Unknown paths and known paths hit with the wrong method both answer in
// the uniform error shape.
async fn unknown_route() -> AppError {
    AppError::NotFound
}

async fn unsupported_method() -> AppError {
    AppError::MethodNotAllowed
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
