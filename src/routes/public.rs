use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}

#[derive(Debug, Deserialize)]
struct WelcomeQuery {
    name: String,
}

async fn welcome(Query(query): Query<WelcomeQuery>) -> Json<Value> {
    Json(json!({
        "message": format!("Hello {}. Welcome to the Car Sharing service!", query.name)
    }))
}
