use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::car::{Car, CarDraft, TripDraft},
    services::store::CarFilter,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(add_car))
        .route(
            "/cars/:id",
            get(car_by_id).put(update_car).delete(remove_car),
        )
        .route("/cars/:id/trips", put(add_trip))
        .route(
            "/cars/:id/trips/:trip_id",
            put(update_trip).delete(remove_trip),
        )
}

#[derive(Debug, Deserialize)]
struct CarQuery {
    size: Option<String>,
    doors: Option<i64>,
}

async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarQuery>,
) -> Json<Vec<Car>> {
    let filter = CarFilter {
        size: query.size,
        min_doors: query.doors,
    };
    Json(state.store.list_cars(&filter).await)
}

async fn car_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(state.store.get_car(id).await?))
}

async fn add_car(
    State(state): State<AppState>,
    Json(draft): Json<CarDraft>,
) -> Result<Json<Car>, AppError> {
    Ok(Json(state.store.create_car(draft).await?))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<CarDraft>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = state.store.update_car(id, draft).await?;
    Ok((StatusCode::ACCEPTED, Json(car)))
}

async fn remove_car(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.store.delete_car(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<TripDraft>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = state.store.add_trip(id, draft).await?;
    Ok((StatusCode::ACCEPTED, Json(car)))
}

async fn update_trip(
    State(state): State<AppState>,
    Path((id, trip_id)): Path<(i64, i64)>,
    Json(draft): Json<TripDraft>,
) -> Result<(StatusCode, Json<Car>), AppError> {
    let car = state.store.update_trip(id, trip_id, draft).await?;
    Ok((StatusCode::ACCEPTED, Json(car)))
}

async fn remove_trip(
    State(state): State<AppState>,
    Path((id, trip_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    state.store.remove_trip(id, trip_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
