use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Validation(String),
    #[error("there is no car with id {0}")]
    CarNotFound(i64),
    #[error("there is no trip with id {trip_id} in car {car_id}")]
    TripNotFound { car_id: i64, trip_id: i64 },
    #[error("storage error: {0}")]
    Storage(anyhow::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Config(_) | AppError::Storage(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::CarNotFound(_) | AppError::TripNotFound { .. } => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
