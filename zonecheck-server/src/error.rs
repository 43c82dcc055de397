use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use zonecheck_core::geo::CoordinateError;

use crate::store::StoreError;

/// Errors raised while serving a request
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("latitude, longitude, city, and state are required")]
    MissingFields,

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(#[from] CoordinateError),

    #[error("Server error")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedPayload(_)
            | AppError::MissingFields
            | AppError::InvalidCoordinates(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Store(e) => log::error!("Zone lookup failed: {}", e),
            other => log::debug!("Rejected request: {}", other),
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
