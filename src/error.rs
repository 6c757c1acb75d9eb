//! Error handling

use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};

use crate::prediction::PredictionError;
use crate::render::chart::ChartError;
use crate::render::render_error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Submission errors
    InvalidInput(String),
    Prediction(PredictionError),

    // Server errors
    Render(ChartError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            AppError::InvalidInput(msg) => {
                tracing::warn!("Rejected submission: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, "Invalid input", msg.clone())
            }
            AppError::Prediction(err) => {
                tracing::warn!("Prediction failed: {}", err);
                (StatusCode::UNPROCESSABLE_ENTITY, "Prediction failed", err.to_string())
            }
            AppError::Render(err) => {
                tracing::error!("Render error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Rendering failed", "The result page could not be drawn".to_string())
            }
        };

        (status, Html(render_error(title, &message))).into_response()
    }
}

impl From<PredictionError> for AppError {
    fn from(err: PredictionError) -> Self {
        AppError::Prediction(err)
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::Render(err)
    }
}
