//! Failures of a read batch.
//!
//! Any of these aborts the whole batch: the transaction is dropped (rolled back) before the
//! error is returned, so no partial aggregate ever leaves the data layer.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AggregationError {
    /// A query or the transaction itself failed.
    #[error("Batch step '{step}' failed: {source}")]
    Storage {
        /// Name of the failing step
        step: &'static str,
        #[source]
        source: DbErr,
    },

    /// A step exceeded the per-step timeout.
    #[error("Batch step '{step}' timed out after {timeout:?}")]
    StepTimeout {
        step: &'static str,
        timeout: Duration,
    },

    /// The cancellation signal fired while the step was running.
    #[error("Batch step '{step}' cancelled")]
    Cancelled { step: &'static str },
}

/// Converts batch failures into HTTP responses.
///
/// # Returns
/// - 503 Service Unavailable - For `Cancelled`, logged at debug level only
/// - 500 Internal Server Error - For `Storage` and `StepTimeout`, details only in logs
impl IntoResponse for AggregationError {
    fn into_response(self) -> Response {
        match self {
            Self::Cancelled { step } => {
                tracing::debug!(step, "request cancelled");

                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Request cancelled".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
