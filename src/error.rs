use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Envelope or inner payload is unusable. The only error that escalates
    /// to the trigger layer; everything else is absorbed into logs.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Store failure: {0}")]
    StoreFailure(#[from] sqlx::Error),

    #[error("Delivery failure: {0}")]
    DeliveryFailure(String),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::MalformedPayload(msg) => {
                log::warn!("Malformed payload: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "MALFORMED_PAYLOAD",
                    msg.clone(),
                )
            }
            AppError::DeliveryFailure(msg) => {
                log::error!("Delivery failure: {msg}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "DELIVERY_FAILURE",
                    msg.clone(),
                )
            }
            AppError::StoreFailure(err) => {
                log::error!("Store failure: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_FAILURE",
                    "Store failure".to_string(),
                )
            }
            AppError::MigrateError(err) => {
                log::error!("Migration error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "MIGRATION_ERROR",
                    "Migration error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}
