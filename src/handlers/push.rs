use actix_web::{HttpResponse, ResponseError, Result, web};
use log::info;
use serde_json::json;

use crate::models::PushEnvelope;
use crate::services::VerificationService;

/// Pub/Sub push endpoint.
///
/// 204 covers everything the handler absorbs, including store and delivery
/// failures; 400 is returned only for a malformed payload so the
/// subscription redelivers it.
pub async fn pubsub_push(
    service: web::Data<VerificationService>,
    envelope: web::Json<PushEnvelope>,
) -> Result<HttpResponse> {
    info!(
        "Received Pub/Sub push from {}",
        envelope
            .subscription
            .as_deref()
            .unwrap_or("<unknown subscription>")
    );

    match service.process(&envelope).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn healthz() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "status": "ok"
    })))
}

pub fn push_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/pubsub/push", web::post().to(pubsub_push))
        .route("/healthz", web::get().to(healthz));
}
