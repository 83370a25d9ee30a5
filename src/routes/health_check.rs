use actix_web::HttpResponse;
use serde_json::json;

pub async fn handler() -> HttpResponse {
    tracing::info!("Health Check Handler");
    HttpResponse::Ok().json(json!({
        "message": "Le serveur des séances est en ligne"
    }))
}
