use actix_web::{web::Data, HttpResponse};
use serde_json::json;
use tracing::Instrument;

use crate::movies::MovieStore;
use crate::store::StoreError;

pub async fn get_reviews(movies: Data<MovieStore>) -> HttpResponse {
    let query_span = tracing::info_span!("Reviewed movies lookup");
    match movies.reviewed_movies().instrument(query_span).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(StoreError::NotFound(document)) => {
            tracing::error!("Reviews document missing: {}", document);
            HttpResponse::NotFound().json(json!({
                "error": "no reviews available"
            }))
        }
        Err(err) => {
            tracing::error!("Reviews fetch failed: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "error": err.to_string()
            }))
        }
    }
}
