use actix_web::{web::Data, HttpResponse};
use serde_json::json;
use tracing::Instrument;

use crate::movies::MovieStore;

pub async fn get_movies_by_week(movies: Data<MovieStore>) -> HttpResponse {
    let query_span = tracing::info_span!("Week screenings lookup");
    match movies.week_movies().instrument(query_span).await {
        Ok(week_movies) => HttpResponse::Ok().json(week_movies),
        Err(err) => {
            tracing::error!("Week screenings fetch failed: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "error": err.to_string()
            }))
        }
    }
}
