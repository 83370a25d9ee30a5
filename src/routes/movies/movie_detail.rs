use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use serde_json::json;
use tracing::Instrument;

use crate::movies::{upcoming_screenings, MovieStore};

pub async fn get_movie_detail(movies: Data<MovieStore>, path: Path<String>) -> HttpResponse {
    let query_span = tracing::info_span!("Single movie lookup");
    let id = path.into_inner();
    match movies.movie_by_id(&id).instrument(query_span).await {
        Ok(Some(detail)) => {
            let upcoming = upcoming_screenings(&detail);
            HttpResponse::Ok().json(json!({
                "movie": detail,
                "upcoming_screenings": upcoming
            }))
        }
        Ok(None) => {
            tracing::info!("No movie with id {}", id);
            HttpResponse::NotFound().json(json!({
                "error": format!("no movie with id {}", id)
            }))
        }
        Err(err) => {
            tracing::error!("Movie lookup failed: {}", err);
            HttpResponse::InternalServerError().json(json!({
                "error": err.to_string()
            }))
        }
    }
}
