use actix_web::{
    web::{Data, Path, Query},
    HttpResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;
use validator::Validate;

use crate::calendar::{filter_day_movies, CalendarFilter, Quartier};
use crate::movies::MovieStore;

use super::{parse_quartiers, validate_day_key};

#[derive(Deserialize, Validate)]
pub struct DayViewQuery {
    pub all: Option<bool>,
    pub quartiers: Option<String>,
    #[validate(range(min = 0.0, max = 24.0, message = "min_hour must be between 0 and 24"))]
    pub min_hour: Option<f64>,
    #[validate(range(min = 0.0, max = 24.0, message = "max_hour must be between 0 and 24"))]
    pub max_hour: Option<f64>,
    pub filter: Option<String>,
}

pub async fn get_movies_by_day(
    movies: Data<MovieStore>,
    path: Path<String>,
    info: Query<DayViewQuery>,
) -> HttpResponse {
    let query_span = tracing::info_span!("Day screenings lookup");
    let is_valid: Result<(), validator::ValidationErrors> = info.validate();
    if let Err(error) = is_valid {
        let source = error.field_errors();
        for i in source.iter() {
            for err in i.1.iter() {
                if let Some(message) = err.message.as_ref() {
                    tracing::error!("Error: {}", message.as_ref());
                    return HttpResponse::BadRequest().json(json!({
                        "error": message.as_ref()
                    }));
                }
            }
        }
        return HttpResponse::BadRequest().finish();
    }

    let day = path.into_inner();
    let date = match validate_day_key(&day) {
        Ok(date) => date,
        Err(error) => {
            let message = error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| "invalid day".to_string());
            tracing::error!("Error: {}", message);
            return HttpResponse::BadRequest().json(json!({
                "error": message
            }));
        }
    };

    let options = movies.day_options(info.all.unwrap_or(false));
    let day_movies = match movies
        .day_movies(date, &options)
        .instrument(query_span)
        .await
    {
        Ok(day_movies) => day_movies,
        Err(err) => {
            tracing::error!("Day screenings fetch failed: {}", err);
            return HttpResponse::InternalServerError().json(json!({
                "error": err.to_string()
            }));
        }
    };

    let calendar_filter = CalendarFilter {
        quartiers: info
            .quartiers
            .as_deref()
            .map(parse_quartiers)
            .unwrap_or_else(Quartier::all),
        min_hour: info.min_hour.unwrap_or(0.0),
        max_hour: info.max_hour.unwrap_or(24.0),
        text: info.filter.clone().unwrap_or_default(),
    };

    HttpResponse::Ok().json(filter_day_movies(day_movies, &calendar_filter))
}
