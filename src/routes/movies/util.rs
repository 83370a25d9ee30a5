use std::borrow::Cow;

use actix_web::{web, Scope};
use chrono::NaiveDate;
use regex::Regex;
use validator::ValidationError;

use crate::calendar::{parse_day_key, Quartier};

use super::{get_movie_detail, get_movies_by_day, get_movies_by_week};

const DAY_KEY_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

pub fn movie_listings() -> Scope {
    web::scope("/movies")
        .route("/by-day/{day}", web::get().to(get_movies_by_day))
        .route("/by-week", web::get().to(get_movies_by_week))
        .route("/{id}", web::get().to(get_movie_detail))
}

/// Day keys come straight from the URL; the core assumes well-formed input,
/// so the request layer rejects anything that is not a real `YYYY-MM-DD`.
pub fn validate_day_key(day: &str) -> Result<NaiveDate, ValidationError> {
    let day_key_pattern = Regex::new(DAY_KEY_PATTERN).unwrap();
    if !day_key_pattern.is_match(day) {
        return Err(ValidationError::new("Invalid day")
            .with_message(Cow::from("day must be formatted YYYY-MM-DD")));
    }
    parse_day_key(day).ok_or_else(|| {
        ValidationError::new("Invalid day")
            .with_message(Cow::from("day is not a valid calendar date"))
    })
}

/// Comma-separated quartier codes from the query string. Unknown codes are
/// dropped rather than rejected, matching the closed set the UI offers.
pub fn parse_quartiers(csv: &str) -> Vec<Quartier> {
    csv.split(',')
        .filter_map(|code| Quartier::from_code(code.trim()))
        .collect()
}
