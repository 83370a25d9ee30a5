use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One screening slot, as a fractional hour (19.5 is 19h30).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screening {
    pub time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A theater's screenings for one movie on one day. `clean_name` is the
/// canonical form used for de-duplication and ordering; `name` is what gets
/// displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowtimesTheater {
    pub name: String,
    pub clean_name: String,
    pub zipcode: String,
    #[serde(default)]
    pub screenings: Vec<Screening>,
}

/// Descriptive movie fields, stable across days for a given id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub directors: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieWithScreeningsOneDay {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub showtimes_theater: Vec<ShowtimesTheater>,
}

/// A movie over a whole listings week. `showtimes_by_day` only has keys for
/// days the movie actually shows; a BTreeMap keeps day keys in date order
/// since the canonical `YYYY-MM-DD` form sorts chronologically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieWithScreeningsSeveralDays {
    #[serde(flatten)]
    pub movie: Movie,
    pub showtimes_by_day: BTreeMap<String, Vec<ShowtimesTheater>>,
}

/// Flat index record for search, denormalized upstream. No screenings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMovie {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    pub directors: String,
    pub year: String,
    pub relevance_score: f64,
}

/// Compact wire form of the movie list documents: single-letter keys to keep
/// the documents small.
#[derive(Debug, Clone, Deserialize)]
pub struct ReducedMovie {
    pub i: String,
    pub d: String,
    pub t: String,
    pub y: String,
    #[serde(default)]
    pub o: Option<String>,
    pub r: f64,
}

impl From<ReducedMovie> for SearchMovie {
    fn from(reduced: ReducedMovie) -> Self {
        SearchMovie {
            id: reduced.i,
            directors: reduced.d,
            title: reduced.t,
            year: reduced.y,
            original_title: reduced.o,
            relevance_score: reduced.r,
        }
    }
}

/// An archived review entry from the `all-reviews` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub review_date: String,
}

/// The archive layout of a theater's showtimes: times only, no notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheaterScreenings {
    pub clean_name: String,
    pub zipcode_clean: String,
    #[serde(default)]
    pub showtimes: Vec<f64>,
}

/// Full record for a single movie page: descriptive fields plus every known
/// screening date, past and future.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub screenings: BTreeMap<String, Vec<TheaterScreenings>>,
}
