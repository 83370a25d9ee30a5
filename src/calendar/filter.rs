use crate::calendar::Quartier;
use crate::movies::search::string_match;
use crate::movies::types::{Movie, MovieWithScreeningsOneDay};

/// Caller-owned filter state for the single-day calendar view. No global
/// store: each request builds its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarFilter {
    pub quartiers: Vec<Quartier>,
    pub min_hour: f64,
    pub max_hour: f64,
    pub text: String,
}

impl Default for CalendarFilter {
    fn default() -> Self {
        CalendarFilter {
            quartiers: Quartier::all(),
            min_hour: 0.0,
            max_hour: 24.0,
            text: String::new(),
        }
    }
}

/// Applies quartier, hour-window and free-text filters to a day's movie list.
/// Screenings outside `[min_hour, max_hour)` and theaters outside the
/// selected quartiers are removed from display; a movie only disappears when
/// nothing remains, or when the text filter rejects it.
pub fn filter_day_movies(
    movies: Vec<MovieWithScreeningsOneDay>,
    filter: &CalendarFilter,
) -> Vec<MovieWithScreeningsOneDay> {
    movies
        .into_iter()
        .filter_map(|movie| filter_movie(movie, filter))
        .collect()
}

fn filter_movie(
    mut movie: MovieWithScreeningsOneDay,
    filter: &CalendarFilter,
) -> Option<MovieWithScreeningsOneDay> {
    if !filter.text.is_empty() && !matches_text(&movie.movie, &filter.text) {
        return None;
    }
    movie.showtimes_theater = movie
        .showtimes_theater
        .into_iter()
        .filter_map(|mut theater| {
            if !filter
                .quartiers
                .contains(&Quartier::from_zipcode(&theater.zipcode))
            {
                return None;
            }
            theater
                .screenings
                .retain(|screening| {
                    screening.time >= filter.min_hour && screening.time < filter.max_hour
                });
            if theater.screenings.is_empty() {
                None
            } else {
                Some(theater)
            }
        })
        .collect();
    if movie.showtimes_theater.is_empty() {
        None
    } else {
        Some(movie)
    }
}

fn matches_text(movie: &Movie, text: &str) -> bool {
    string_match(text, &movie.title)
        || movie
            .original_title
            .as_deref()
            .map(|original_title| string_match(text, original_title))
            .unwrap_or(false)
        || string_match(text, &movie.directors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::types::{Screening, ShowtimesTheater};

    fn theater(clean_name: &str, zipcode: &str, times: &[f64]) -> ShowtimesTheater {
        ShowtimesTheater {
            name: clean_name.to_string(),
            clean_name: clean_name.to_string(),
            zipcode: zipcode.to_string(),
            screenings: times
                .iter()
                .map(|&time| Screening { time, notes: None })
                .collect(),
        }
    }

    fn day_movie(id: &str, title: &str, theaters: Vec<ShowtimesTheater>) -> MovieWithScreeningsOneDay {
        MovieWithScreeningsOneDay {
            movie: Movie {
                id: id.to_string(),
                title: title.to_string(),
                original_title: None,
                directors: "Jacques Demy".to_string(),
                year: Some(1964),
                duration: None,
                tags: Vec::new(),
                review: None,
                review_date: None,
            },
            showtimes_theater: theaters,
        }
    }

    #[test]
    fn hour_window_trims_screenings_but_keeps_the_movie() {
        let movies = vec![day_movie(
            "1",
            "Lola",
            vec![theater("champo", "75005", &[15.0, 23.0])],
        )];
        let filter = CalendarFilter {
            min_hour: 14.0,
            max_hour: 22.0,
            ..Default::default()
        };
        let filtered = filter_day_movies(movies, &filter);
        assert_eq!(filtered.len(), 1);
        let times: Vec<f64> = filtered[0].showtimes_theater[0]
            .screenings
            .iter()
            .map(|screening| screening.time)
            .collect();
        assert_eq!(times, vec![15.0]);
    }

    #[test]
    fn max_hour_is_exclusive() {
        let movies = vec![day_movie("1", "Lola", vec![theater("a", "75005", &[22.0])])];
        let filter = CalendarFilter {
            max_hour: 22.0,
            ..Default::default()
        };
        assert!(filter_day_movies(movies, &filter).is_empty());
    }

    #[test]
    fn movie_disappears_when_no_screening_survives() {
        let movies = vec![day_movie("1", "Lola", vec![theater("a", "75005", &[23.0])])];
        let filter = CalendarFilter {
            max_hour: 22.0,
            ..Default::default()
        };
        assert!(filter_day_movies(movies, &filter).is_empty());
    }

    #[test]
    fn unselected_quartier_drops_its_theaters() {
        let movies = vec![day_movie(
            "1",
            "Lola",
            vec![
                theater("left-bank", "75005", &[20.0]),
                theater("right-bank", "75009", &[20.0]),
                theater("suburb", "93100", &[20.0]),
            ],
        )];
        let filter = CalendarFilter {
            quartiers: vec![Quartier::Rd],
            ..Default::default()
        };
        let filtered = filter_day_movies(movies, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].showtimes_theater.len(), 1);
        assert_eq!(filtered[0].showtimes_theater[0].clean_name, "right-bank");
    }

    #[test]
    fn text_filter_matches_title_original_title_or_directors() {
        let mut with_original = day_movie("2", "La Mort aux trousses", vec![theater("a", "75005", &[20.0])]);
        with_original.movie.original_title = Some("North by Northwest".to_string());
        with_original.movie.directors = "Alfred Hitchcock".to_string();
        let movies = vec![
            day_movie("1", "Les Parapluies de Cherbourg", vec![theater("a", "75005", &[20.0])]),
            with_original,
        ];

        let by_title = CalendarFilter {
            text: "parapluies".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_day_movies(movies.clone(), &by_title)[0].movie.id, "1");

        let by_original = CalendarFilter {
            text: "northwest".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_day_movies(movies.clone(), &by_original)[0].movie.id, "2");

        let by_director = CalendarFilter {
            text: "hitchcock".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_day_movies(movies, &by_director)[0].movie.id, "2");
    }

    #[test]
    fn default_filter_keeps_everything() {
        let movies = vec![day_movie(
            "1",
            "Lola",
            vec![
                theater("a", "75005", &[0.0, 23.75]),
                theater("b", "92100", &[12.0]),
            ],
        )];
        let filtered = filter_day_movies(movies.clone(), &CalendarFilter::default());
        assert_eq!(filtered, movies);
    }
}
