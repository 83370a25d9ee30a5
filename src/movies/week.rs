use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;

use crate::calendar::day_key;
use crate::movies::types::{MovieWithScreeningsOneDay, MovieWithScreeningsSeveralDays};

/// Pivots per-day movie lists into one record per movie carrying a
/// day-key → theaters map.
///
/// Within a day, movies are keyed by id with the last occurrence winning
/// (ids are unique per day upstream; this collapse is distinct from the
/// per-day flattening, which keeps duplicates). Across days, the first-seen
/// record is authoritative for the descriptive fields, and `showtimes_by_day`
/// only gets keys for days the movie appears on. Movies whose every day is
/// empty are left out.
pub fn pivot_week(
    days: Vec<(NaiveDate, Vec<MovieWithScreeningsOneDay>)>,
) -> Vec<MovieWithScreeningsSeveralDays> {
    let days: Vec<DayMovies> = days.into_iter().map(DayMovies::from_list).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut all_ids: Vec<String> = Vec::new();
    for day in &days {
        for id in &day.order {
            if seen.insert(id.clone()) {
                all_ids.push(id.clone());
            }
        }
    }

    let mut result = Vec::with_capacity(all_ids.len());
    for id in all_ids {
        let mut base = None;
        let mut showtimes_by_day = BTreeMap::new();
        for day in &days {
            if let Some(movie) = day.by_id.get(&id) {
                if base.is_none() {
                    base = Some(movie.movie.clone());
                }
                showtimes_by_day.insert(day_key(day.date), movie.showtimes_theater.clone());
            }
        }
        let movie = match base {
            Some(movie) => movie,
            None => continue,
        };
        if showtimes_by_day.values().all(|theaters| theaters.is_empty()) {
            continue;
        }
        result.push(MovieWithScreeningsSeveralDays {
            movie,
            showtimes_by_day,
        });
    }
    result
}

struct DayMovies {
    date: NaiveDate,
    by_id: HashMap<String, MovieWithScreeningsOneDay>,
    order: Vec<String>,
}

impl DayMovies {
    fn from_list(entry: (NaiveDate, Vec<MovieWithScreeningsOneDay>)) -> Self {
        let (date, movies) = entry;
        let mut by_id = HashMap::new();
        let mut order = Vec::new();
        for movie in movies {
            if !by_id.contains_key(&movie.movie.id) {
                order.push(movie.movie.id.clone());
            }
            // last occurrence wins
            by_id.insert(movie.movie.id.clone(), movie);
        }
        DayMovies { date, by_id, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movies::types::{Movie, Screening, ShowtimesTheater};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn day_movie(id: &str, title: &str, theaters: Vec<ShowtimesTheater>) -> MovieWithScreeningsOneDay {
        MovieWithScreeningsOneDay {
            movie: Movie {
                id: id.to_string(),
                title: title.to_string(),
                original_title: None,
                directors: "Chris Marker".to_string(),
                year: Some(1962),
                duration: None,
                tags: Vec::new(),
                review: None,
                review_date: None,
            },
            showtimes_theater: theaters,
        }
    }

    fn theater(clean_name: &str) -> ShowtimesTheater {
        ShowtimesTheater {
            name: clean_name.to_string(),
            clean_name: clean_name.to_string(),
            zipcode: "75005".to_string(),
            screenings: vec![Screening {
                time: 20.0,
                notes: None,
            }],
        }
    }

    fn empty_week() -> Vec<(NaiveDate, Vec<MovieWithScreeningsOneDay>)> {
        (12..19).map(|day| (date(day), Vec::new())).collect()
    }

    #[test]
    fn movie_on_a_single_day_gets_exactly_one_key() {
        let mut days = empty_week();
        days[2].1 = vec![day_movie("42", "La Jetée", vec![theater("champo")])];

        let week = pivot_week(days);
        assert_eq!(week.len(), 1);
        let keys: Vec<&String> = week[0].showtimes_by_day.keys().collect();
        assert_eq!(keys, vec!["2024-06-14"]);
    }

    #[test]
    fn first_seen_record_is_authoritative_for_descriptive_fields() {
        let mut days = empty_week();
        days[0].1 = vec![day_movie("42", "A", vec![theater("champo")])];
        days[3].1 = vec![day_movie("42", "A'", vec![theater("champo")])];

        let week = pivot_week(days);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].movie.title, "A");
        assert_eq!(week[0].showtimes_by_day.len(), 2);
    }

    #[test]
    fn within_a_day_the_last_duplicate_wins() {
        let mut days = empty_week();
        days[0].1 = vec![
            day_movie("42", "Early", vec![theater("a")]),
            day_movie("42", "Late", vec![theater("b")]),
        ];

        let week = pivot_week(days);
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].movie.title, "Late");
        assert_eq!(
            week[0].showtimes_by_day["2024-06-12"][0].clean_name,
            "b"
        );
    }

    #[test]
    fn movies_keep_first_appearance_order_across_the_week() {
        let mut days = empty_week();
        days[0].1 = vec![day_movie("b", "B", vec![theater("x")])];
        days[1].1 = vec![
            day_movie("a", "A", vec![theater("x")]),
            day_movie("b", "B", vec![theater("x")]),
        ];

        let week = pivot_week(days);
        let ids: Vec<&str> = week.iter().map(|movie| movie.movie.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn day_keys_are_a_subset_of_the_week_and_absent_days_have_no_key() {
        let mut days = empty_week();
        days[1].1 = vec![day_movie("42", "La Jetée", vec![theater("x")])];
        days[5].1 = vec![day_movie("42", "La Jetée", vec![theater("y")])];

        let week = pivot_week(days);
        let keys: Vec<&String> = week[0].showtimes_by_day.keys().collect();
        assert_eq!(keys, vec!["2024-06-13", "2024-06-17"]);
    }

    #[test]
    fn a_movie_with_only_empty_days_is_left_out() {
        let mut days = empty_week();
        days[2].1 = vec![day_movie("42", "La Jetée", Vec::new())];
        assert!(pivot_week(days).is_empty());
    }

    #[test]
    fn empty_week_pivots_to_nothing() {
        assert!(pivot_week(empty_week()).is_empty());
    }
}
