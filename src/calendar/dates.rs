use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::Europe::Paris;

/// New screenings are programmed from Wednesday to Tuesday, so the listings
/// week starts on the release day rather than on Monday.
pub const RELEASE_WEEKDAY: Weekday = Weekday::Wed;

/// The current civil date in Paris, whatever timezone the server runs in.
pub fn start_of_today() -> NaiveDate {
    Utc::now().with_timezone(&Paris).date_naive()
}

/// The 7 dates of the upcoming listings week: the Wednesday on or after
/// today, through the following Tuesday. On a Wednesday the week starts
/// today, not in seven days.
pub fn next_movie_week() -> Vec<NaiveDate> {
    next_movie_week_from(start_of_today())
}

pub fn next_movie_week_from(today: NaiveDate) -> Vec<NaiveDate> {
    let until_release = (RELEASE_WEEKDAY.num_days_from_monday() + 7
        - today.weekday().num_days_from_monday())
        % 7;
    let start = today + Duration::days(i64::from(until_release));
    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

/// Canonical `YYYY-MM-DD` key, used both as store query parameter and as
/// mapping key. Lexicographic order matches date order.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Date-granularity "upcoming" check. Today counts as upcoming even if the
/// screening hour has passed; hour filtering is a separate concern.
pub fn is_same_or_after_today(date: NaiveDate) -> bool {
    date >= start_of_today()
}

/// "19h30" for 19.5. Screening times are fractional hours.
pub fn float_hour_to_string(time: f64) -> String {
    let hours = time.floor() as u32;
    let minutes = ((time - time.floor()) * 60.0).round() as u32;
    format!("{}h{:02}", hours, minutes)
}
