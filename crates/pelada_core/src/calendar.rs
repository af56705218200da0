//! Season calendar helpers.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::Player;

/// Every `weekday` of `year`, in order.
pub fn match_days(year: i32, weekday: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_weekday_of_month_opt(year, 1, weekday, 1) else {
        return Vec::new();
    };
    first
        .iter_weeks()
        .take_while(|d| d.year() == year)
        .collect()
}

/// Players whose birthday, placed in `season_year`, falls in the Sunday-to-Saturday week
/// containing `today`. Roster order is kept.
pub fn birthdays_in_week<'a>(players: &'a [Player], today: NaiveDate, season_year: i32) -> Vec<&'a Player> {
    let start = today - Duration::days(i64::from(today.weekday().num_days_from_sunday()));
    let end = start + Duration::days(6);

    players
        .iter()
        .filter(|p| {
            p.birthday
                .and_then(|b| b.in_year(season_year))
                .is_some_and(|d| d >= start && d <= end)
        })
        .collect()
}
