//! Calendar Math
//!
//! Pure date helpers for the Monday-first week and month views.

use chrono::{Datelike, Duration, Local, NaiveDate};

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

/// Monday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Seven consecutive ISO dates starting at `start`
pub fn week_dates(start: NaiveDate) -> Vec<String> {
    (0..7)
        .map(|i| (start + Duration::days(i)).format(DATE_FMT).to_string())
        .collect()
}

/// Leading blank cells so day 1 lands under its Monday-first column
pub fn month_padding(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.weekday().num_days_from_monday())
        .unwrap_or(0)
}

/// Month paging is cyclic across year boundaries
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 { (year - 1, 12) } else { (year, month - 1) }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 { (year + 1, 1) } else { (year, month + 1) }
}

/// 周一..周日 for an ISO date string
pub fn weekday_label(date: &str) -> &'static str {
    const LABELS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];
    parse_date(date)
        .map(|d| LABELS[d.weekday().num_days_from_monday() as usize])
        .unwrap_or("")
}

/// "M/D" column header date
pub fn short_date(date: &str) -> String {
    parse_date(date)
        .map(|d| format!("{}/{}", d.month(), d.day()))
        .unwrap_or_default()
}

/// "M月D日 - M月D日" over the loaded week
pub fn week_title(week_dates: &[String]) -> String {
    let start = week_dates.first().and_then(|s| parse_date(s));
    let end = week_dates.last().and_then(|s| parse_date(s));
    match (start, end) {
        (Some(start), Some(end)) => format!(
            "{}月{}日 - {}月{}日",
            start.month(),
            start.day(),
            end.month(),
            end.day()
        ),
        _ => String::new(),
    }
}

pub fn month_title(year: i32, month: u32) -> String {
    format!("{}年{}月", year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_always_monday() {
        // 2024-03-15 is a Friday
        let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(week_start(friday), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());

        // Sunday belongs to the week that started six days earlier
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(week_start(sunday), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());

        // A Monday maps to itself
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn week_dates_are_seven_consecutive_days() {
        let dates = week_dates(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], "2024-03-11");
        assert_eq!(dates[6], "2024-03-17");
        for pair in dates.windows(2) {
            let a = parse_date(&pair[0]).unwrap();
            let b = parse_date(&pair[1]).unwrap();
            assert_eq!(b - a, Duration::days(1));
        }
    }

    #[test]
    fn week_dates_cross_year_boundary() {
        let dates = week_dates(week_start(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
        assert_eq!(dates[0], "2024-12-30");
        assert_eq!(dates[6], "2025-01-05");
    }

    #[test]
    fn month_padding_is_monday_first() {
        assert_eq!(month_padding(2024, 3), 4); // March 1, 2024 is a Friday
        assert_eq!(month_padding(2024, 1), 0); // Jan 1, 2024 is a Monday
        assert_eq!(month_padding(2024, 2), 3); // leap-year February starts Thursday
        assert_eq!(month_padding(2023, 10), 6); // Oct 1, 2023 is a Sunday
        for month in 1..=12 {
            assert!(month_padding(2024, month) <= 6);
        }
    }

    #[test]
    fn month_paging_wraps_at_year_boundaries() {
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(prev_month(2024, 7), (2024, 6));
        assert_eq!(next_month(2024, 7), (2024, 8));
    }

    #[test]
    fn labels_follow_the_monday_first_week() {
        assert_eq!(weekday_label("2024-03-11"), "周一");
        assert_eq!(weekday_label("2024-03-17"), "周日");
        assert_eq!(short_date("2024-03-05"), "3/5");

        let week = week_dates(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(week_title(&week), "3月11日 - 3月17日");
        assert_eq!(month_title(2024, 3), "2024年3月");
    }
}
