use crate::models::Entry;
use crate::range::{DateRange, RangeKind, date_key, month_end, week_start};
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTH_BUCKET_LABELS: [&str; 5] = ["Week 1", "Week 2", "Week 3", "Week 4", "Week 5+"];
const Y_AXIS_HEADROOM: i64 = 5;

#[derive(Debug, Serialize)]
pub struct TrendChart {
    pub legend: &'static str,
    pub start_date: String,
    pub end_date: String,
    pub labels: Vec<String>,
    pub data: Vec<i64>,
    pub y_max: i64,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub day: u32,
    pub score: i64,
    pub today: bool,
    pub editable: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 in a Monday-first grid.
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

/// Line chart for the week, month or year around `anchor`. A day range is
/// charted as its week.
pub fn build_trend(kind: RangeKind, anchor: NaiveDate, entries: &[Entry]) -> TrendChart {
    let kind = if kind == RangeKind::Day { RangeKind::Week } else { kind };
    let range = DateRange::resolve(kind, anchor);
    let (start_key, end_key) = (range.start_key(), range.end_key());
    let in_range: Vec<&Entry> = entries
        .iter()
        .filter(|entry| entry.date >= start_key && entry.date <= end_key)
        .collect();

    let (legend, labels, data) = match kind {
        RangeKind::Day | RangeKind::Week => {
            let by_date = scores_by_date(&in_range);
            let data = (0..7)
                .map(|offset| {
                    let date = range.start + Duration::days(offset);
                    by_date.get(&date_key(date)).copied().unwrap_or(0)
                })
                .collect();
            ("Daily Score", to_labels(&WEEKDAY_LABELS), data)
        }
        RangeKind::Month => {
            let mut buckets = vec![0i64; MONTH_BUCKET_LABELS.len()];
            for entry in &in_range {
                let Ok(date) = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d") else {
                    continue;
                };
                let bucket = ((date.day() as usize - 1) / 7).min(MONTH_BUCKET_LABELS.len() - 1);
                buckets[bucket] = buckets[bucket].saturating_add(entry.score);
            }
            ("Weekly Score", to_labels(&MONTH_BUCKET_LABELS), buckets)
        }
        RangeKind::Year => {
            let mut months = vec![0i64; MONTH_LABELS.len()];
            for entry in &in_range {
                let month = entry
                    .date
                    .get(5..7)
                    .and_then(|value| value.parse::<usize>().ok())
                    .filter(|month| (1..=12).contains(month));
                if let Some(month) = month {
                    months[month - 1] = months[month - 1].saturating_add(entry.score);
                }
            }
            ("Monthly Score", to_labels(&MONTH_LABELS), months)
        }
    };

    let y_max = data.iter().copied().max().unwrap_or(0).saturating_add(Y_AXIS_HEADROOM);
    TrendChart {
        legend,
        start_date: start_key,
        end_date: end_key,
        labels,
        data,
        y_max,
    }
}

pub fn build_calendar(
    year: i32,
    month: u32,
    entries: &[Entry],
    edit_window_days: i64,
) -> Option<CalendarMonth> {
    build_calendar_at(Local::now().date_naive(), year, month, entries, edit_window_days)
}

pub fn build_calendar_at(
    today: NaiveDate,
    year: i32,
    month: u32,
    entries: &[Entry],
    edit_window_days: i64,
) -> Option<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = month_end(first);
    let start_key = date_key(first);
    let end_key = date_key(last);
    let in_month: Vec<&Entry> = entries
        .iter()
        .filter(|entry| entry.date >= start_key && entry.date <= end_key)
        .collect();
    let by_date = scores_by_date(&in_month);

    let days = (0..last.day())
        .map(|offset| {
            let date = first + Duration::days(offset as i64);
            let key = date_key(date);
            CalendarDay {
                score: by_date.get(&key).copied().unwrap_or(0),
                day: date.day(),
                today: date == today,
                editable: is_editable_at(today, date, edit_window_days),
                date: key,
            }
        })
        .collect();

    Some(CalendarMonth {
        year,
        month,
        leading_blanks: (first - week_start(first)).num_days() as u32,
        days,
    })
}

pub fn is_editable(date: NaiveDate, edit_window_days: i64) -> bool {
    is_editable_at(Local::now().date_naive(), date, edit_window_days)
}

/// Entries may be changed from `edit_window_days` days ago up to today.
pub fn is_editable_at(today: NaiveDate, date: NaiveDate, edit_window_days: i64) -> bool {
    if date > today {
        return false;
    }
    (today - date).num_days() <= edit_window_days
}

fn scores_by_date(entries: &[&Entry]) -> BTreeMap<String, i64> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        let total = totals.entry(entry.date.clone()).or_insert(0i64);
        *total = total.saturating_add(entry.score);
    }
    totals
}

fn to_labels(source: &[&str]) -> Vec<String> {
    source.iter().map(|label| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(1, "Went for a run", "2026-01-05", 3),
            Entry::new(2, "Read a book", "2026-01-05", 2),
            Entry::new(3, "Called mom", "2026-01-11", 4),
            Entry::new(4, "Cleaned", "2026-01-30", 1),
            Entry::new(5, "Saved money", "2026-03-02", 6),
        ]
    }

    #[test]
    fn week_trend_has_seven_daily_points() {
        let chart = build_trend(RangeKind::Week, day(2026, 1, 7), &entries());
        assert_eq!(chart.legend, "Daily Score");
        assert_eq!(chart.labels.len(), 7);
        assert_eq!(chart.data, vec![5, 0, 0, 0, 0, 0, 4]);
        assert_eq!(chart.y_max, 10);
        assert_eq!(chart.start_date, "2026-01-05");
    }

    #[test]
    fn month_trend_buckets_by_day_of_month() {
        let chart = build_trend(RangeKind::Month, day(2026, 1, 20), &entries());
        assert_eq!(chart.labels, vec!["Week 1", "Week 2", "Week 3", "Week 4", "Week 5+"]);
        assert_eq!(chart.data, vec![5, 4, 0, 0, 1]);
    }

    #[test]
    fn year_trend_has_twelve_months() {
        let chart = build_trend(RangeKind::Year, day(2026, 6, 1), &entries());
        assert_eq!(chart.data.len(), 12);
        assert_eq!(chart.data[0], 10);
        assert_eq!(chart.data[2], 6);
        assert_eq!(chart.legend, "Monthly Score");
    }

    #[test]
    fn calendar_sums_scores_per_day() {
        let today = day(2026, 1, 6);
        let calendar = build_calendar_at(today, 2026, 1, &entries(), 2).unwrap();
        assert_eq!(calendar.days.len(), 31);
        // 2026-01-01 is a Thursday.
        assert_eq!(calendar.leading_blanks, 3);
        assert_eq!(calendar.days[4].score, 5);
        assert!(calendar.days[5].today);
        assert!(calendar.days[3].editable);
        assert!(!calendar.days[2].editable);
        assert!(!calendar.days[6].editable);
        assert!(build_calendar_at(today, 2026, 13, &[], 2).is_none());
    }

    #[test]
    fn editable_window_covers_today_and_two_days_back() {
        let today = day(2026, 1, 10);
        assert!(is_editable_at(today, today, 2));
        assert!(is_editable_at(today, day(2026, 1, 8), 2));
        assert!(!is_editable_at(today, day(2026, 1, 7), 2));
        assert!(!is_editable_at(today, day(2026, 1, 11), 2));
    }
}
