use crate::errors::AppError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    Day,
    #[default]
    Week,
    Month,
    Year,
}

/// Inclusive calendar span resolved from a range kind and an anchor day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub kind: RangeKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn resolve(kind: RangeKind, anchor: NaiveDate) -> Self {
        let (start, end) = match kind {
            RangeKind::Day => (anchor, anchor),
            RangeKind::Week => {
                let start = week_start(anchor);
                (start, start + Duration::days(6))
            }
            RangeKind::Month => (month_start(anchor), month_end(anchor)),
            RangeKind::Year => (
                NaiveDate::from_ymd_opt(anchor.year(), 1, 1).unwrap_or(anchor),
                NaiveDate::from_ymd_opt(anchor.year(), 12, 31).unwrap_or(anchor),
            ),
        };
        Self { kind, start, end }
    }

    pub fn start_key(&self) -> String {
        date_key(self.start)
    }

    pub fn end_key(&self) -> String {
        date_key(self.end)
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{value}', expected YYYY-MM-DD")))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}
