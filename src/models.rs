use crate::errors::AppError;
use crate::range::RangeKind;
use crate::templates::OptionSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub name: String,
    pub date: String,
    pub score: i64,
    pub base_score: i64,
    pub count: u32,
}

/// Highest difficulty a single repetition can carry.
pub const MAX_SCORE: i64 = 10;

/// Result of trying to take one repetition off an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decrement {
    Decremented,
    /// The entry is at its last repetition; removing it needs confirmation.
    NeedsDeletion,
}

impl Entry {
    pub fn new(id: u64, name: impl Into<String>, date: impl Into<String>, base_score: i64) -> Self {
        Self {
            id,
            name: name.into(),
            date: date.into(),
            score: base_score,
            base_score,
            count: 1,
        }
    }

    /// Adds one repetition. Fails without touching the entry when the count
    /// or score would overflow.
    pub fn increment(&mut self) -> Result<(), AppError> {
        let count = self
            .count
            .checked_add(1)
            .ok_or_else(|| AppError::bad_request("entry repeated too many times"))?;
        let score = self
            .base_score
            .checked_mul(i64::from(count))
            .ok_or_else(|| AppError::bad_request("entry score is too large"))?;
        self.count = count;
        self.score = score;
        Ok(())
    }

    pub fn decrement(&mut self) -> Decrement {
        if self.count <= 1 {
            return Decrement::NeedsDeletion;
        }
        self.count -= 1;
        self.score = self.base_score * i64::from(self.count);
        Decrement::Decremented
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTemplate {
    pub id: u64,
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserData {
    pub next_id: u64,
    pub entries: Vec<Entry>,
    pub templates: Vec<CustomTemplate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub users: BTreeMap<String, UserData>,
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub name: String,
    pub date: String,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct BulkItem {
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Deserialize)]
pub struct BulkEntryRequest {
    pub date: String,
    pub items: Vec<BulkItem>,
}

#[derive(Debug, Deserialize)]
pub struct EntryQuery {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DecrementQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DecrementResponse {
    Updated { entry: Entry },
    Deleted { id: u64 },
    ConfirmationRequired { entry: Entry },
}

#[derive(Debug, Deserialize)]
pub struct TemplateRequest {
    pub name: String,
    pub score: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: u64,
}

#[derive(Debug, Serialize)]
pub struct BulkResponse {
    pub created: Vec<Entry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RangeQuery {
    #[serde(default)]
    pub range: RangeKind,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OptionsQuery {
    #[serde(default)]
    pub source: OptionSource,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct IndexQuery {
    pub user: Option<String>,
}

/// Analytics intent as sent by clients; category names are resolved against
/// the taxonomy before reaching the session.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntentRequest {
    ChangeRange {
        #[serde(default)]
        range: RangeKind,
        date: Option<String>,
    },
    SelectCategory {
        category: String,
    },
    SelectTask {
        task: String,
    },
    Back,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_tracks_count_through_increments_and_decrements() {
        let mut entry = Entry::new(1, "Went for a run", "2026-01-05", 4);
        assert_eq!(entry.score, 4);

        for _ in 0..3 {
            entry.increment().unwrap();
            assert_eq!(entry.score, entry.base_score * i64::from(entry.count));
        }
        assert_eq!(entry.count, 4);

        while entry.decrement() == Decrement::Decremented {
            assert_eq!(entry.score, entry.base_score * i64::from(entry.count));
        }
        assert_eq!(entry.count, 1);
        assert_eq!(entry.score, 4);
    }

    #[test]
    fn intent_requests_parse_by_type_tag() {
        let intent: IntentRequest =
            serde_json::from_str(r#"{"type":"select_category","category":"Finance"}"#).unwrap();
        assert!(matches!(intent, IntentRequest::SelectCategory { category } if category == "Finance"));

        let intent: IntentRequest = serde_json::from_str(r#"{"type":"change_range"}"#).unwrap();
        assert!(matches!(
            intent,
            IntentRequest::ChangeRange { range: RangeKind::Week, date: None }
        ));

        let intent: IntentRequest = serde_json::from_str(r#"{"type":"back"}"#).unwrap();
        assert!(matches!(intent, IntentRequest::Back));
    }

    #[test]
    fn increment_refuses_to_overflow_the_score() {
        let mut entry = Entry::new(3, "Ran a marathon", "2026-01-05", i64::MAX / 2 + 1);
        assert!(entry.increment().is_err());
        assert_eq!(entry.count, 1);
        assert_eq!(entry.score, entry.base_score);
    }

    #[test]
    fn decrement_at_one_leaves_entry_untouched() {
        let mut entry = Entry::new(7, "Read", "2026-01-05", 3);
        assert_eq!(entry.decrement(), Decrement::NeedsDeletion);
        assert_eq!(entry.count, 1);
        assert_eq!(entry.score, 3);
    }
}
