use crate::models::{BulkItem, CustomTemplate, Entry};
use serde::{Deserialize, Serialize};

pub const STANDARD_TEMPLATES: [&str; 20] = [
    "Displayed affection towards a lover in public.",
    "Showed affection towards friends by hugging when you leave.",
    "Said 'thank you' to a service worker.",
    "Held the door open for someone.",
    "Completed a difficult task at work.",
    "Woke up on time.",
    "Ate a healthy meal.",
    "Exercised for 30 minutes.",
    "Read a chapter of a book.",
    "Learned something new.",
    "Helped a colleague with a problem.",
    "Called a family member to catch up.",
    "Listened to a friend without judgment.",
    "Forgave someone.",
    "Apologized for a mistake.",
    "Set a boundary with someone.",
    "Said 'no' to something you didn't want to do.",
    "Donated to a charity.",
    "Volunteered your time.",
    "Cleaned a part of your home.",
];

/// One row of a template dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TemplateOption {
    Template { name: String, score: i64 },
    Plain { text: String },
}

impl TemplateOption {
    pub fn label(&self) -> &str {
        match self {
            TemplateOption::Template { name, .. } => name,
            TemplateOption::Plain { text } => text,
        }
    }
}

impl From<&CustomTemplate> for TemplateOption {
    fn from(template: &CustomTemplate) -> Self {
        TemplateOption::Template {
            name: template.name.clone(),
            score: template.score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSource {
    #[default]
    Standard,
    Mine,
}

pub fn template_options(
    source: OptionSource,
    custom: &[CustomTemplate],
    query: &str,
) -> Vec<TemplateOption> {
    let options: Vec<TemplateOption> = match source {
        OptionSource::Standard => STANDARD_TEMPLATES
            .iter()
            .map(|text| TemplateOption::Plain {
                text: text.to_string(),
            })
            .collect(),
        OptionSource::Mine => custom.iter().map(TemplateOption::from).collect(),
    };
    let needle = query.trim().to_lowercase();
    options
        .into_iter()
        .filter(|option| option.label().to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageRecord {
    pub name: String,
    /// Score of the most recent entry with this name.
    pub score: i64,
    pub usage_count: usize,
}

/// Distinct entry names, most used first.
pub fn usage_history(entries: &[Entry], query: &str) -> Vec<UsageRecord> {
    let mut records: Vec<UsageRecord> = Vec::new();
    for entry in entries {
        match records.iter_mut().find(|record| record.name == entry.name) {
            Some(record) => {
                record.usage_count += 1;
                record.score = entry.score;
            }
            None => records.push(UsageRecord {
                name: entry.name.clone(),
                score: entry.score,
                usage_count: 1,
            }),
        }
    }
    records.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));

    let needle = query.trim().to_lowercase();
    records.retain(|record| record.name.to_lowercase().contains(&needle));
    records
}

/// Drops blank names and repeats, keeping the first score seen for a name.
pub fn dedupe_bulk_items(items: Vec<BulkItem>) -> Vec<BulkItem> {
    let mut kept: Vec<BulkItem> = Vec::new();
    for item in items {
        let name = item.name.trim();
        if name.is_empty() || kept.iter().any(|existing| existing.name == name) {
            continue;
        }
        kept.push(BulkItem {
            name: name.to_string(),
            score: item.score,
        });
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_options_filter_case_insensitively() {
        let options = template_options(OptionSource::Standard, &[], "SAID");
        let labels: Vec<_> = options.iter().map(TemplateOption::label).collect();
        assert_eq!(
            labels,
            vec![
                "Said 'thank you' to a service worker.",
                "Said 'no' to something you didn't want to do."
            ]
        );
        assert!(
            options
                .iter()
                .all(|option| matches!(option, TemplateOption::Plain { .. }))
        );
        assert_eq!(template_options(OptionSource::Standard, &[], "").len(), 20);
    }

    #[test]
    fn custom_options_carry_their_score() {
        let custom = vec![CustomTemplate {
            id: 1,
            name: "Morning stretch".into(),
            score: 4,
        }];
        let options = template_options(OptionSource::Mine, &custom, "stretch");
        assert_eq!(options.len(), 1);
        assert_eq!(
            options[0],
            TemplateOption::Template {
                name: "Morning stretch".into(),
                score: 4
            }
        );
        assert!(template_options(OptionSource::Mine, &custom, "run").is_empty());
    }

    #[test]
    fn history_counts_uses_and_keeps_latest_score() {
        let entries = vec![
            Entry::new(1, "Read a book", "2026-01-01", 2),
            Entry::new(2, "Went for a run", "2026-01-01", 3),
            Entry::new(3, "Went for a run", "2026-01-02", 5),
        ];
        let history = usage_history(&entries, "");
        assert_eq!(history[0].name, "Went for a run");
        assert_eq!(history[0].usage_count, 2);
        assert_eq!(history[0].score, 5);
        assert_eq!(history[1].name, "Read a book");

        assert_eq!(usage_history(&entries, "BOOK").len(), 1);
    }

    #[test]
    fn bulk_items_are_deduplicated_by_name() {
        let items = vec![
            BulkItem { name: "Read".into(), score: 2 },
            BulkItem { name: " Read ".into(), score: 9 },
            BulkItem { name: "   ".into(), score: 1 },
            BulkItem { name: "Walk".into(), score: 3 },
        ];
        let kept = dedupe_bulk_items(items);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].score, 2);
        assert_eq!(kept[1].name, "Walk");
    }
}
