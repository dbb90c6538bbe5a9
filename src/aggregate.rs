use crate::classify::classify_with;
use crate::models::Entry;
use crate::nlp::{LexiconTagger, Tagger};
use crate::taxonomy::{CATEGORIES, Category};
use serde::Serialize;
use std::collections::HashMap;

const MAX_SAMPLES: usize = 3;
const SAMPLE_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAggregate {
    pub category: &'static str,
    pub color: &'static str,
    pub total_score: i64,
    pub count: usize,
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAggregate {
    pub task: String,
    pub total_score: i64,
    /// Number of entries carrying this name, not a score-derived figure.
    pub count: usize,
    /// One date per entry; repeats are kept.
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TaskDetail {
    pub task: String,
    pub count: usize,
    pub total_score: i64,
    /// Sorted, without repeats.
    pub dates: Vec<String>,
}

pub fn aggregate_by_category(entries: &[Entry]) -> Vec<CategoryAggregate> {
    aggregate_by_category_with(&LexiconTagger, entries)
}

pub fn aggregate_by_category_with<T: Tagger>(tagger: &T, entries: &[Entry]) -> Vec<CategoryAggregate> {
    let mut totals: Vec<CategoryAggregate> = CATEGORIES
        .iter()
        .map(|category| CategoryAggregate {
            category: category.name,
            color: category.color,
            total_score: 0,
            count: 0,
            samples: Vec::new(),
        })
        .collect();

    for entry in entries {
        let category = classify_with(tagger, &entry.name);
        let Some(slot) = totals.iter_mut().find(|agg| agg.category == category.name) else {
            continue;
        };
        slot.count += 1;
        slot.total_score = slot.total_score.saturating_add(entry.score);
        if slot.samples.len() < MAX_SAMPLES {
            slot.samples.push(truncate_sample(&entry.name));
        }
    }

    // Stable: equal totals stay in declaration order.
    totals.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    totals.retain(|agg| agg.count > 0);
    totals
}

pub fn aggregate_by_task(entries: &[Entry], category: &Category) -> Vec<TaskAggregate> {
    aggregate_by_task_with(&LexiconTagger, entries, category)
}

pub fn aggregate_by_task_with<T: Tagger>(
    tagger: &T,
    entries: &[Entry],
    category: &Category,
) -> Vec<TaskAggregate> {
    let mut tasks: Vec<TaskAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        if classify_with(tagger, &entry.name).name != category.name {
            continue;
        }
        let slot = *index.entry(entry.name.clone()).or_insert_with(|| {
            tasks.push(TaskAggregate {
                task: entry.name.clone(),
                total_score: 0,
                count: 0,
                dates: Vec::new(),
            });
            tasks.len() - 1
        });
        let task = &mut tasks[slot];
        task.total_score = task.total_score.saturating_add(entry.score);
        task.count += 1;
        task.dates.push(entry.date.clone());
    }

    tasks.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    tasks
}

/// Detail for one task within `category`; an unknown task yields an empty
/// detail rather than an error.
pub fn task_detail(tasks: &[TaskAggregate], task: &str) -> TaskDetail {
    let Some(found) = tasks.iter().find(|candidate| candidate.task == task) else {
        return TaskDetail {
            task: task.to_string(),
            ..TaskDetail::default()
        };
    };
    let mut dates = found.dates.clone();
    dates.sort();
    dates.dedup();
    TaskDetail {
        task: found.task.clone(),
        count: found.count,
        total_score: found.total_score,
        dates,
    }
}

fn truncate_sample(name: &str) -> String {
    if name.chars().count() <= SAMPLE_CHARS {
        return name.to_string();
    }
    let head: String = name.chars().take(SAMPLE_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;

    fn entry(id: u64, name: &str, date: &str, base: i64, count: u32) -> Entry {
        let mut entry = Entry::new(id, name, date, base);
        for _ in 1..count {
            entry.increment().unwrap();
        }
        entry
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry(1, "Exercised for 30 minutes.", "2026-01-05", 3, 1),
            entry(2, "Donated to a charity.", "2026-01-05", 5, 1),
            entry(3, "Exercised for 30 minutes.", "2026-01-06", 3, 2),
            entry(4, "Went for a run", "2026-01-06", 4, 1),
            entry(5, "asdkjasd", "2026-01-07", 1, 1),
        ]
    }

    #[test]
    fn category_totals_cover_every_entry() {
        let entries = sample();
        let aggregates = aggregate_by_category(&entries);

        let count: usize = aggregates.iter().map(|agg| agg.count).sum();
        let score: i64 = aggregates.iter().map(|agg| agg.total_score).sum();
        assert_eq!(count, entries.len());
        assert_eq!(score, entries.iter().map(|e| e.score).sum::<i64>());

        assert_eq!(aggregates[0].category, "Physical Health");
        assert_eq!(aggregates[0].total_score, 3 + 6 + 4);
        assert_eq!(aggregates[0].count, 3);
        assert!(aggregates.iter().all(|agg| agg.count > 0));
    }

    #[test]
    fn empty_input_yields_no_categories() {
        assert!(aggregate_by_category(&[]).is_empty());
    }

    #[test]
    fn samples_are_capped_and_truncated() {
        let long = "Exercised for 30 minutes and then stretched for another ten";
        let entries: Vec<Entry> = (0..5)
            .map(|i| entry(i, long, "2026-01-05", 1, 1))
            .collect();
        let aggregates = aggregate_by_category(&entries);
        let samples = &aggregates[0].samples;
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].chars().count(), 43);
        assert!(samples[0].ends_with("..."));
        assert_eq!(truncate_sample("Short"), "Short");
    }

    #[test]
    fn tasks_group_by_exact_name_and_keep_dates() {
        let mut entries = sample();
        entries.push(entry(6, "Exercised for 30 minutes.", "2026-01-06", 3, 1));
        let physical = taxonomy::find("Physical Health").unwrap();
        let tasks = aggregate_by_task(&entries, physical);

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].task, "Exercised for 30 minutes.");
        assert_eq!(tasks[0].count, 3);
        assert_eq!(tasks[0].total_score, 3 + 6 + 3);
        assert_eq!(tasks[0].dates, vec!["2026-01-05", "2026-01-06", "2026-01-06"]);
        assert_eq!(tasks[1].task, "Went for a run");
    }

    #[test]
    fn detail_deduplicates_dates_but_not_count() {
        let entries = vec![
            entry(1, "Went for a run", "2026-01-06", 2, 1),
            entry(2, "Went for a run", "2026-01-05", 2, 1),
            entry(3, "Went for a run", "2026-01-06", 2, 1),
        ];
        let physical = taxonomy::find("Physical Health").unwrap();
        let tasks = aggregate_by_task(&entries, physical);
        let detail = task_detail(&tasks, "Went for a run");
        assert_eq!(detail.count, 3);
        assert_eq!(detail.total_score, 6);
        assert_eq!(detail.dates, vec!["2026-01-05", "2026-01-06"]);
    }

    #[test]
    fn unknown_task_yields_empty_detail() {
        let detail = task_detail(&[], "Never logged");
        assert_eq!(detail.task, "Never logged");
        assert_eq!(detail.count, 0);
        assert!(detail.dates.is_empty());
    }
}
