//! Two-level navigation for the category chart.
//!
//! The view starts at category totals, drops into the tasks of one category
//! when a bar is selected, and returns on `Back`. Any range change lands
//! back on categories.

use crate::range::DateRange;
use crate::taxonomy::Category;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillMode {
    #[default]
    Categories,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrillState {
    pub mode: DrillMode,
    pub selected_category: Option<&'static Category>,
}

impl DrillState {
    pub fn tasks(category: &'static Category) -> Self {
        Self {
            mode: DrillMode::Tasks,
            selected_category: Some(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ChangeRange(DateRange),
    SelectCategory(&'static Category),
    SelectTask(String),
    Back,
}

/// What the caller has to draw after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
    Categories,
    Tasks(&'static Category),
    TaskDetail(&'static Category, String),
    Nothing,
}

pub fn reduce(state: &DrillState, intent: &Intent) -> (DrillState, RenderInstruction) {
    match (state.mode, intent, state.selected_category) {
        (_, Intent::ChangeRange(_), _) => (DrillState::default(), RenderInstruction::Categories),
        (DrillMode::Categories, Intent::SelectCategory(category), _) => (
            DrillState::tasks(*category),
            RenderInstruction::Tasks(*category),
        ),
        (DrillMode::Tasks, Intent::SelectTask(task), Some(category)) => (
            *state,
            RenderInstruction::TaskDetail(category, task.clone()),
        ),
        (DrillMode::Tasks, Intent::Back, _) => (DrillState::default(), RenderInstruction::Categories),
        _ => (*state, RenderInstruction::Nothing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeKind;
    use crate::taxonomy;
    use chrono::NaiveDate;

    fn physical() -> &'static Category {
        taxonomy::find("Physical Health").unwrap()
    }

    fn week() -> DateRange {
        DateRange::resolve(RangeKind::Week, NaiveDate::from_ymd_opt(2026, 1, 7).unwrap())
    }

    #[test]
    fn select_then_back_round_trips() {
        let start = DrillState::default();
        let (tasks, render) = reduce(&start, &Intent::SelectCategory(physical()));
        assert_eq!(tasks.mode, DrillMode::Tasks);
        assert_eq!(tasks.selected_category.map(|c| c.name), Some("Physical Health"));
        assert_eq!(render, RenderInstruction::Tasks(physical()));

        let (back, render) = reduce(&tasks, &Intent::Back);
        assert_eq!(back, DrillState::default());
        assert_eq!(render, RenderInstruction::Categories);
    }

    #[test]
    fn range_change_resets_task_view() {
        let tasks = DrillState::tasks(physical());
        let (next, render) = reduce(&tasks, &Intent::ChangeRange(week()));
        assert_eq!(next.mode, DrillMode::Categories);
        assert!(next.selected_category.is_none());
        assert_eq!(render, RenderInstruction::Categories);
    }

    #[test]
    fn select_task_keeps_state() {
        let tasks = DrillState::tasks(physical());
        let (next, render) = reduce(&tasks, &Intent::SelectTask("Went for a run".into()));
        assert_eq!(next, tasks);
        assert_eq!(
            render,
            RenderInstruction::TaskDetail(physical(), "Went for a run".into())
        );
    }

    #[test]
    fn out_of_place_intents_do_nothing() {
        let start = DrillState::default();
        assert_eq!(reduce(&start, &Intent::Back), (start, RenderInstruction::Nothing));
        assert_eq!(
            reduce(&start, &Intent::SelectTask("x".into())),
            (start, RenderInstruction::Nothing)
        );

        let tasks = DrillState::tasks(physical());
        let other = taxonomy::find("Finance").unwrap();
        assert_eq!(
            reduce(&tasks, &Intent::SelectCategory(other)),
            (tasks, RenderInstruction::Nothing)
        );
    }
}
