//! Per-user analytics view state and the renders driven by it.
//!
//! A session owns the drill-down state, the active range and the entry
//! snapshot behind the last category chart. Range changes need fresh data,
//! so they are split into [`AnalyticsSession::dispatch`] handing out a
//! [`RenderTicket`] and [`AnalyticsSession::commit_range`] accepting the
//! loaded entries. A ticket older than the session's last transition is
//! rejected, so a slow load never overwrites a newer view.

use crate::aggregate::{
    CategoryAggregate, TaskAggregate, TaskDetail, aggregate_by_category, aggregate_by_task,
    task_detail,
};
use crate::drill::{DrillMode, DrillState, Intent, RenderInstruction, reduce};
use crate::models::Entry;
use crate::range::{DateRange, RangeKind};
use crate::taxonomy::Category;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct AnalyticsSession {
    drill: DrillState,
    range: Option<DateRange>,
    snapshot: Vec<Entry>,
    /// Range the snapshot was loaded for; lags `range` while a load is pending.
    snapshot_range: Option<DateRange>,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    generation: u64,
    range: DateRange,
}

impl RenderTicket {
    pub fn range(&self) -> DateRange {
        self.range
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeView {
    pub kind: RangeKind,
    pub start: String,
    pub end: String,
}

impl From<DateRange> for RangeView {
    fn from(range: DateRange) -> Self {
        Self {
            kind: range.kind,
            start: range.start_key(),
            end: range.end_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Categories {
        range: Option<RangeView>,
        categories: Vec<CategoryAggregate>,
    },
    Tasks {
        category: &'static str,
        color: &'static str,
        tasks: Vec<TaskAggregate>,
    },
    TaskDetail {
        category: &'static str,
        detail: TaskDetail,
    },
}

#[derive(Debug)]
pub enum Dispatch {
    Render(View),
    /// Entries for the ticket's range must be loaded and passed to
    /// [`AnalyticsSession::commit_range`].
    Fetch(RenderTicket),
}

pub fn render_category_chart(entries: &[Entry]) -> Vec<CategoryAggregate> {
    aggregate_by_category(entries)
}

pub fn render_task_chart(entries: &[Entry], category: &Category) -> Vec<TaskAggregate> {
    aggregate_by_task(entries, category)
}

pub fn get_task_detail(entries: &[Entry], category: &Category, task: &str) -> TaskDetail {
    task_detail(&aggregate_by_task(entries, category), task)
}

impl AnalyticsSession {
    pub fn drill(&self) -> DrillState {
        self.drill
    }

    pub fn range(&self) -> Option<DateRange> {
        self.range
    }

    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        let (next, instruction) = reduce(&self.drill, &intent);
        if next != self.drill {
            self.generation += 1;
        }
        self.drill = next;
        debug!(?instruction, generation = self.generation, "analytics transition");

        match (intent, instruction) {
            (Intent::ChangeRange(range), _) => {
                self.generation += 1;
                self.range = Some(range);
                Dispatch::Fetch(RenderTicket {
                    generation: self.generation,
                    range,
                })
            }
            (_, RenderInstruction::TaskDetail(category, task)) => Dispatch::Render(View::TaskDetail {
                category: category.name,
                detail: get_task_detail(&self.snapshot, category, &task),
            }),
            _ => Dispatch::Render(self.render()),
        }
    }

    /// Installs freshly loaded entries unless a later transition superseded
    /// the ticket, in which case `None` is returned and nothing changes.
    pub fn commit_range(&mut self, ticket: RenderTicket, entries: Vec<Entry>) -> Option<View> {
        if ticket.generation != self.generation || self.range != Some(ticket.range) {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale analytics render"
            );
            return None;
        }
        self.snapshot = entries;
        self.snapshot_range = Some(ticket.range);
        Some(self.render())
    }

    /// The view for the current state and snapshot; calling it twice yields
    /// the same view.
    pub fn render(&self) -> View {
        match (self.drill.mode, self.drill.selected_category) {
            (DrillMode::Tasks, Some(category)) => View::Tasks {
                category: category.name,
                color: category.color,
                tasks: render_task_chart(&self.snapshot, category),
            },
            _ => View::Categories {
                range: self.snapshot_range.map(RangeView::from),
                categories: render_category_chart(&self.snapshot),
            },
        }
    }
}
