//! Session log aggregation.
//!
//! Turns raw study session records into the [`TaskAnalysis`] summary the
//! diagnosis engine consumes: per-task totals and session counts, the top
//! tasks by total time, a unique per-category time breakdown, and overall
//! totals. Serialized field names are camelCase, matching the JSON the
//! tracking frontend produces.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::diagnosis::DEFAULT_STUDY_CATEGORY;

/// One raw logged session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Name of the task worked on
    pub task_name: String,
    /// Category the session was tracked under
    pub category: String,
    /// Session length in milliseconds
    pub duration_ms: i64,
}

/// A task ranked by total tracked time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTask {
    /// Task name
    pub name: String,
    /// Total tracked time in milliseconds
    pub total_time: i64,
    /// Number of sessions logged for this task
    pub sessions: u32,
}

/// Total tracked time for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTime {
    /// Category label
    pub category: String,
    /// Total tracked time in milliseconds
    pub time: i64,
}

/// Pre-aggregated summary of a user's logged sessions.
///
/// Invariant: `total_time >= total_study_time >= 0` and category breakdown
/// entries are unique by category. The aggregator upholds both; hand-built
/// values are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAnalysis {
    /// Number of logged sessions
    pub total_tasks: u32,
    /// Time tracked under the study category, in milliseconds
    pub total_study_time: i64,
    /// Total tracked time in milliseconds
    pub total_time: i64,
    /// Tasks ranked by total time, descending
    pub top_tasks: Vec<TopTask>,
    /// Per-category time totals, unique by category
    pub category_breakdown: Vec<CategoryTime>,
}

/// Aggregates raw session records into a [`TaskAnalysis`].
#[derive(Debug, Clone)]
pub struct TaskAnalyzer {
    /// How many top tasks to keep
    pub top_task_limit: usize,
    /// Category label counted as study time
    pub study_category: String,
}

impl Default for TaskAnalyzer {
    fn default() -> Self {
        Self {
            top_task_limit: 5,
            study_category: DEFAULT_STUDY_CATEGORY.to_string(),
        }
    }
}

impl TaskAnalyzer {
    /// Create an analyzer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the top task limit
    pub fn with_top_task_limit(mut self, limit: usize) -> Self {
        self.top_task_limit = limit;
        self
    }

    /// Set the study category label
    pub fn with_study_category(mut self, category: impl Into<String>) -> Self {
        self.study_category = category.into();
        self
    }

    /// Aggregate session records into a task analysis summary.
    ///
    /// Tasks are ranked by total time descending, ties broken by name so the
    /// ordering is deterministic. Categories keep one entry each with their
    /// summed time, ordered by time descending.
    pub fn aggregate(&self, records: &[SessionRecord]) -> TaskAnalysis {
        let mut task_map: HashMap<&str, TaskBuilder> = HashMap::new();
        let mut category_map: HashMap<&str, i64> = HashMap::new();
        let mut total_time = 0i64;
        let mut total_study_time = 0i64;

        for record in records {
            total_time += record.duration_ms;
            if record.category == self.study_category {
                total_study_time += record.duration_ms;
            }

            task_map
                .entry(record.task_name.as_str())
                .or_default()
                .record(record.duration_ms);
            *category_map.entry(record.category.as_str()).or_insert(0) += record.duration_ms;
        }

        let mut top_tasks: Vec<TopTask> = task_map
            .into_iter()
            .map(|(name, builder)| builder.build(name))
            .collect();
        top_tasks.sort_by(|a, b| b.total_time.cmp(&a.total_time).then(a.name.cmp(&b.name)));
        top_tasks.truncate(self.top_task_limit);

        let mut category_breakdown: Vec<CategoryTime> = category_map
            .into_iter()
            .map(|(category, time)| CategoryTime {
                category: category.to_string(),
                time,
            })
            .collect();
        category_breakdown
            .sort_by(|a, b| b.time.cmp(&a.time).then(a.category.cmp(&b.category)));

        TaskAnalysis {
            total_tasks: records.len() as u32,
            total_study_time,
            total_time,
            top_tasks,
            category_breakdown,
        }
    }
}

/// Days from `today` until `target`, negative when the target has passed.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

#[derive(Default)]
struct TaskBuilder {
    total_time: i64,
    sessions: u32,
}

impl TaskBuilder {
    fn record(&mut self, duration_ms: i64) {
        self.total_time += duration_ms;
        self.sessions += 1;
    }

    fn build(self, name: &str) -> TopTask {
        TopTask {
            name: name.to_string(),
            total_time: self.total_time,
            sessions: self.sessions,
        }
    }
}
