//! Rule-based study diagnosis engine.
//!
//! This module composes three threshold scorers over a pre-aggregated
//! [`TaskAnalysis`] summary and an exam target:
//! - Balance: study vs total tracked time (`balance`)
//! - Habits: activity diversity, session focus, top task (`habits`)
//! - Achievability: current vs required daily study pace (`achievability`)
//!
//! All scoring is a pure function of its inputs and the static requirement
//! table; concurrent invocations share nothing mutable. The rendered report
//! sections are opaque Korean prose; downstream consumers treat them as
//! formatted strings and read numbers from [`DiagnosisMetrics`] instead.

mod achievability;
mod balance;
mod habits;
mod messages;
mod requirement;

pub use achievability::{AchievabilityBand, AchievabilityScore};
pub use balance::{BalanceBand, BalanceScore};
pub use habits::{DiversityBand, FocusBand, HabitScore, TopTaskSummary};
pub use requirement::{DefaultRequirement, ExamRequirement, RequirementTable};

use serde::{Deserialize, Serialize};

use crate::analysis::TaskAnalysis;

/// Study category label used when no configuration overrides it.
///
/// Time is only counted as study time when a category entry carries exactly
/// this label; a mismatched label silently zeroes the balance ratio, so the
/// label is configuration, not a buried literal.
pub const DEFAULT_STUDY_CATEGORY: &str = "공부";

/// Complete diagnosis report.
///
/// The three text fields are band-selected, template-filled report sections;
/// serialized field names follow the camelCase JSON contract of the
/// surrounding web API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    /// Balance report section
    pub study_time_balance: String,
    /// Habit report section (multi-line)
    pub habit_optimization: String,
    /// Achievability report section
    pub goal_achievability: String,
    /// Raw figures behind the report
    pub metrics: DiagnosisMetrics,
}

/// Raw metrics derived during diagnosis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisMetrics {
    /// Study time share of total tracked time, percent (0-100)
    pub study_time_ratio: f64,
    /// Current daily study pace in hours
    pub daily_study_hours: f64,
    /// Total study time in milliseconds
    pub total_study_time: i64,
    /// Number of logged sessions
    pub total_tasks: u32,
}

/// Diagnosis orchestrator.
///
/// Holds the requirement table and the study category label; everything else
/// is derived per call.
#[derive(Debug, Clone)]
pub struct DiagnosisEngine {
    table: RequirementTable,
    study_category: String,
}

impl DiagnosisEngine {
    /// Create an engine with the built-in requirement table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom table and study category label
    pub fn with_table(table: RequirementTable, study_category: impl Into<String>) -> Self {
        Self {
            table,
            study_category: study_category.into(),
        }
    }

    /// The active study category label
    pub fn study_category(&self) -> &str {
        &self.study_category
    }

    /// The active requirement table
    pub fn table(&self) -> &RequirementTable {
        &self.table
    }

    /// Generate a diagnosis for an aggregated task summary.
    ///
    /// `days_until_exam` may be zero or negative (exam today or overdue);
    /// both the requirement lookup and the daily pace handle that without
    /// special-casing by the caller.
    pub fn generate(
        &self,
        analysis: &TaskAnalysis,
        target_exam: &str,
        days_until_exam: i64,
    ) -> Diagnosis {
        let study_time_ms = analysis
            .category_breakdown
            .iter()
            .find(|c| c.category == self.study_category)
            .map(|c| c.time)
            .unwrap_or(0);

        let study_time_ratio =
            safe_div(study_time_ms as f64, analysis.total_time as f64, 0.0) * 100.0;

        let balance = BalanceScore::from_ratio(study_time_ratio);
        let habits = HabitScore::evaluate(
            &analysis.top_tasks,
            analysis.total_tasks,
            analysis.total_time,
        );

        let required_daily_hours = self
            .table
            .resolve_required_daily_hours(target_exam, days_until_exam);
        let achievability =
            AchievabilityScore::evaluate(study_time_ms, days_until_exam, required_daily_hours);

        Diagnosis {
            study_time_balance: balance.render(),
            habit_optimization: habits.render(),
            goal_achievability: achievability.render(),
            metrics: DiagnosisMetrics {
                study_time_ratio,
                daily_study_hours: achievability.daily_study_hours,
                total_study_time: study_time_ms,
                total_tasks: analysis.total_tasks,
            },
        }
    }
}

impl Default for DiagnosisEngine {
    fn default() -> Self {
        Self {
            table: RequirementTable::default(),
            study_category: DEFAULT_STUDY_CATEGORY.to_string(),
        }
    }
}

/// Division with an explicit zero-denominator policy.
///
/// All zero guards in the scoring path go through here (or the habit
/// scorer's floored integer variant) so the fallback behavior is auditable
/// in one place.
pub(crate) fn safe_div(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator == 0.0 {
        fallback
    } else {
        numerator / denominator
    }
}
