//! Study habit scoring.
//!
//! Evaluates two habit dimensions from the aggregated task summary:
//! - **Diversity**: how many distinct activities the user tracks
//! - **Focus**: average session length across all logged sessions
//!
//! The rendered report is a fixed-order, newline-joined sequence of a
//! diversity section, a focus section, and a line naming the top task with
//! its per-session average. When no top tasks exist at all, the report is a
//! single insufficient-data message and nothing else is evaluated.

use serde::{Deserialize, Serialize};

use super::messages;
use crate::analysis::TopTask;

/// Milliseconds per minute, for session average derivation
const MS_PER_MINUTE: i64 = 60_000;

/// Qualitative band for activity diversity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiversityBand {
    /// 5 or more distinct tracked activities
    Excellent,
    /// 3-4 distinct activities
    Good,
    /// Fewer than 3
    Poor,
}

impl DiversityBand {
    /// Select the band for a distinct-activity count
    pub fn from_count(count: usize) -> Self {
        if count >= 5 {
            DiversityBand::Excellent
        } else if count >= 3 {
            DiversityBand::Good
        } else {
            DiversityBand::Poor
        }
    }
}

/// Qualitative band for average session length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusBand {
    /// 45 minutes or longer on average
    Excellent,
    /// 25-44 minutes
    Good,
    /// Under 25 minutes
    Poor,
}

impl FocusBand {
    /// Select the band for an average session length in minutes
    pub fn from_avg_minutes(avg_minutes: i64) -> Self {
        if avg_minutes >= 45 {
            FocusBand::Excellent
        } else if avg_minutes >= 25 {
            FocusBand::Good
        } else {
            FocusBand::Poor
        }
    }
}

/// The highest-ranked task with its per-session average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTaskSummary {
    /// Task name
    pub name: String,
    /// Average minutes per session, floored
    pub avg_minutes: i64,
}

/// Habit evaluation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HabitScore {
    /// No tracked tasks; nothing to evaluate
    InsufficientData,
    /// Full evaluation
    Scored {
        /// Diversity band from the distinct-activity count
        diversity: DiversityBand,
        /// Number of distinct tracked activities
        task_count: usize,
        /// Focus band from the average session length
        focus: FocusBand,
        /// Average session length in minutes, floored
        avg_session_minutes: i64,
        /// Highest-ranked task
        top_task: TopTaskSummary,
    },
}

impl HabitScore {
    /// Evaluate habits from the top task list and session totals.
    ///
    /// `total_tasks` is the number of logged sessions and `total_time_ms`
    /// the time they cover; their quotient (floored to minutes) is the
    /// average session length. A zero session count yields an average of 0.
    pub fn evaluate(top_tasks: &[TopTask], total_tasks: u32, total_time_ms: i64) -> Self {
        let Some(top) = top_tasks.first() else {
            return HabitScore::InsufficientData;
        };

        let avg_session_minutes = floor_avg_minutes(total_time_ms, total_tasks as i64);

        HabitScore::Scored {
            diversity: DiversityBand::from_count(top_tasks.len()),
            task_count: top_tasks.len(),
            focus: FocusBand::from_avg_minutes(avg_session_minutes),
            avg_session_minutes,
            top_task: TopTaskSummary {
                name: top.name.clone(),
                avg_minutes: floor_avg_minutes(top.total_time, top.sessions as i64),
            },
        }
    }

    /// Render the multi-line habit report section
    pub fn render(&self) -> String {
        match self {
            HabitScore::InsufficientData => messages::insufficient_data_message().to_string(),
            HabitScore::Scored {
                diversity,
                task_count,
                focus,
                avg_session_minutes,
                top_task,
            } => [
                messages::diversity_message(*diversity, *task_count),
                messages::focus_message(*focus, *avg_session_minutes),
                messages::top_task_message(&top_task.name, top_task.avg_minutes),
            ]
            .join("\n"),
        }
    }
}

/// Floored average minutes with an explicit zero-denominator policy.
///
/// Aggregated totals are non-negative, so integer division floors.
fn floor_avg_minutes(total_ms: i64, count: i64) -> i64 {
    if count <= 0 {
        return 0;
    }
    total_ms / count / MS_PER_MINUTE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_task(name: &str, total_time: i64, sessions: u32) -> TopTask {
        TopTask {
            name: name.to_string(),
            total_time,
            sessions,
        }
    }

    #[test]
    fn test_diversity_band_boundaries() {
        assert_eq!(DiversityBand::from_count(5), DiversityBand::Excellent);
        assert_eq!(DiversityBand::from_count(7), DiversityBand::Excellent);
        assert_eq!(DiversityBand::from_count(4), DiversityBand::Good);
        assert_eq!(DiversityBand::from_count(3), DiversityBand::Good);
        assert_eq!(DiversityBand::from_count(2), DiversityBand::Poor);
        assert_eq!(DiversityBand::from_count(1), DiversityBand::Poor);
    }

    #[test]
    fn test_focus_band_boundaries() {
        assert_eq!(FocusBand::from_avg_minutes(45), FocusBand::Excellent);
        assert_eq!(FocusBand::from_avg_minutes(90), FocusBand::Excellent);
        assert_eq!(FocusBand::from_avg_minutes(44), FocusBand::Good);
        assert_eq!(FocusBand::from_avg_minutes(25), FocusBand::Good);
        assert_eq!(FocusBand::from_avg_minutes(24), FocusBand::Poor);
        assert_eq!(FocusBand::from_avg_minutes(0), FocusBand::Poor);
    }

    #[test]
    fn test_empty_top_tasks_short_circuits() {
        // Insufficient data regardless of the other arguments
        assert_eq!(
            HabitScore::evaluate(&[], 10, 18_000_000),
            HabitScore::InsufficientData
        );
        assert_eq!(HabitScore::evaluate(&[], 0, 0), HabitScore::InsufficientData);
    }

    #[test]
    fn test_insufficient_data_renders_single_message() {
        let rendered = HabitScore::InsufficientData.render();
        assert!(!rendered.contains('\n'));
        assert!(!rendered.is_empty());
    }

    #[test]
    fn test_two_tasks_thirty_minute_average() {
        // 18,000,000 ms over 10 sessions = 1800s = 30 min average
        let tasks = vec![
            top_task("수학", 10_000_000, 5),
            top_task("영어", 8_000_000, 5),
        ];
        let score = HabitScore::evaluate(&tasks, 10, 18_000_000);

        match score {
            HabitScore::Scored {
                diversity,
                focus,
                avg_session_minutes,
                ..
            } => {
                assert_eq!(diversity, DiversityBand::Poor);
                assert_eq!(focus, FocusBand::Good);
                assert_eq!(avg_session_minutes, 30);
            }
            other => panic!("expected scored habits, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_total_tasks_yields_zero_average() {
        let tasks = vec![top_task("수학", 10_000_000, 5)];
        let score = HabitScore::evaluate(&tasks, 0, 10_000_000);

        match score {
            HabitScore::Scored {
                avg_session_minutes,
                focus,
                ..
            } => {
                assert_eq!(avg_session_minutes, 0);
                assert_eq!(focus, FocusBand::Poor);
            }
            other => panic!("expected scored habits, got {:?}", other),
        }
    }

    #[test]
    fn test_top_task_per_session_average_is_floored() {
        // 5,000,000 ms over 3 sessions = 27.7 min -> 27
        let tasks = vec![top_task("국어", 5_000_000, 3)];
        let score = HabitScore::evaluate(&tasks, 3, 5_000_000);

        match score {
            HabitScore::Scored { top_task, .. } => {
                assert_eq!(top_task.name, "국어");
                assert_eq!(top_task.avg_minutes, 27);
            }
            other => panic!("expected scored habits, got {:?}", other),
        }
    }

    #[test]
    fn test_render_section_order() {
        let tasks = vec![
            top_task("수학", 10_000_000, 5),
            top_task("영어", 8_000_000, 5),
            top_task("국어", 4_000_000, 2),
        ];
        let rendered = HabitScore::evaluate(&tasks, 12, 22_000_000).render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        // Top-task line is last and names the highest-ranked task
        assert!(lines[2].contains("수학"));
    }

    #[test]
    fn test_floor_avg_minutes_guard() {
        assert_eq!(floor_avg_minutes(18_000_000, 0), 0);
        assert_eq!(floor_avg_minutes(18_000_000, 10), 30);
        assert_eq!(floor_avg_minutes(0, 10), 0);
    }
}
