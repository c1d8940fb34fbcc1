//! Exam requirement table.
//!
//! Static mapping from exam-name keyword to the daily study hours required
//! under a long vs short preparation horizon. Entries are kept as an ordered
//! sequence: keywords are matched as case-insensitive substrings of the exam
//! name, in table order, and the first match wins. A plain map would lose the
//! iteration order and silently change which keyword governs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Required daily study hours for one exam keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRequirement {
    /// Keyword matched against the lower-cased exam name
    pub keyword: String,
    /// Required hours/day when more than `threshold_days` remain
    pub long_hours: f64,
    /// Required hours/day when `threshold_days` or fewer remain
    pub short_hours: f64,
    /// Day count separating the long and short horizons
    pub threshold_days: i64,
}

impl ExamRequirement {
    /// Create a new requirement entry
    pub fn new(
        keyword: impl Into<String>,
        long_hours: f64,
        short_hours: f64,
        threshold_days: i64,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            long_hours,
            short_hours,
            threshold_days,
        }
    }

    /// Select the horizon-appropriate hours for the given day count.
    ///
    /// The comparison is strict: `days_until_exam` equal to the threshold
    /// falls on the short horizon, as does an exam today or in the past.
    pub fn hours_for(&self, days_until_exam: i64) -> f64 {
        if days_until_exam > self.threshold_days {
            self.long_hours
        } else {
            self.short_hours
        }
    }
}

/// Fallback requirement used when no keyword matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultRequirement {
    /// Required hours/day when more than `threshold_days` remain
    pub long_hours: f64,
    /// Required hours/day when `threshold_days` or fewer remain
    pub short_hours: f64,
    /// Day count separating the long and short horizons
    pub threshold_days: i64,
}

impl DefaultRequirement {
    fn hours_for(&self, days_until_exam: i64) -> f64 {
        if days_until_exam > self.threshold_days {
            self.long_hours
        } else {
            self.short_hours
        }
    }
}

impl Default for DefaultRequirement {
    fn default() -> Self {
        Self {
            long_hours: 2.0,
            short_hours: 3.0,
            threshold_days: 30,
        }
    }
}

/// Ordered exam requirement table with a fallback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementTable {
    /// Keyword entries, checked in order; first substring match wins
    #[serde(default = "builtin_entries")]
    pub entries: Vec<ExamRequirement>,
    /// Fallback applied when no keyword matches
    #[serde(default)]
    pub fallback: DefaultRequirement,
}

impl RequirementTable {
    /// Create a table from explicit entries and a fallback
    pub fn new(entries: Vec<ExamRequirement>, fallback: DefaultRequirement) -> Self {
        Self { entries, fallback }
    }

    /// Resolve the required daily study hours for an exam.
    ///
    /// The exam name is lower-cased and entries are scanned in table order;
    /// the first entry whose keyword is a substring of the name governs.
    /// Unmatched names use the fallback entry with the same long/short
    /// horizon selection.
    pub fn resolve_required_daily_hours(&self, exam_name: &str, days_until_exam: i64) -> f64 {
        let lowered = exam_name.to_lowercase();

        for entry in &self.entries {
            if lowered.contains(&entry.keyword.to_lowercase()) {
                return entry.hours_for(days_until_exam);
            }
        }

        self.fallback.hours_for(days_until_exam)
    }

    /// Validate the configuration invariant that every requirement resolves
    /// to a positive number of hours.
    ///
    /// The achievability scorer divides by the resolved hours; a zero or
    /// negative value in the table is a configuration error, never a runtime
    /// case to degrade from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.entries {
            if entry.long_hours <= 0.0 || entry.short_hours <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("requirements.entries.{}", entry.keyword),
                    message: format!(
                        "required daily hours must be positive, got long={} short={}",
                        entry.long_hours, entry.short_hours
                    ),
                });
            }
        }

        if self.fallback.long_hours <= 0.0 || self.fallback.short_hours <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "requirements.fallback".to_string(),
                message: format!(
                    "required daily hours must be positive, got long={} short={}",
                    self.fallback.long_hours, self.fallback.short_hours
                ),
            });
        }

        Ok(())
    }
}

impl Default for RequirementTable {
    fn default() -> Self {
        Self {
            entries: builtin_entries(),
            fallback: DefaultRequirement::default(),
        }
    }
}

/// Built-in requirement entries for common Korean exams.
fn builtin_entries() -> Vec<ExamRequirement> {
    vec![
        ExamRequirement::new("수능", 4.0, 8.0, 180),
        ExamRequirement::new("토익", 1.5, 3.0, 60),
        ExamRequirement::new("토플", 2.0, 4.0, 60),
        ExamRequirement::new("공무원", 4.0, 6.0, 180),
        ExamRequirement::new("자격증", 1.0, 2.0, 30),
    ]
}
