//! Goal achievability scoring.
//!
//! Derives a coarse success probability from the user's current daily study
//! pace versus the daily hours the target exam requires, then maps the
//! probability to one of four bands. The probability is the actual/required
//! ratio as a percentage, clamped to 100.

use serde::{Deserialize, Serialize};

use super::messages;

/// Milliseconds per hour, for daily pace derivation
const MS_PER_HOUR: f64 = 3_600_000.0;

/// Qualitative band for goal achievability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievabilityBand {
    /// Probability 80% or higher
    High,
    /// 60-80%
    Medium,
    /// 30-60%
    Low,
    /// Under 30%
    VeryLow,
}

impl AchievabilityBand {
    /// Select the band for a probability percentage, evaluated high to low.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 80.0 {
            AchievabilityBand::High
        } else if probability >= 60.0 {
            AchievabilityBand::Medium
        } else if probability >= 30.0 {
            AchievabilityBand::Low
        } else {
            AchievabilityBand::VeryLow
        }
    }
}

/// Achievability score with the figures that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievabilityScore {
    /// Selected band
    pub band: AchievabilityBand,
    /// Success probability percentage, clamped to [0, 100]
    pub probability: f64,
    /// Current daily study pace in hours
    pub daily_study_hours: f64,
    /// Daily hours the target exam requires
    pub required_daily_hours: f64,
    /// Shortfall in hours/day; negative means a surplus
    pub gap_hours: f64,
}

impl AchievabilityScore {
    /// Evaluate achievability from total study time and the exam horizon.
    ///
    /// `required_daily_hours` comes from the requirement table, which is
    /// validated to hold only positive values; see
    /// [`RequirementTable::validate`](super::RequirementTable::validate).
    /// An exam today or overdue counts as a one-day horizon.
    pub fn evaluate(study_time_ms: i64, days_until_exam: i64, required_daily_hours: f64) -> Self {
        let effective_days = days_until_exam.max(1) as f64;
        let daily_study_hours = study_time_ms as f64 / effective_days / MS_PER_HOUR;

        let probability = (daily_study_hours / required_daily_hours * 100.0).min(100.0);
        let gap_hours = required_daily_hours - daily_study_hours;

        Self {
            band: AchievabilityBand::from_probability(probability),
            probability,
            daily_study_hours,
            required_daily_hours,
            gap_hours,
        }
    }

    /// Render the report section for this score.
    ///
    /// The Medium and Low messages include the gap figure; High and VeryLow
    /// omit it.
    pub fn render(&self) -> String {
        messages::achievability_message(
            self.band,
            self.probability,
            self.daily_study_hours,
            self.required_daily_hours,
            self.gap_hours,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(
            AchievabilityBand::from_probability(100.0),
            AchievabilityBand::High
        );
        assert_eq!(
            AchievabilityBand::from_probability(80.0),
            AchievabilityBand::High
        );
        assert_eq!(
            AchievabilityBand::from_probability(79.9),
            AchievabilityBand::Medium
        );
        assert_eq!(
            AchievabilityBand::from_probability(60.0),
            AchievabilityBand::Medium
        );
        assert_eq!(
            AchievabilityBand::from_probability(59.9),
            AchievabilityBand::Low
        );
        assert_eq!(
            AchievabilityBand::from_probability(30.0),
            AchievabilityBand::Low
        );
        assert_eq!(
            AchievabilityBand::from_probability(29.9),
            AchievabilityBand::VeryLow
        );
        assert_eq!(
            AchievabilityBand::from_probability(0.0),
            AchievabilityBand::VeryLow
        );
    }

    #[test]
    fn test_probability_clamped_to_100() {
        // 2.0 h/day against 1.5 required would be 133% unclamped
        let study_ms = (2.0 * 90.0 * MS_PER_HOUR) as i64;
        let score = AchievabilityScore::evaluate(study_ms, 90, 1.5);

        assert_eq!(score.probability, 100.0);
        assert_eq!(score.band, AchievabilityBand::High);
        assert!(score.gap_hours < 0.0, "surplus pace should show as negative gap");
    }

    #[test]
    fn test_half_pace_is_low_band() {
        // 3.0 h/day against 6.0 required = 50%
        let study_ms = (3.0 * 100.0 * MS_PER_HOUR) as i64;
        let score = AchievabilityScore::evaluate(study_ms, 100, 6.0);

        assert_eq!(score.probability, 50.0);
        assert_eq!(score.band, AchievabilityBand::Low);
        assert!((score.gap_hours - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_exam_today_counts_as_one_day() {
        let study_ms = (1.5 * MS_PER_HOUR) as i64;
        let today = AchievabilityScore::evaluate(study_ms, 0, 3.0);
        let overdue = AchievabilityScore::evaluate(study_ms, -10, 3.0);

        assert!((today.daily_study_hours - 1.5).abs() < 1e-9);
        assert_eq!(today.daily_study_hours, overdue.daily_study_hours);
    }

    #[test]
    fn test_zero_study_time_is_very_low() {
        let score = AchievabilityScore::evaluate(0, 30, 2.0);
        assert_eq!(score.probability, 0.0);
        assert_eq!(score.band, AchievabilityBand::VeryLow);
    }

    #[test]
    fn test_render_gap_inclusion_by_band() {
        let medium = AchievabilityScore {
            band: AchievabilityBand::Medium,
            probability: 70.0,
            daily_study_hours: 2.1,
            required_daily_hours: 3.0,
            gap_hours: 0.9,
        };
        assert!(medium.render().contains("0.9"));

        let high = AchievabilityScore {
            band: AchievabilityBand::High,
            probability: 100.0,
            daily_study_hours: 4.0,
            required_daily_hours: 3.0,
            gap_hours: -1.0,
        };
        assert!(!high.render().contains("-1.0"));
    }

    proptest! {
        /// The probability never exceeds 100, whatever the pace.
        #[test]
        fn prop_probability_clamp(
            study_hours in 0.0f64..10_000.0,
            days in -30i64..1_000,
            required in 0.5f64..12.0,
        ) {
            let study_ms = (study_hours * MS_PER_HOUR) as i64;
            let score = AchievabilityScore::evaluate(study_ms, days, required);
            prop_assert!(score.probability <= 100.0);
            prop_assert!(score.probability >= 0.0);
        }
    }
}
