//! Study/total time balance scoring.
//!
//! Converts the share of tracked time spent on the study category into one
//! of four qualitative bands. The ratio is a percentage in [0, 100]; the
//! bands partition that range with inclusive lower bounds at 20, 40 and 70.

use serde::{Deserialize, Serialize};

use super::messages;

/// Qualitative band for the study time ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceBand {
    /// 70% or more of tracked time is study time (burnout risk)
    VeryHigh,
    /// 40-70%, a sustainable balance
    Optimal,
    /// 20-40%, study time is on the low side
    Low,
    /// Under 20%
    VeryLow,
}

impl BalanceBand {
    /// Select the band for a ratio percentage, evaluated high to low.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 70.0 {
            BalanceBand::VeryHigh
        } else if ratio >= 40.0 {
            BalanceBand::Optimal
        } else if ratio >= 20.0 {
            BalanceBand::Low
        } else {
            BalanceBand::VeryLow
        }
    }
}

/// Balance score with the ratio that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceScore {
    /// Selected band
    pub band: BalanceBand,
    /// Study time ratio as a percentage (0-100)
    pub ratio: f64,
}

impl BalanceScore {
    /// Score a study time ratio percentage
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            band: BalanceBand::from_ratio(ratio),
            ratio,
        }
    }

    /// Render the report section for this score
    pub fn render(&self) -> String {
        messages::balance_message(self.band, self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(BalanceBand::from_ratio(100.0), BalanceBand::VeryHigh);
        assert_eq!(BalanceBand::from_ratio(70.0), BalanceBand::VeryHigh);
        assert_eq!(BalanceBand::from_ratio(69.9), BalanceBand::Optimal);
        assert_eq!(BalanceBand::from_ratio(40.0), BalanceBand::Optimal);
        assert_eq!(BalanceBand::from_ratio(39.9), BalanceBand::Low);
        assert_eq!(BalanceBand::from_ratio(20.0), BalanceBand::Low);
        assert_eq!(BalanceBand::from_ratio(19.9), BalanceBand::VeryLow);
        assert_eq!(BalanceBand::from_ratio(0.0), BalanceBand::VeryLow);
    }

    #[test]
    fn test_fifty_percent_is_optimal() {
        let score = BalanceScore::from_ratio(50.0);
        assert_eq!(score.band, BalanceBand::Optimal);
    }

    #[test]
    fn test_render_mentions_ratio() {
        let score = BalanceScore::from_ratio(50.0);
        assert!(score.render().contains("50"));
    }

    fn rank(band: BalanceBand) -> u8 {
        match band {
            BalanceBand::VeryLow => 0,
            BalanceBand::Low => 1,
            BalanceBand::Optimal => 2,
            BalanceBand::VeryHigh => 3,
        }
    }

    proptest! {
        /// Band selection is monotone in the ratio across [0, 100].
        #[test]
        fn prop_band_is_monotone(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(BalanceBand::from_ratio(lo)) <= rank(BalanceBand::from_ratio(hi)));
        }
    }
}
