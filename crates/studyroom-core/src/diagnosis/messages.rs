//! Report copy for the diagnosis engine.
//!
//! Every band message lives here as a pure formatting function taking
//! exactly the numbers it interpolates. Keeping the prose out of the
//! scorers lets tests assert on band selection without parsing Korean copy.

use super::achievability::AchievabilityBand;
use super::balance::BalanceBand;
use super::habits::{DiversityBand, FocusBand};

/// Study time balance section
pub(crate) fn balance_message(band: BalanceBand, ratio: f64) -> String {
    match band {
        BalanceBand::VeryHigh => format!(
            "⚠️ 전체 시간 중 공부 시간 비율이 {ratio:.0}%로 매우 높습니다. \
             번아웃 위험이 있으니 휴식과 회복 시간을 의식적으로 확보하세요."
        ),
        BalanceBand::Optimal => format!(
            "✅ 공부 시간 비율이 {ratio:.0}%로 공부와 생활의 균형이 잘 잡혀 있습니다. \
             지금의 페이스를 유지하세요."
        ),
        BalanceBand::Low => format!(
            "공부 시간 비율이 {ratio:.0}%로 다소 낮은 편입니다. \
             하루 일정에서 공부 시간을 조금 더 확보해 보세요."
        ),
        BalanceBand::VeryLow => format!(
            "🚨 공부 시간 비율이 {ratio:.0}%에 불과합니다. \
             목표 달성을 위해 공부 시간을 크게 늘릴 필요가 있습니다."
        ),
    }
}

/// Habit section when there is nothing to evaluate
pub(crate) fn insufficient_data_message() -> &'static str {
    "아직 기록된 활동이 충분하지 않아 학습 습관을 분석할 수 없습니다. 며칠 더 기록을 쌓은 뒤 다시 진단해 보세요."
}

/// Habit section: activity diversity line
pub(crate) fn diversity_message(band: DiversityBand, task_count: usize) -> String {
    match band {
        DiversityBand::Excellent => format!(
            "📚 {task_count}개의 다양한 활동을 기록하고 있습니다. 과목 간 균형이 훌륭합니다."
        ),
        DiversityBand::Good => format!(
            "{task_count}개의 활동을 기록하고 있습니다. 적절한 수준이지만 과목을 한두 개 더 나눠 보면 좋습니다."
        ),
        DiversityBand::Poor => format!(
            "기록된 활동이 {task_count}개뿐입니다. 과목별로 나누어 기록하면 더 정확한 진단을 받을 수 있습니다."
        ),
    }
}

/// Habit section: focus (average session length) line
pub(crate) fn focus_message(band: FocusBand, avg_minutes: i64) -> String {
    match band {
        FocusBand::Excellent => format!(
            "⏱️ 세션당 평균 {avg_minutes}분으로 깊은 집중을 유지하고 있습니다."
        ),
        FocusBand::Good => format!(
            "세션당 평균 {avg_minutes}분으로 양호한 집중력입니다. 45분 이상을 목표로 해 보세요."
        ),
        FocusBand::Poor => format!(
            "세션당 평균 {avg_minutes}분으로 집중 시간이 짧습니다. 한 번에 25분 이상 이어서 공부하는 연습이 필요합니다."
        ),
    }
}

/// Habit section: highest-ranked task line
pub(crate) fn top_task_message(name: &str, avg_minutes: i64) -> String {
    format!("가장 많은 시간을 들인 활동은 '{name}'이며, 세션당 평균 {avg_minutes}분을 투자했습니다.")
}

/// Goal achievability section.
///
/// Medium and Low include the gap figure; High and VeryLow omit it.
pub(crate) fn achievability_message(
    band: AchievabilityBand,
    probability: f64,
    daily_study_hours: f64,
    required_daily_hours: f64,
    gap_hours: f64,
) -> String {
    match band {
        AchievabilityBand::High => format!(
            "🎯 목표 달성 가능성이 {probability:.0}%로 높습니다. \
             현재 하루 평균 {daily_study_hours:.1}시간씩 공부하고 있어 \
             필요한 {required_daily_hours:.1}시간을 충분히 채우고 있습니다."
        ),
        AchievabilityBand::Medium => format!(
            "목표 달성 가능성은 {probability:.0}%입니다. \
             하루 평균 {daily_study_hours:.1}시간 공부 중이며, \
             필요한 {required_daily_hours:.1}시간까지 {gap_hours:.1}시간이 부족합니다."
        ),
        AchievabilityBand::Low => format!(
            "⚠️ 목표 달성 가능성이 {probability:.0}%로 낮습니다. \
             하루 평균 {daily_study_hours:.1}시간으로는 부족하며, \
             필요한 {required_daily_hours:.1}시간까지 {gap_hours:.1}시간을 더 확보해야 합니다."
        ),
        AchievabilityBand::VeryLow => format!(
            "🚨 목표 달성 가능성이 {probability:.0}%로 매우 낮습니다. \
             하루 평균 {daily_study_hours:.1}시간은 필요한 {required_daily_hours:.1}시간에 크게 못 미칩니다. \
             학습 계획을 다시 세워 보세요."
        ),
    }
}
