use serde::{Deserialize, Serialize};

use crate::ranking::models::{DimensionScores, Priority};

/// Dimension weights for the composite total, in hundredths (30 = 0.30).
/// Integer weights keep the weighted sum exact, so half-way totals such as
/// 1.35 round the same way every time. The defaults sum to 100, which keeps
/// the total inside 0–100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: u32,
    pub pathway: u32,
    pub interview: u32,
    pub compensation: u32,
    pub reputation: u32,
    pub success: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 30,
            pathway: 25,
            interview: 15,
            compensation: 10,
            reputation: 10,
            success: 10,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> u32 {
        self.skills + self.pathway + self.interview + self.compensation + self.reputation + self.success
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for PriorityThresholds {
    fn default() -> Self {
        Self {
            high: 75.0,
            medium: 55.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub priority: PriorityThresholds,
}

/// Weighted sum rounded half away from zero to one decimal.
///
/// The sum is accumulated in hundredths of a point and rounded on the
/// integer, so the result never depends on binary float representation.
pub fn compute_total(dims: &DimensionScores, weights: &ScoringWeights) -> f64 {
    let hundredths = u64::from(dims.skills) * u64::from(weights.skills)
        + u64::from(dims.pathway) * u64::from(weights.pathway)
        + u64::from(dims.interview) * u64::from(weights.interview)
        + u64::from(dims.compensation) * u64::from(weights.compensation)
        + u64::from(dims.reputation) * u64::from(weights.reputation)
        + u64::from(dims.success) * u64::from(weights.success);
    let tenths = (hundredths + 5) / 10;
    tenths as f64 / 10.0
}

pub fn priority_for(total: f64, thresholds: &PriorityThresholds) -> Priority {
    if total >= thresholds.high {
        Priority::High
    } else if total >= thresholds.medium {
        Priority::Medium
    } else {
        Priority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(values: [u32; 6]) -> DimensionScores {
        let [skills, pathway, interview, compensation, reputation, success] = values;
        DimensionScores {
            skills,
            pathway,
            interview,
            compensation,
            reputation,
            success,
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert_eq!(ScoringWeights::default().sum(), 100);
    }

    #[test]
    fn test_total_all_hundred() {
        let total = compute_total(&dims([100; 6]), &ScoringWeights::default());
        assert!((total - 100.0).abs() < 1e-9, "total was {total}");
    }

    #[test]
    fn test_total_weighted_and_rounded() {
        // 50*.3 + 77*.25 + 33*.15 + 80*.1 + 90*.1 + 41*.1 = 15 + 19.25 + 4.95 + 8 + 9 + 4.1 = 60.3
        let total = compute_total(&dims([50, 77, 33, 80, 90, 41]), &ScoringWeights::default());
        assert_eq!(total, 60.3);
    }

    #[test]
    fn test_half_way_totals_round_up() {
        let weights = ScoringWeights::default();
        // 9 * 0.15 = 1.35 exactly
        assert_eq!(compute_total(&dims([0, 0, 9, 0, 0, 0]), &weights), 1.4);
        // 1 * 0.25 = 0.25
        assert_eq!(compute_total(&dims([0, 1, 0, 0, 0, 0]), &weights), 0.3);
        // 30 + 24.5 + 0.75 + 10 + 9 + 3.5 = 77.75
        assert_eq!(compute_total(&dims([100, 98, 5, 100, 90, 35]), &weights), 77.8);
    }

    #[test]
    fn test_total_matches_exact_hundredths_everywhere() {
        let weights = ScoringWeights::default();
        for skills in 0..=100u32 {
            for interview in 0..=100u32 {
                for rest in [0u32, 1, 33, 77, 100] {
                    let d = dims([skills, rest, interview, rest, rest, rest]);
                    let hundredths = skills * 30 + rest * 25 + interview * 15 + rest * 30;
                    let expected = ((hundredths + 5) / 10) as f64 / 10.0;
                    let total = compute_total(&d, &weights);
                    assert_eq!(total, expected, "dims {d:?}");
                    assert!((0.0..=100.0).contains(&total));
                }
            }
        }
    }

    #[test]
    fn test_total_zero() {
        assert_eq!(compute_total(&dims([0; 6]), &ScoringWeights::default()), 0.0);
    }

    #[test]
    fn test_priority_thresholds_inclusive() {
        let t = PriorityThresholds::default();
        assert_eq!(priority_for(75.0, &t), Priority::High);
        assert_eq!(priority_for(74.9, &t), Priority::Medium);
        assert_eq!(priority_for(55.0, &t), Priority::Medium);
        assert_eq!(priority_for(54.9, &t), Priority::Low);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            skills: 100,
            pathway: 0,
            interview: 0,
            compensation: 0,
            reputation: 0,
            success: 0,
        };
        assert_eq!(compute_total(&dims([42, 100, 100, 100, 100, 100]), &weights), 42.0);
    }
}
