use serde::{Deserialize, Serialize};

pub const NEUTRAL_COMPENSATION_SCORE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryInterval {
    Hourly,
    Weekly,
    Monthly,
    Yearly,
}

impl SalaryInterval {
    /// Anything that is not recognisably hourly, weekly or monthly is yearly.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default().to_lowercase();
        if raw.contains("hour") {
            SalaryInterval::Hourly
        } else if raw.contains("month") {
            SalaryInterval::Monthly
        } else if raw.contains("week") {
            SalaryInterval::Weekly
        } else {
            SalaryInterval::Yearly
        }
    }

    pub fn periods_per_year(self) -> f64 {
        match self {
            SalaryInterval::Hourly => 2080.0,
            SalaryInterval::Weekly => 52.0,
            SalaryInterval::Monthly => 12.0,
            SalaryInterval::Yearly => 1.0,
        }
    }
}

/// Score bands, checked top-down with `>=`.
const SALARY_BANDS: &[(f64, u32)] = &[
    (145_000.0, 100),
    (120_000.0, 90),
    (100_000.0, 80),
    (85_000.0, 65),
    (70_000.0, 50),
    (55_000.0, 30),
];
const FLOOR_SCORE: u32 = 15;

/// Midpoint of the range when both bounds are set, else whichever is set,
/// annualized. Zero bounds count as unset.
pub fn annualized_salary(
    salary_min: Option<f64>,
    salary_max: Option<f64>,
    interval: Option<&str>,
) -> Option<f64> {
    let min = salary_min.filter(|v| *v > 0.0);
    let max = salary_max.filter(|v| *v > 0.0);
    let salary = match (min, max) {
        (Some(lo), Some(hi)) => (lo + hi) / 2.0,
        (None, Some(hi)) => hi,
        (Some(lo), None) => lo,
        (None, None) => return None,
    };
    Some(salary * SalaryInterval::parse(interval).periods_per_year())
}

pub fn score_compensation(salary_min: Option<f64>, salary_max: Option<f64>, interval: Option<&str>) -> u32 {
    let Some(annual) = annualized_salary(salary_min, salary_max, interval) else {
        return NEUTRAL_COMPENSATION_SCORE;
    };
    SALARY_BANDS
        .iter()
        .find(|(threshold, _)| annual >= *threshold)
        .map(|(_, score)| *score)
        .unwrap_or(FLOOR_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_is_annualized() {
        assert_eq!(annualized_salary(Some(72.0), None, Some("hourly")), Some(149_760.0));
        assert_eq!(score_compensation(Some(72.0), None, Some("hourly")), 100);
    }

    #[test]
    fn test_monthly_multiplies_by_twelve() {
        assert_eq!(annualized_salary(Some(40_000.0), None, Some("monthly")), Some(480_000.0));
        assert_eq!(score_compensation(Some(40_000.0), None, Some("monthly")), 100);
    }

    #[test]
    fn test_weekly_multiplies_by_fifty_two() {
        assert_eq!(annualized_salary(None, Some(2_000.0), Some("weekly")), Some(104_000.0));
        assert_eq!(score_compensation(None, Some(2_000.0), Some("weekly")), 80);
    }

    #[test]
    fn test_midpoint_of_range() {
        // midpoint 100k
        assert_eq!(score_compensation(Some(90_000.0), Some(110_000.0), Some("yearly")), 80);
    }

    #[test]
    fn test_missing_salary_is_neutral() {
        assert_eq!(score_compensation(None, None, None), 50);
        assert_eq!(score_compensation(Some(0.0), Some(0.0), Some("yearly")), 50);
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        let cases = [
            (145_000.0, 100),
            (144_999.0, 90),
            (120_000.0, 90),
            (100_000.0, 80),
            (85_000.0, 65),
            (70_000.0, 50),
            (55_000.0, 30),
            (54_999.0, 15),
        ];
        for (salary, expected) in cases {
            assert_eq!(
                score_compensation(Some(salary), None, None),
                expected,
                "salary {salary}"
            );
        }
    }

    #[test]
    fn test_unknown_interval_treated_as_yearly() {
        assert_eq!(SalaryInterval::parse(Some("per annum")), SalaryInterval::Yearly);
        assert_eq!(SalaryInterval::parse(Some("Hourly")), SalaryInterval::Hourly);
        assert_eq!(SalaryInterval::parse(None), SalaryInterval::Yearly);
    }
}
