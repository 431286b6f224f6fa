//! Risk profile scoring.

use serde::{Deserialize, Serialize};

/// Inputs gathered by the planner wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerInputs {
    pub age: u32,
    /// Self-reported risk tolerance, 1-10
    pub risk_tolerance: u32,
    pub monthly_investment: f64,
    pub current_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Conservative,
    Moderate,
    Aggressive,
    VeryAggressive,
}

impl RiskLevel {
    pub fn to_label(&self) -> &'static str {
        match self {
            RiskLevel::Conservative => "Conservative",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Aggressive => "Aggressive",
            RiskLevel::VeryAggressive => "Very Aggressive",
        }
    }
}

/// Suggested posture and allocation split (percentages sum to 100)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    pub level: RiskLevel,
    pub description: String,
    pub stock_allocation: u32,
    pub bond_allocation: u32,
    pub gold_allocation: u32,
}

/// Score the inputs and band them into a risk profile.
///
/// Additive scoring: stated tolerance dominates, age shifts capacity up or
/// down, investment cadence and existing savings add smaller bumps.
pub fn risk_profile(inputs: &PlannerInputs) -> RiskProfile {
    let mut score = inputs.risk_tolerance as i32 * 10;

    // Age factor (younger = higher risk capacity)
    score += match inputs.age {
        0..=29 => 20,
        30..=39 => 10,
        40..=49 => 0,
        50..=59 => -10,
        _ => -20,
    };

    // Investment capacity factor
    if inputs.monthly_investment > 10_000.0 {
        score += 15;
    } else if inputs.monthly_investment > 5_000.0 {
        score += 10;
    } else if inputs.monthly_investment > 2_000.0 {
        score += 5;
    }

    // Savings factor
    if inputs.current_savings > 1_000_000.0 {
        score += 10;
    } else if inputs.current_savings > 500_000.0 {
        score += 5;
    }

    profile_for_score(score)
}

fn profile_for_score(score: i32) -> RiskProfile {
    if score >= 80 {
        RiskProfile {
            level: RiskLevel::VeryAggressive,
            description: "High growth potential with higher risk. Suitable for young investors with long-term goals.".to_string(),
            stock_allocation: 80,
            bond_allocation: 10,
            gold_allocation: 10,
        }
    } else if score >= 60 {
        RiskProfile {
            level: RiskLevel::Aggressive,
            description: "Balanced growth approach with moderate risk. Good for investors with medium-term goals.".to_string(),
            stock_allocation: 70,
            bond_allocation: 20,
            gold_allocation: 10,
        }
    } else if score >= 40 {
        RiskProfile {
            level: RiskLevel::Moderate,
            description: "Balanced approach with steady growth. Suitable for investors seeking stability with growth.".to_string(),
            stock_allocation: 50,
            bond_allocation: 35,
            gold_allocation: 15,
        }
    } else {
        RiskProfile {
            level: RiskLevel::Conservative,
            description: "Capital preservation with minimal risk. Ideal for risk-averse investors nearing retirement.".to_string(),
            stock_allocation: 20,
            bond_allocation: 60,
            gold_allocation: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(age: u32, tolerance: u32, monthly: f64, savings: f64) -> PlannerInputs {
        PlannerInputs {
            age,
            risk_tolerance: tolerance,
            monthly_investment: monthly,
            current_savings: savings,
        }
    }

    #[test]
    fn test_young_high_tolerance_is_very_aggressive() {
        let profile = risk_profile(&inputs(25, 8, 15_000.0, 1_500_000.0));
        assert_eq!(profile.level, RiskLevel::VeryAggressive);
        assert_eq!(profile.stock_allocation, 80);
    }

    #[test]
    fn test_mid_career_moderate_tolerance_is_aggressive() {
        // 5*10 + 10 (age 35) + 5 (monthly 3k) = 65
        let profile = risk_profile(&inputs(35, 5, 3_000.0, 100_000.0));
        assert_eq!(profile.level, RiskLevel::Aggressive);
    }

    #[test]
    fn test_older_low_tolerance_is_conservative() {
        let profile = risk_profile(&inputs(65, 2, 1_000.0, 200_000.0));
        assert_eq!(profile.level, RiskLevel::Conservative);
        assert_eq!(profile.bond_allocation, 60);
    }

    #[test]
    fn test_band_boundary_at_forty_is_moderate() {
        // 4*10 + 0 (age 45) = 40, the lower edge of the Moderate band
        let profile = risk_profile(&inputs(45, 4, 500.0, 0.0));
        assert_eq!(profile.level, RiskLevel::Moderate);
    }

    #[test]
    fn test_allocations_always_sum_to_hundred() {
        for score in [-20, 0, 40, 59, 60, 79, 80, 120] {
            let profile = profile_for_score(score);
            assert_eq!(
                profile.stock_allocation + profile.bond_allocation + profile.gold_allocation,
                100
            );
        }
    }
}
