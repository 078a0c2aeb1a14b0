use super::config::AdjustmentWeights;
use super::domain::{ConstraintFlag, DietaryConstraintSet, NutrientSnapshot};
use super::{ScoreComponent, ScoreFactor};

pub(crate) struct ConstraintAdjustments {
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) suggestions: Vec<String>,
    pub(crate) penalty_total: f64,
}

/// Apply every active constraint against the per-meal share of its daily
/// target.
///
/// Only breaches incur penalties; a constraint whose nutrient stays under
/// target contributes exactly zero, so removing a constraint can never lower
/// the score for the same nutrients. Penalties from multiple flags sum.
pub(crate) fn apply(
    nutrients: &NutrientSnapshot,
    constraints: &DietaryConstraintSet,
    weights: &AdjustmentWeights,
) -> ConstraintAdjustments {
    let mut components = Vec::new();
    let mut suggestions = Vec::new();
    let mut penalty_total = 0.0;
    let meal_share = weights.meal_share();

    for (flag, daily_target) in constraints.iter() {
        let target = daily_target * meal_share;
        if target <= 0.0 {
            continue;
        }

        let actual = observed(flag, nutrients);
        let breach_ratio = if flag.is_floor() {
            // Shortfall below the floor, as a fraction of the target.
            if actual < target {
                1.0 - actual / target
            } else {
                0.0
            }
        } else if actual > target {
            actual / target - 1.0
        } else {
            0.0
        };

        if breach_ratio <= 0.0 {
            continue;
        }

        let penalty = (weights.penalty_per_overage * breach_ratio)
            .max(weights.min_penalty)
            .min(weights.max_penalty);
        penalty_total += penalty;

        components.push(ScoreComponent {
            factor: factor_for(flag),
            delta: -penalty,
            reason: breach_reason(flag, actual, target, daily_target),
        });
        suggestions.push(suggestion_for(flag).to_string());
    }

    ConstraintAdjustments {
        components,
        suggestions,
        penalty_total,
    }
}

fn observed(flag: ConstraintFlag, nutrients: &NutrientSnapshot) -> f64 {
    match flag {
        ConstraintFlag::LowSodium => nutrients.sodium_mg,
        ConstraintFlag::LowSugar => nutrients.sugar_g,
        ConstraintFlag::LowFat => nutrients.fat_g,
        ConstraintFlag::LowCalorie => nutrients.calories,
        ConstraintFlag::HighProtein => nutrients.protein_g,
    }
}

fn factor_for(flag: ConstraintFlag) -> ScoreFactor {
    match flag {
        ConstraintFlag::LowSodium => ScoreFactor::SodiumLimit,
        ConstraintFlag::LowSugar => ScoreFactor::SugarLimit,
        ConstraintFlag::LowFat => ScoreFactor::FatLimit,
        ConstraintFlag::LowCalorie => ScoreFactor::CalorieLimit,
        ConstraintFlag::HighProtein => ScoreFactor::ProteinFloor,
    }
}

fn breach_reason(flag: ConstraintFlag, actual: f64, target: f64, daily_target: f64) -> String {
    match flag {
        ConstraintFlag::LowSodium => format!(
            "sodium {actual:.0} mg exceeds the {target:.0} mg meal share of a {daily_target:.0} mg/day limit"
        ),
        ConstraintFlag::LowSugar => format!(
            "sugar {actual:.1} g exceeds the {target:.1} g meal share of a {daily_target:.0} g/day limit"
        ),
        ConstraintFlag::LowFat => format!(
            "fat {actual:.1} g exceeds the {target:.1} g meal share of a {daily_target:.0} g/day limit"
        ),
        ConstraintFlag::LowCalorie => format!(
            "{actual:.0} kcal exceeds the {target:.0} kcal meal share of a {daily_target:.0} kcal/day limit"
        ),
        ConstraintFlag::HighProtein => format!(
            "protein {actual:.1} g falls short of the {target:.1} g meal share of a {daily_target:.0} g/day target"
        ),
    }
}

fn suggestion_for(flag: ConstraintFlag) -> &'static str {
    match flag {
        ConstraintFlag::LowSodium => "Choose low-sodium options and avoid processed meats.",
        ConstraintFlag::LowSugar => "Choose unsweetened alternatives where possible.",
        ConstraintFlag::LowFat => "Reduce cheese, oils, or creamy dressings.",
        ConstraintFlag::LowCalorie => {
            "Opt for lean protein and vegetables to reduce calorie density."
        }
        ConstraintFlag::HighProtein => "Add a lean protein source to this meal.",
    }
}
