use super::config::BaseWeights;
use super::domain::NutrientSnapshot;
use super::{ScoreComponent, ScoreFactor};

const PROTEIN_KCAL_PER_G: f64 = 4.0;
const FAT_KCAL_PER_G: f64 = 9.0;
const CARB_KCAL_PER_G: f64 = 4.0;

/// Generic nutritional-quality score, independent of any user.
///
/// Each sub-score is clamped to [0, 1] before the component weights are
/// applied, so one extreme nutrient value cannot dominate the total.
pub(crate) fn base_score(
    nutrients: &NutrientSnapshot,
    weights: &BaseWeights,
) -> (Vec<ScoreComponent>, f64) {
    let macro_points = macro_balance(nutrients, weights) * weights.macro_weight;
    let micro_points = micro_quality(nutrients, weights) * weights.micro_weight;

    let components = vec![
        ScoreComponent {
            factor: ScoreFactor::MacroBalance,
            delta: macro_points,
            reason: format!(
                "protein {:.0}% of calories, {:.0} kcal per serving",
                protein_share(nutrients) * 100.0,
                nutrients.calories
            ),
        },
        ScoreComponent {
            factor: ScoreFactor::MicroQuality,
            delta: micro_points,
            reason: format!(
                "fiber {:.1} g, sugar {:.1} g, sodium {:.0} mg",
                nutrients.fiber_g, nutrients.sugar_g, nutrients.sodium_mg
            ),
        },
    ];

    (components, macro_points + micro_points)
}

/// Rewards protein density and penalizes calorie density plus fat/carb shares
/// beyond their ceilings. A zero-calorie serving has nothing to balance: the
/// protein sub-score is zero and the density sub-score full.
fn macro_balance(nutrients: &NutrientSnapshot, weights: &BaseWeights) -> f64 {
    let protein_sub = if nutrients.calories > 0.0 {
        unit(protein_share(nutrients) / weights.protein_share_target)
    } else {
        0.0
    };

    let density_sub = 1.0
        - unit((nutrients.calories - weights.calorie_reference) / weights.calorie_span);

    let fat_sub = if nutrients.calories > 0.0 {
        let share = nutrients.fat_g * FAT_KCAL_PER_G / nutrients.calories;
        1.0 - unit((share - weights.fat_share_ceiling) / weights.fat_share_ceiling)
    } else {
        1.0
    };

    let carb_sub = if nutrients.calories > 0.0 {
        let share = nutrients.carbs_g * CARB_KCAL_PER_G / nutrients.calories;
        1.0 - unit((share - weights.carb_share_ceiling) / weights.carb_share_ceiling)
    } else {
        1.0
    };

    (protein_sub + density_sub + fat_sub + carb_sub) / 4.0
}

/// Rewards fiber toward the per-serving target, penalizes sugar and sodium
/// relative to their daily reference values.
fn micro_quality(nutrients: &NutrientSnapshot, weights: &BaseWeights) -> f64 {
    let fiber_sub = unit(nutrients.fiber_g / weights.fiber_target_g);
    let sugar_sub = 1.0 - unit(nutrients.sugar_g / weights.sugar_reference_g);
    let sodium_sub = 1.0 - unit(nutrients.sodium_mg / weights.sodium_reference_mg);

    (fiber_sub + sugar_sub + sodium_sub) / 3.0
}

fn protein_share(nutrients: &NutrientSnapshot) -> f64 {
    if nutrients.calories > 0.0 {
        nutrients.protein_g * PROTEIN_KCAL_PER_G / nutrients.calories
    } else {
        0.0
    }
}

fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
