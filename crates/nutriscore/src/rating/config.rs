use serde::{Deserialize, Serialize};

/// Versioned weighting tables for the rating engine.
///
/// The tables are explicit data passed into [`super::RatingEngine`] rather
/// than embedded constants, so a weighting revision can be reproduced in
/// tests and rolled out independently of the code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Revision label recorded with stored ratings, if the caller keeps any.
    pub version: String,
    pub base: BaseWeights,
    pub adjustments: AdjustmentWeights,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            version: "2026-08".to_string(),
            base: BaseWeights::default(),
            adjustments: AdjustmentWeights::default(),
        }
    }
}

/// Weights and reference values for the user-independent base score.
///
/// Calorie-share targets follow the WHO macronutrient distribution (protein
/// ~15% of energy, fat <= 35%, carbohydrate <= 65%); sugar and sodium
/// references are the WHO daily guidance values the micro component grades
/// against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWeights {
    /// Share of the 0-100 base scale carried by macro balance.
    pub macro_weight: f64,
    /// Share of the 0-100 base scale carried by micro quality.
    pub micro_weight: f64,
    /// Calorie share from protein that earns full marks.
    pub protein_share_target: f64,
    /// Calorie share from fat above which the fat sub-score decays.
    pub fat_share_ceiling: f64,
    /// Calorie share from carbohydrate above which the carb sub-score decays.
    pub carb_share_ceiling: f64,
    /// Per-serving calorie level where the density penalty starts, in kcal.
    pub calorie_reference: f64,
    /// Calories past the reference over which the density sub-score falls to
    /// zero.
    pub calorie_span: f64,
    /// Per-serving fiber that earns the full fiber sub-score, in grams.
    pub fiber_target_g: f64,
    /// Daily free-sugar reference the sugar sub-score grades against.
    pub sugar_reference_g: f64,
    /// Daily sodium reference the sodium sub-score grades against.
    pub sodium_reference_mg: f64,
}

impl Default for BaseWeights {
    fn default() -> Self {
        Self {
            macro_weight: 60.0,
            micro_weight: 40.0,
            protein_share_target: 0.15,
            fat_share_ceiling: 0.35,
            carb_share_ceiling: 0.65,
            calorie_reference: 600.0,
            calorie_span: 600.0,
            fiber_target_g: 8.0,
            sugar_reference_g: 25.0,
            sodium_reference_mg: 2000.0,
        }
    }
}

/// Weights for constraint-specific penalties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentWeights {
    /// Points deducted per unit of overage ratio (actual/target - 1).
    pub penalty_per_overage: f64,
    /// Smallest penalty applied once a target is breached at all.
    pub min_penalty: f64,
    /// Cap keeping any single constraint from forcing the score negative on
    /// its own.
    pub max_penalty: f64,
    /// Share of a daily target attributed to a single meal before comparison.
    /// Falls back to one third when set to a degenerate value.
    pub meal_fraction: f64,
}

pub(crate) const DEFAULT_MEAL_FRACTION: f64 = 1.0 / 3.0;

impl AdjustmentWeights {
    /// Sanitized per-meal share of a daily target.
    pub fn meal_share(&self) -> f64 {
        if self.meal_fraction.is_finite() && self.meal_fraction > 0.0 && self.meal_fraction <= 1.0 {
            self.meal_fraction
        } else {
            DEFAULT_MEAL_FRACTION
        }
    }
}

impl Default for AdjustmentWeights {
    fn default() -> Self {
        Self {
            penalty_per_overage: 25.0,
            min_penalty: 2.0,
            max_penalty: 30.0,
            meal_fraction: DEFAULT_MEAL_FRACTION,
        }
    }
}
