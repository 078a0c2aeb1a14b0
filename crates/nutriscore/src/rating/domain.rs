use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for the user a profile belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Fixed-schema record of a food's measured nutritional content, per serving.
///
/// Produced upstream by food identification; the engine consumes it read-only
/// and never resolves foods itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientSnapshot {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    pub sodium_mg: f64,
}

impl NutrientSnapshot {
    /// Reject malformed input before any scoring is attempted. A failure here
    /// means "no rating available", never a default score.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(ValidationError::Negative { field, value });
            }
        }
        Ok(())
    }

    pub(crate) fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("calories", self.calories),
            ("protein_g", self.protein_g),
            ("fat_g", self.fat_g),
            ("carbs_g", self.carbs_g),
            ("fiber_g", self.fiber_g),
            ("sugar_g", self.sugar_g),
            ("sodium_mg", self.sodium_mg),
        ]
    }
}

/// Validation failure raised at the engine boundary for out-of-range nutrient
/// input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("nutrient `{field}` must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("nutrient `{field}` must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Recognized chronic-condition codes stored at the profile boundary.
///
/// Conditions arrive either as tagged codes or buried in the legacy free-text
/// `allergies` field; both routes converge in [`crate::rating::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCode {
    Hypertension,
    Diabetes,
    HeartDisease,
    KidneyDisease,
    Obesity,
    Underweight,
}

/// A user's stored health-relevant attributes.
///
/// Owned by the caller; the engine never persists or mutates it. An empty
/// profile rates every meal on generic quality alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub conditions: Vec<ConditionCode>,
    /// Legacy free-text condition/allergy field, kept as a compatibility shim
    /// for profiles written before tagged condition codes existed.
    #[serde(default)]
    pub allergies: Option<String>,
}

/// Normalized dietary restriction derived from a health profile.
///
/// Every flag targets exactly one nutrient, so two distinct flags never
/// penalize the same breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintFlag {
    /// Daily sodium ceiling in milligrams.
    LowSodium,
    /// Daily sugar ceiling in grams.
    LowSugar,
    /// Daily total-fat ceiling in grams.
    LowFat,
    /// Daily calorie ceiling in kcal.
    LowCalorie,
    /// Daily protein floor in grams.
    HighProtein,
}

impl ConstraintFlag {
    /// Floor flags penalize shortfall; all others penalize overage.
    pub fn is_floor(self) -> bool {
        matches!(self, ConstraintFlag::HighProtein)
    }
}

/// Normalized set of active dietary constraints with their daily targets.
///
/// Recomputed fresh from the profile on every rating call, never cached, so a
/// profile edit is reflected by the very next request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietaryConstraintSet {
    limits: BTreeMap<ConstraintFlag, f64>,
}

impl DietaryConstraintSet {
    /// Record a constraint, keeping the strictest target when the same flag
    /// arrives from several sources (lowest ceiling, highest floor).
    pub fn insert(&mut self, flag: ConstraintFlag, daily_target: f64) {
        if !daily_target.is_finite() || daily_target <= 0.0 {
            return;
        }
        let entry = self.limits.entry(flag).or_insert(daily_target);
        *entry = if flag.is_floor() {
            entry.max(daily_target)
        } else {
            entry.min(daily_target)
        };
    }

    pub fn limit(&self, flag: ConstraintFlag) -> Option<f64> {
        self.limits.get(&flag).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Flags in deterministic order, so the breakdown never depends on
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ConstraintFlag, f64)> + '_ {
        self.limits.iter().map(|(flag, limit)| (*flag, *limit))
    }

    /// True when every constraint in `other` is also active here with an
    /// equal or stricter target.
    pub fn is_superset_of(&self, other: &DietaryConstraintSet) -> bool {
        other.iter().all(|(flag, their_limit)| {
            self.limit(flag).is_some_and(|our_limit| {
                if flag.is_floor() {
                    our_limit >= their_limit
                } else {
                    our_limit <= their_limit
                }
            })
        })
    }
}
