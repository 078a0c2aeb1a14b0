//! Personalized nutrition rating: profile interpretation and meal scoring.
//!
//! Control flow is two pure stages: [`normalize`] converts a raw
//! [`HealthProfile`] into a [`DietaryConstraintSet`], then
//! [`RatingEngine::rate`] combines a user-independent base score with
//! constraint penalties into a bounded, explainable [`RatingResult`]. Neither
//! stage touches storage or shared state, so calls are safe to run
//! concurrently from any number of request handlers.

mod adjust;
mod config;
pub mod domain;
pub mod import;
mod profile;
pub mod repository;
pub mod router;
mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::{AdjustmentWeights, BaseWeights, RatingConfig};
pub use domain::{
    ConditionCode, ConstraintFlag, DietaryConstraintSet, Gender, HealthProfile, NutrientSnapshot,
    UserId, ValidationError,
};
pub use profile::normalize;
pub use repository::{ProfileRecord, ProfileRepository, RepositoryError};
pub use router::rating_router;
pub use service::{MealRating, MealRatingService, ServiceError};

use serde::{Deserialize, Serialize};

/// Stateless engine applying a weighting configuration to nutrient snapshots.
pub struct RatingEngine {
    config: RatingConfig,
}

impl RatingEngine {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Score a meal for the given constraint set.
    ///
    /// Rejects malformed nutrient input before any scoring; over well-formed
    /// input the computation is total and deterministic.
    pub fn rate(
        &self,
        nutrients: &NutrientSnapshot,
        constraints: &DietaryConstraintSet,
    ) -> Result<RatingResult, ValidationError> {
        nutrients.validate()?;

        let (mut breakdown, base) = rules::base_score(nutrients, &self.config.base);
        let adjustments = adjust::apply(nutrients, constraints, &self.config.adjustments);
        breakdown.extend(adjustments.components);

        let score = (base - adjustments.penalty_total).clamp(0.0, 100.0);

        Ok(RatingResult {
            score,
            grade: Grade::from_score(score),
            breakdown,
            suggestions: adjustments.suggestions,
        })
    }
}

/// Discrete contribution to a rating, keeping the total auditable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    #[serde(rename = "component")]
    pub factor: ScoreFactor,
    pub delta: f64,
    pub reason: String,
}

/// Signals permitted in the scoring breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    MacroBalance,
    MicroQuality,
    SodiumLimit,
    SugarLimit,
    FatLimit,
    CalorieLimit,
    ProteinFloor,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::MacroBalance => "macro_balance",
            ScoreFactor::MicroQuality => "micro_quality",
            ScoreFactor::SodiumLimit => "sodium_limit",
            ScoreFactor::SugarLimit => "sugar_limit",
            ScoreFactor::FatLimit => "fat_limit",
            ScoreFactor::CalorieLimit => "calorie_limit",
            ScoreFactor::ProteinFloor => "protein_floor",
        }
    }
}

/// Letter grade shown alongside the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 75.0 {
            Grade::B
        } else if score >= 60.0 {
            Grade::C
        } else if score >= 45.0 {
            Grade::D
        } else {
            Grade::E
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

/// Rating output: bounded score, grade, and the itemized contributions that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResult {
    pub score: f64,
    pub grade: Grade,
    pub breakdown: Vec<ScoreComponent>,
    pub suggestions: Vec<String>,
}
