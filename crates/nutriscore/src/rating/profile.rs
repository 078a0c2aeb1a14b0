use super::domain::{ConditionCode, ConstraintFlag, DietaryConstraintSet, HealthProfile};

// Daily guideline targets attached to each recognized condition. Sodium and
// sugar ceilings follow WHO guidance (2000 mg sodium, ~5% of energy as free
// sugar); the hypertension ceiling is the stricter clinical 1500 mg.
const SODIUM_CEILING_MG: f64 = 1500.0;
const SUGAR_CEILING_G: f64 = 25.0;
const FAT_CEILING_G: f64 = 20.0;
const CALORIE_CEILING_KCAL: f64 = 1600.0;
const PROTEIN_FLOOR_G: f64 = 60.0;

/// Substrings recognized in the legacy free-text field, matched
/// case-insensitively. Unmatched text is ignored, never an error.
const CONDITION_KEYWORDS: &[(&str, ConditionCode)] = &[
    ("hypertension", ConditionCode::Hypertension),
    ("blood pressure", ConditionCode::Hypertension),
    ("diabet", ConditionCode::Diabetes),
    ("heart disease", ConditionCode::HeartDisease),
    ("cardiac", ConditionCode::HeartDisease),
    ("cholesterol", ConditionCode::HeartDisease),
    ("kidney", ConditionCode::KidneyDisease),
    ("renal", ConditionCode::KidneyDisease),
    ("obes", ConditionCode::Obesity),
    ("underweight", ConditionCode::Underweight),
];

/// Free-text goals that map straight to a constraint without naming a
/// condition ("low sodium diet", "high protein").
const GOAL_KEYWORDS: &[(&str, ConstraintFlag, f64)] = &[
    ("low sodium", ConstraintFlag::LowSodium, SODIUM_CEILING_MG),
    ("low sugar", ConstraintFlag::LowSugar, SUGAR_CEILING_G),
    ("low fat", ConstraintFlag::LowFat, FAT_CEILING_G),
    (
        "weight loss",
        ConstraintFlag::LowCalorie,
        CALORIE_CEILING_KCAL,
    ),
    ("high protein", ConstraintFlag::HighProtein, PROTEIN_FLOOR_G),
];

/// Constraints implied by a recognized condition. Each flag targets a single
/// nutrient, so the table stays sparse by construction.
fn condition_constraints(code: ConditionCode) -> &'static [(ConstraintFlag, f64)] {
    match code {
        ConditionCode::Hypertension => &[(ConstraintFlag::LowSodium, SODIUM_CEILING_MG)],
        ConditionCode::Diabetes => &[(ConstraintFlag::LowSugar, SUGAR_CEILING_G)],
        ConditionCode::HeartDisease => &[(ConstraintFlag::LowFat, FAT_CEILING_G)],
        ConditionCode::KidneyDisease => &[(ConstraintFlag::LowSodium, SODIUM_CEILING_MG)],
        ConditionCode::Obesity => &[(ConstraintFlag::LowCalorie, CALORIE_CEILING_KCAL)],
        ConditionCode::Underweight => &[(ConstraintFlag::HighProtein, PROTEIN_FLOOR_G)],
    }
}

/// Convert a raw health profile into the normalized constraint set.
///
/// Pure and re-run on every rating call; there is no cache to invalidate, so
/// a profile edit changes the very next rating. Tagged condition codes and
/// the legacy free-text field both contribute; when several sources imply the
/// same flag the strictest target wins.
pub fn normalize(profile: &HealthProfile) -> DietaryConstraintSet {
    let mut constraints = DietaryConstraintSet::default();

    for code in &profile.conditions {
        for (flag, target) in condition_constraints(*code) {
            constraints.insert(*flag, *target);
        }
    }

    if let Some(text) = profile.allergies.as_deref() {
        let lowered = text.to_lowercase();
        for (needle, code) in CONDITION_KEYWORDS {
            if lowered.contains(needle) {
                for (flag, target) in condition_constraints(*code) {
                    constraints.insert(*flag, *target);
                }
            }
        }
        for (needle, flag, target) in GOAL_KEYWORDS {
            if lowered.contains(needle) {
                constraints.insert(*flag, *target);
            }
        }
    }

    constraints
}
