use super::common::*;
use crate::rating::domain::{ConditionCode, ConstraintFlag, HealthProfile};
use crate::rating::normalize;

#[test]
fn empty_profile_yields_no_constraints() {
    let constraints = normalize(&HealthProfile::default());
    assert!(constraints.is_empty());
}

#[test]
fn blank_allergies_yield_no_constraints() {
    let constraints = normalize(&unrestricted_profile());
    assert!(constraints.is_empty());
}

#[test]
fn hypertension_text_implies_low_sodium() {
    let constraints = normalize(&hypertensive_profile());
    assert_eq!(constraints.limit(ConstraintFlag::LowSodium), Some(1500.0));
    assert_eq!(constraints.len(), 1);
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let profile = HealthProfile {
        allergies: Some("Hypertension, High BLOOD PRESSURE".to_string()),
        ..HealthProfile::default()
    };
    let constraints = normalize(&profile);
    assert_eq!(constraints.limit(ConstraintFlag::LowSodium), Some(1500.0));
}

#[test]
fn unknown_text_degrades_to_no_constraints() {
    let profile = HealthProfile {
        allergies: Some("peanuts; shellfish; gluten".to_string()),
        ..HealthProfile::default()
    };
    assert!(normalize(&profile).is_empty());
}

#[test]
fn diabetes_maps_to_low_sugar() {
    let profile = HealthProfile {
        allergies: Some("diabetic".to_string()),
        ..HealthProfile::default()
    };
    let constraints = normalize(&profile);
    assert_eq!(constraints.limit(ConstraintFlag::LowSugar), Some(25.0));
}

#[test]
fn tagged_condition_matches_legacy_text() {
    let tagged = HealthProfile {
        conditions: vec![ConditionCode::Hypertension],
        ..HealthProfile::default()
    };
    let legacy = HealthProfile {
        allergies: Some("hypertension".to_string()),
        ..HealthProfile::default()
    };
    assert_eq!(normalize(&tagged), normalize(&legacy));
}

#[test]
fn goal_text_maps_without_a_condition() {
    let profile = HealthProfile {
        allergies: Some("on a low sodium diet, high protein".to_string()),
        ..HealthProfile::default()
    };
    let constraints = normalize(&profile);
    assert_eq!(constraints.limit(ConstraintFlag::LowSodium), Some(1500.0));
    assert_eq!(constraints.limit(ConstraintFlag::HighProtein), Some(60.0));
}

#[test]
fn overlapping_sources_collapse_to_one_flag() {
    // Hypertension and kidney disease both imply the same sodium ceiling.
    let profile = HealthProfile {
        conditions: vec![ConditionCode::KidneyDisease],
        allergies: Some("hypertension".to_string()),
        ..HealthProfile::default()
    };
    let constraints = normalize(&profile);
    assert_eq!(constraints.len(), 1);
    assert_eq!(constraints.limit(ConstraintFlag::LowSodium), Some(1500.0));
}

#[test]
fn multiple_conditions_accumulate_flags() {
    let profile = HealthProfile {
        conditions: vec![ConditionCode::Hypertension, ConditionCode::Diabetes],
        ..HealthProfile::default()
    };
    let constraints = normalize(&profile);
    assert_eq!(constraints.len(), 2);
    assert!(constraints.limit(ConstraintFlag::LowSodium).is_some());
    assert!(constraints.limit(ConstraintFlag::LowSugar).is_some());
}
