use super::common::*;
use crate::rating::domain::UserId;
use crate::rating::service::ServiceError;
use crate::rating::MealRatingService;
use std::sync::Arc;

#[test]
fn rating_uses_the_stored_profile() {
    let (service, _repository) = build_service();
    let user = UserId("user-1".to_string());

    service
        .save_profile(user.clone(), hypertensive_profile())
        .expect("profile saves");

    let personalized = service
        .rate_for_user(&user, &sample_meal(), None)
        .expect("rates");
    let guest = service.rate(None, &sample_meal(), None).expect("rates");

    assert!(personalized.profile_used);
    assert!(!guest.profile_used);
    assert!(personalized.rating.score < guest.rating.score);
}

#[test]
fn missing_profile_rates_on_generic_quality() {
    let (service, _repository) = build_service();
    let unknown = UserId("nobody".to_string());

    let outcome = service
        .rate_for_user(&unknown, &sample_meal(), None)
        .expect("rates");

    assert!(!outcome.profile_used);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn profile_update_takes_effect_on_the_next_rating() {
    let (service, _repository) = build_service();
    let user = UserId("user-2".to_string());

    service
        .save_profile(user.clone(), hypertensive_profile())
        .expect("profile saves");
    let restricted = service
        .rate_for_user(&user, &sample_meal(), None)
        .expect("rates");

    service
        .save_profile(user.clone(), unrestricted_profile())
        .expect("profile saves");
    let relaxed = service
        .rate_for_user(&user, &sample_meal(), None)
        .expect("rates");

    assert!(restricted.rating.score < relaxed.rating.score);
}

#[test]
fn allergen_mention_warns_without_changing_the_score() {
    let (service, _repository) = build_service();
    let mut profile = unrestricted_profile();
    profile.allergies = Some("peanut, shellfish".to_string());

    let with_description = service
        .rate(
            Some(&profile),
            &sample_meal(),
            Some("Peanut noodles with scallions"),
        )
        .expect("rates");
    let without_description = service
        .rate(Some(&profile), &sample_meal(), None)
        .expect("rates");

    assert_eq!(
        with_description.warnings,
        vec!["potential allergen: peanut".to_string()]
    );
    assert!(without_description.warnings.is_empty());
    assert_eq!(
        with_description.rating.score,
        without_description.rating.score
    );
}

#[test]
fn repository_failure_surfaces_as_service_error() {
    let service = MealRatingService::new(Arc::new(UnavailableProfiles), rating_config());
    let user = UserId("user-3".to_string());

    match service.rate_for_user(&user, &sample_meal(), None) {
        Err(ServiceError::Repository(_)) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
}

#[test]
fn saved_profile_round_trips() {
    let (service, _repository) = build_service();
    let user = UserId("user-4".to_string());

    let saved = service
        .save_profile(user.clone(), hypertensive_profile())
        .expect("profile saves");
    let fetched = service
        .profile(&user)
        .expect("fetch succeeds")
        .expect("profile present");

    assert_eq!(saved, fetched);
    assert_eq!(fetched.profile, hypertensive_profile());
}
