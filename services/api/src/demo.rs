use crate::infra::InMemoryProfileRepository;
use clap::Args;
use nutriscore::error::AppError;
use nutriscore::rating::import::MealCsvImporter;
use nutriscore::rating::{
    Gender, HealthProfile, MealRating, MealRatingService, NutrientSnapshot, RatingConfig, UserId,
};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the full component breakdown for each rating
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RateArgs {
    /// CSV of meals (description,calories,protein_g,fat_g,carbs_g,fiber_g,sugar_g,sodium_mg)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Free-text conditions applied to every row (e.g. "hypertension")
    #[arg(long)]
    pub(crate) allergies: Option<String>,
    /// Print the full component breakdown for each rating
    #[arg(long)]
    pub(crate) breakdown: bool,
}

fn demo_service() -> MealRatingService<InMemoryProfileRepository> {
    MealRatingService::new(
        Arc::new(InMemoryProfileRepository::default()),
        RatingConfig::default(),
    )
}

fn sample_meal() -> NutrientSnapshot {
    NutrientSnapshot {
        calories: 650.0,
        protein_g: 30.0,
        fat_g: 28.0,
        carbs_g: 55.0,
        fiber_g: 6.0,
        sugar_g: 12.0,
        sodium_mg: 1400.0,
    }
}

fn print_rating(description: &str, outcome: &MealRating, with_breakdown: bool) {
    println!(
        "{description}: score {:.1} (grade {})",
        outcome.rating.score,
        outcome.rating.grade.label()
    );
    if with_breakdown {
        for component in &outcome.rating.breakdown {
            println!(
                "  {:>14} {:+7.2}  {}",
                component.factor.label(),
                component.delta,
                component.reason
            );
        }
        for suggestion in &outcome.rating.suggestions {
            println!("  suggestion: {suggestion}");
        }
        for warning in &outcome.warnings {
            println!("  warning: {warning}");
        }
    }
}

/// Walk the reference scenario: the same high-sodium meal rated with and
/// without a hypertension profile.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = demo_service();
    let user = UserId("demo-user".to_string());

    println!("== Personalized rating demo ==");

    let restricted = HealthProfile {
        age: Some(45),
        gender: Some(Gender::Male),
        conditions: Vec::new(),
        allergies: Some("hypertension".to_string()),
    };
    service.save_profile(user.clone(), restricted)?;
    let first = service.rate_for_user(&user, &sample_meal(), Some("Cheese pizza"))?;
    print_rating("Cheese pizza (hypertension profile)", &first, args.breakdown);

    let relaxed = HealthProfile {
        age: Some(45),
        gender: Some(Gender::Male),
        conditions: Vec::new(),
        allergies: Some(String::new()),
    };
    service.save_profile(user.clone(), relaxed)?;
    let second = service.rate_for_user(&user, &sample_meal(), Some("Cheese pizza"))?;
    print_rating("Cheese pizza (no restrictions)", &second, args.breakdown);

    if first.rating.score < second.rating.score {
        println!("Low-sodium goal penalized the restricted rating, as expected.");
    } else {
        println!("Unexpected: restricted rating was not lower.");
    }

    Ok(())
}

/// Batch-rate a CSV of meals against an optional free-text profile.
pub(crate) fn run_rate(args: RateArgs) -> Result<(), AppError> {
    let RateArgs {
        csv,
        allergies,
        breakdown,
    } = args;

    let file = File::open(&csv)?;
    let entries = MealCsvImporter::from_reader(file)?;

    let profile = allergies.map(|text| HealthProfile {
        allergies: Some(text),
        ..HealthProfile::default()
    });

    let service = demo_service();
    for entry in &entries {
        let outcome =
            service.rate(profile.as_ref(), &entry.nutrients, Some(entry.description.as_str()))?;
        print_rating(&entry.description, &outcome, breakdown);
    }
    println!("{} meal(s) rated", entries.len());

    Ok(())
}
