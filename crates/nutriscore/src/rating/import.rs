use std::io::Read;

use serde::Deserialize;

use super::domain::{NutrientSnapshot, ValidationError};

/// One parsed row of a meal CSV export.
#[derive(Debug, Clone, PartialEq)]
pub struct MealEntry {
    pub description: String,
    pub nutrients: NutrientSnapshot,
}

/// Error raised while importing a meal CSV.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: ValidationError,
    },
}

/// Importer for batch-rating meal lists exported as CSV.
///
/// Expected header:
/// `description,calories,protein_g,fat_g,carbs_g,fiber_g,sugar_g,sodium_mg`.
pub struct MealCsvImporter;

impl MealCsvImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<MealEntry>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (index, record) in csv_reader.deserialize::<MealRow>().enumerate() {
            let row = record?;
            let nutrients = NutrientSnapshot {
                calories: row.calories,
                protein_g: row.protein_g,
                fat_g: row.fat_g,
                carbs_g: row.carbs_g,
                fiber_g: row.fiber_g,
                sugar_g: row.sugar_g,
                sodium_mg: row.sodium_mg,
            };
            // Header occupies the first line of the file.
            nutrients
                .validate()
                .map_err(|source| ImportError::Invalid {
                    row: index + 2,
                    source,
                })?;
            entries.push(MealEntry {
                description: row.description,
                nutrients,
            });
        }

        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct MealRow {
    description: String,
    calories: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    fiber_g: f64,
    sugar_g: f64,
    sodium_mg: f64,
}
