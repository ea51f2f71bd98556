//! Visual-symptom lookup table for micronutrient ("hidden hunger") deficiency.

use crate::domain::model::{Diagnosis, Nutrient, SymptomLocation, SymptomPattern};
use crate::utils::error::{PhytoError, Result};

pub const INCOMPLETE_SELECTION: &str = "Please select both location and pattern.";

const IRON_NOTE: &str = "Iron is immobile in plants, so young leaves suffer first.";
const ZINC_NOTE: &str = "**High Probability.** Zinc deficiency often causes 'rosetting' \
(stunted leaves) and chlorosis in new growth.";
const ZINC_RECOMMENDATION: &str = "This aligns with research on *ZIP* transporters. \
Apply Zinc Sulfate foliar spray.";

/// Both selections are required; `None` stands for an unselected control.
pub fn diagnose(
    location: Option<SymptomLocation>,
    pattern: Option<SymptomPattern>,
) -> Result<Diagnosis> {
    match (location, pattern) {
        (Some(location), Some(pattern)) => Ok(lookup(location, pattern)),
        _ => Err(PhytoError::IncompleteSelectionError {
            message: INCOMPLETE_SELECTION.to_string(),
        }),
    }
}

pub fn lookup(location: SymptomLocation, pattern: SymptomPattern) -> Diagnosis {
    use SymptomLocation::*;
    use SymptomPattern::*;

    let deficiency = |nutrient: Nutrient,
                      note: Option<&'static str>,
                      recommendation: Option<&'static str>| Diagnosis::Deficiency {
        nutrient,
        note,
        recommendation,
    };

    match (location, pattern) {
        (NewLeaves, InterveinalChlorosis) => deficiency(Nutrient::Iron, Some(IRON_NOTE), None),
        (NewLeaves, CompleteYellowing) => deficiency(Nutrient::Sulfur, None, None),
        (NewLeaves, PurpleSpots | NecroticEdges) => {
            deficiency(Nutrient::Zinc, Some(ZINC_NOTE), Some(ZINC_RECOMMENDATION))
        }
        (OldLeaves, InterveinalChlorosis) => deficiency(Nutrient::Magnesium, None, None),
        (OldLeaves, CompleteYellowing) => deficiency(Nutrient::Nitrogen, None, None),
        (OldLeaves, PurpleSpots | NecroticEdges) => Diagnosis::LowConfidence,
        (WholePlant, _) => Diagnosis::Inconclusive,
    }
}
