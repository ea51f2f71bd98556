use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Starting soil concentration (PPM), > 0.
    pub initial_concentration: f64,
    /// Number of simulated weeks, >= 1.
    pub duration_weeks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationPoint {
    pub week: u32,
    pub soil_concentration: f64,
    pub plant_accumulation: f64,
}

/// Week-ordered output of the remediation simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSeries {
    pub points: Vec<SimulationPoint>,
}

impl SimulationSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&SimulationPoint> {
        self.points.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemediationSummary {
    pub final_soil: f64,
    pub removed_percent: f64,
    pub within_safe_limit: bool,
    /// Extrapolated weeks to reach the safe limit; `None` once within it or
    /// when the series removed nothing.
    pub weeks_to_safe_limit: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysisResult {
    pub green_ratio_percent: f64,
    pub masked_image: image::RgbImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiomassEstimate {
    pub green_ratio_percent: f64,
    pub current_biomass_g: f64,
    pub projected_yield_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum CandidateGene {
    Hma4,
    Zip,
    Mtp1,
}

impl CandidateGene {
    pub const ALL: [CandidateGene; 3] = [CandidateGene::Hma4, CandidateGene::Zip, CandidateGene::Mtp1];

    pub fn display_name(self) -> &'static str {
        match self {
            CandidateGene::Hma4 => "HMA4 (Heavy Metal ATPase 4)",
            CandidateGene::Zip => "ZIP Transporter Family",
            CandidateGene::Mtp1 => "MTP1 (Metal Tolerance Protein)",
        }
    }

    /// Name without the parenthesised description.
    pub fn symbol(self) -> &'static str {
        match self {
            CandidateGene::Hma4 => "HMA4",
            CandidateGene::Zip => "ZIP Transporter Family",
            CandidateGene::Mtp1 => "MTP1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CnvIndividual {
    pub plant_id: usize,
    pub copy_number: u32,
    pub tolerance_index: f64,
    pub leaf_accumulation_ppm: f64,
}

/// Least-squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CopyNumberGroup {
    pub copy_number: u32,
    pub count: usize,
    pub accumulation: FiveNumberSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CnvPopulation {
    pub individuals: Vec<CnvIndividual>,
    pub tolerance_trend: Option<TrendLine>,
    pub groups: Vec<CopyNumberGroup>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Metal {
    Zinc,
    Nickel,
}

impl Metal {
    pub fn display_name(self) -> &'static str {
        match self {
            Metal::Zinc => "Zinc (Zn)",
            Metal::Nickel => "Nickel (Ni)",
        }
    }

    pub fn element(self) -> &'static str {
        match self {
            Metal::Zinc => "Zinc",
            Metal::Nickel => "Nickel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhytominingInput {
    pub hectares: f64,
    pub dry_biomass_t_per_ha: f64,
    pub concentration_mg_per_kg: f64,
    pub metal: Metal,
    pub price_per_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OreGrade {
    High,
    Low,
    /// Ash mass is zero, so the grade cannot be computed.
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhytominingProjection {
    pub total_biomass_kg: f64,
    pub total_metal_kg: f64,
    pub gross_revenue: f64,
    pub revenue_per_hectare: Option<f64>,
    pub ash_mass_kg: f64,
    pub metal_in_ash_percent: Option<f64>,
    pub ore_grade: OreGrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SymptomLocation {
    OldLeaves,
    NewLeaves,
    WholePlant,
}

impl SymptomLocation {
    pub const ALL: [SymptomLocation; 3] = [
        SymptomLocation::OldLeaves,
        SymptomLocation::NewLeaves,
        SymptomLocation::WholePlant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymptomLocation::OldLeaves => "Old Leaves (Bottom)",
            SymptomLocation::NewLeaves => "New Leaves (Top)",
            SymptomLocation::WholePlant => "Whole Plant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SymptomPattern {
    InterveinalChlorosis,
    CompleteYellowing,
    PurpleSpots,
    NecroticEdges,
}

impl SymptomPattern {
    pub const ALL: [SymptomPattern; 4] = [
        SymptomPattern::InterveinalChlorosis,
        SymptomPattern::CompleteYellowing,
        SymptomPattern::PurpleSpots,
        SymptomPattern::NecroticEdges,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SymptomPattern::InterveinalChlorosis => {
                "Yellowing between veins (Interveinal Chlorosis)"
            }
            SymptomPattern::CompleteYellowing => "Complete yellowing",
            SymptomPattern::PurpleSpots => "Purple/Reddish spots",
            SymptomPattern::NecroticEdges => "Brown/Necrotic edges",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Iron,
    Sulfur,
    Zinc,
    Magnesium,
    Nitrogen,
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Nutrient::Iron => "Iron (Fe)",
            Nutrient::Sulfur => "Sulfur (S)",
            Nutrient::Zinc => "Zinc (Zn)",
            Nutrient::Magnesium => "Magnesium (Mg)",
            Nutrient::Nitrogen => "Nitrogen (N)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Diagnosis {
    Deficiency {
        nutrient: Nutrient,
        note: Option<&'static str>,
        recommendation: Option<&'static str>,
    },
    /// Symptoms fit no table row with confidence.
    LowConfidence,
    /// Location carries no diagnostic signal; a lab test is needed.
    Inconclusive,
}
