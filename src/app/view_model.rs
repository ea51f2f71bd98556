//! Immutable snapshot of the controls for one render pass.

use crate::domain::model::{CandidateGene, Metal, SymptomLocation, SymptomPattern};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const INITIAL_ZINC_RANGE: (f64, f64) = (100.0, 2000.0);
pub const INITIAL_ZINC_STEP: f64 = 50.0;
pub const WEEKS_RANGE: (u32, u32) = (4, 24);
pub const POPULATION_RANGE: (usize, usize) = (50, 500);
pub const CONCENTRATION_RANGE: (f64, f64) = (1000.0, 30000.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Home,
    Remediation,
    Biomass,
    Diagnostics,
    Genetics,
    Mining,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Home,
        PageId::Remediation,
        PageId::Biomass,
        PageId::Diagnostics,
        PageId::Genetics,
        PageId::Mining,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::Remediation => "Phytoremediation Tracker",
            PageId::Biomass => "Biomass Predictor",
            PageId::Diagnostics => "Deficiency Detective",
            PageId::Genetics => "Genetics Explorer",
            PageId::Mining => "Phytomining Economy",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Remediation => "remediation",
            PageId::Biomass => "biomass",
            PageId::Diagnostics => "diagnostics",
            PageId::Genetics => "genetics",
            PageId::Mining => "mining",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemediationControls {
    pub initial_zinc_ppm: f64,
    pub weeks: u32,
}

impl Default for RemediationControls {
    fn default() -> Self {
        Self {
            initial_zinc_ppm: 800.0,
            weeks: 12,
        }
    }
}

/// Raw bytes of an uploaded photo plus its original file name.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BiomassControls {
    pub upload: Option<Upload>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagnosticsControls {
    pub location: Option<SymptomLocation>,
    pub pattern: Option<SymptomPattern>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticsControls {
    pub gene: CandidateGene,
    pub population_size: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningControls {
    pub hectares: f64,
    pub dry_biomass_t_per_ha: f64,
    pub metal: Metal,
    pub concentration_mg_per_kg: f64,
    /// Overrides the configured market price for `metal`.
    pub price_per_kg: Option<f64>,
}

impl Default for MiningControls {
    fn default() -> Self {
        Self {
            hectares: 1.0,
            dry_biomass_t_per_ha: 10.0,
            metal: Metal::Zinc,
            concentration_mg_per_kg: 10_000.0,
            price_per_kg: None,
        }
    }
}

/// One variant per page; the variant carries that page's control values.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    Home,
    Remediation(RemediationControls),
    Biomass(BiomassControls),
    Diagnostics(DiagnosticsControls),
    Genetics(GeneticsControls),
    Mining(MiningControls),
}

impl ViewModel {
    pub fn page(&self) -> PageId {
        match self {
            ViewModel::Home => PageId::Home,
            ViewModel::Remediation(_) => PageId::Remediation,
            ViewModel::Biomass(_) => PageId::Biomass,
            ViewModel::Diagnostics(_) => PageId::Diagnostics,
            ViewModel::Genetics(_) => PageId::Genetics,
            ViewModel::Mining(_) => PageId::Mining,
        }
    }
}

// Missing diagnostics selections and a missing upload are page states, not
// validation failures; they render as notices.
impl Validate for ViewModel {
    fn validate(&self) -> Result<()> {
        match self {
            ViewModel::Home | ViewModel::Diagnostics(_) => Ok(()),
            ViewModel::Remediation(c) => {
                validation::validate_range(
                    "initial_zinc",
                    c.initial_zinc_ppm,
                    INITIAL_ZINC_RANGE.0,
                    INITIAL_ZINC_RANGE.1,
                )?;
                validation::validate_step("initial_zinc", c.initial_zinc_ppm, INITIAL_ZINC_STEP)?;
                validation::validate_range("weeks", c.weeks, WEEKS_RANGE.0, WEEKS_RANGE.1)
            }
            ViewModel::Biomass(c) => match &c.upload {
                Some(upload) => validation::validate_file_extensions(
                    "image",
                    std::slice::from_ref(&upload.name),
                    validation::IMAGE_EXTENSIONS,
                ),
                None => Ok(()),
            },
            ViewModel::Genetics(c) => validation::validate_range(
                "population_size",
                c.population_size,
                POPULATION_RANGE.0,
                POPULATION_RANGE.1,
            ),
            ViewModel::Mining(c) => {
                validation::validate_non_negative_f64("hectares", c.hectares)?;
                validation::validate_non_negative_f64("yield_t_per_ha", c.dry_biomass_t_per_ha)?;
                validation::validate_range(
                    "concentration",
                    c.concentration_mg_per_kg,
                    CONCENTRATION_RANGE.0,
                    CONCENTRATION_RANGE.1,
                )?;
                if let Some(price) = c.price_per_kg {
                    validation::validate_non_negative_f64("price", price)?;
                }
                Ok(())
            }
        }
    }
}
