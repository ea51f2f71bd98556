use crate::app::view_model::POPULATION_RANGE;
use crate::core::{economics, genetics, phenotyping, remediation};
use crate::utils::error::{PhytoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file. Every section and field is optional; an empty file yields
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub dashboard: DashboardSection,
    pub remediation: RemediationConfig,
    pub biomass: BiomassConfig,
    pub genetics: GeneticsConfig,
    pub mining: MiningConfig,
    pub export: ExportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    pub name: String,
    pub tagline: String,
    pub version: String,
}

impl Default for DashboardSection {
    fn default() -> Self {
        Self {
            name: "PhytoScout".to_string(),
            tagline: "Science for Impact".to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    pub decay_rate: f64,
    pub uptake_steepness: f64,
    pub tissue_scale: f64,
    pub safe_limit_ppm: f64,
    pub hyperaccumulation_threshold: f64,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            decay_rate: remediation::DECAY_RATE,
            uptake_steepness: remediation::UPTAKE_STEEPNESS,
            tissue_scale: remediation::TISSUE_SCALE,
            safe_limit_ppm: remediation::SAFE_LIMIT_PPM,
            hyperaccumulation_threshold: remediation::HYPERACCUMULATION_THRESHOLD,
        }
    }
}

impl RemediationConfig {
    pub fn params(&self) -> remediation::SimulationParams {
        remediation::SimulationParams {
            decay_rate: self.decay_rate,
            uptake_steepness: self.uptake_steepness,
            tissue_scale: self.tissue_scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomassConfig {
    pub biomass_factor: f64,
    pub growth_factor: f64,
}

impl Default for BiomassConfig {
    fn default() -> Self {
        Self {
            biomass_factor: phenotyping::BIOMASS_FACTOR,
            growth_factor: phenotyping::GROWTH_FACTOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticsConfig {
    pub seed: u64,
    pub population_size: usize,
}

impl Default for GeneticsConfig {
    fn default() -> Self {
        Self {
            seed: genetics::DEFAULT_SEED,
            population_size: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub zinc_price: f64,
    pub nickel_price: f64,
    pub ash_fraction: f64,
    pub high_grade_threshold_pct: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            zinc_price: economics::ZINC_PRICE_PER_KG,
            nickel_price: economics::NICKEL_PRICE_PER_KG,
            ash_fraction: economics::ASH_FRACTION,
            high_grade_threshold_pct: economics::HIGH_GRADE_THRESHOLD_PCT,
        }
    }
}

impl MiningConfig {
    pub fn price(&self, metal: crate::domain::model::Metal) -> f64 {
        use crate::domain::model::Metal;
        match metal {
            Metal::Zinc => self.zinc_price,
            Metal::Nickel => self.nickel_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Export directory used when `--export` is absent from the command line.
    pub output_path: Option<String>,
    pub formats: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            formats: vec!["csv".to_string(), "png".to_string()],
        }
    }
}

impl ExportConfig {
    pub fn wants(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `phytoscout=debug`.
    pub level: Option<String>,
}

impl DashboardConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PhytoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PhytoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown names stay as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PhytoError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("dashboard.name", &self.dashboard.name)?;

        let r = &self.remediation;
        validation::validate_positive_f64("remediation.decay_rate", r.decay_rate)?;
        validation::validate_positive_f64("remediation.uptake_steepness", r.uptake_steepness)?;
        validation::validate_positive_f64("remediation.tissue_scale", r.tissue_scale)?;
        validation::validate_positive_f64("remediation.safe_limit_ppm", r.safe_limit_ppm)?;
        validation::validate_positive_f64(
            "remediation.hyperaccumulation_threshold",
            r.hyperaccumulation_threshold,
        )?;

        validation::validate_non_negative_f64("biomass.biomass_factor", self.biomass.biomass_factor)?;
        validation::validate_non_negative_f64("biomass.growth_factor", self.biomass.growth_factor)?;

        validation::validate_range(
            "genetics.population_size",
            self.genetics.population_size,
            POPULATION_RANGE.0,
            POPULATION_RANGE.1,
        )?;

        let m = &self.mining;
        validation::validate_non_negative_f64("mining.zinc_price", m.zinc_price)?;
        validation::validate_non_negative_f64("mining.nickel_price", m.nickel_price)?;
        validation::validate_range("mining.ash_fraction", m.ash_fraction, 0.0, 1.0)?;
        validation::validate_non_negative_f64(
            "mining.high_grade_threshold_pct",
            m.high_grade_threshold_pct,
        )?;

        if let Some(path) = &self.export.output_path {
            validation::validate_path("export.output_path", path)?;
        }
        let valid_formats = ["csv", "png"];
        for format in &self.export.formats {
            if !valid_formats.contains(&format.as_str()) {
                return Err(PhytoError::InvalidConfigValueError {
                    field: "export.formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        if let Some(level) = &self.logging.level {
            validation::validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
