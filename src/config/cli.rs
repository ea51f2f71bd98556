use crate::app::view_model::{
    BiomassControls, DiagnosticsControls, GeneticsControls, MiningControls, RemediationControls,
    Upload, ViewModel,
};
use crate::config::toml_config::DashboardConfig;
use crate::domain::model::{CandidateGene, Metal, SymptomLocation, SymptomPattern};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "phytoscout")]
#[command(about = "Plant-science teaching dashboard: remediation, phenotyping, diagnostics, genetics, phytomining")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write chart tables (CSV) and images (PNG) into this directory
    #[arg(long, global = true)]
    pub export: Option<String>,

    /// Print the rendered page as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(long, value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub page: PageCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PageCommand {
    /// Overview of the dashboard
    Home,

    /// Soil zinc depletion and plant uptake over a growing season
    Remediation {
        /// Initial soil zinc (PPM), in steps of 50
        #[arg(long, default_value_t = 800.0)]
        initial_zinc: f64,

        /// Growth duration (weeks)
        #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(4..=24))]
        weeks: u32,
    },

    /// Green-pixel biomass estimate from a top-down photo
    Biomass {
        /// Photo to analyse (jpg, jpeg or png)
        #[arg(long)]
        image: Option<PathBuf>,
    },

    /// Nutrient deficiency from visual symptoms
    Diagnostics {
        #[arg(long, value_enum)]
        location: Option<SymptomLocation>,

        #[arg(long, value_enum)]
        pattern: Option<SymptomPattern>,
    },

    /// Copy number variation vs. zinc tolerance in a mock population
    Genetics {
        #[arg(long, value_enum, default_value = "hma4")]
        gene: CandidateGene,

        /// Population size (n); defaults to the settings file value
        #[arg(long)]
        population_size: Option<usize>,

        /// RNG seed; defaults to the settings file value
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Revenue projection for farming metals from biomass
    Mining {
        #[arg(long, default_value_t = 1.0)]
        hectares: f64,

        /// Dry biomass yield (tons/ha)
        #[arg(long, alias = "yield", default_value_t = 10.0)]
        yield_t_per_ha: f64,

        #[arg(long, value_enum, default_value = "zinc")]
        metal: Metal,

        /// Plant metal concentration (mg/kg)
        #[arg(long, default_value_t = 10_000.0)]
        concentration: f64,

        /// Market price ($/kg); defaults to the configured price for the metal
        #[arg(long)]
        price: Option<f64>,
    },
}

impl CliConfig {
    /// Build the immutable view model for this invocation. The upload, if
    /// any, is read through `storage`.
    pub fn view_model<S: Storage>(&self, config: &DashboardConfig, storage: &S) -> Result<ViewModel> {
        let vm = match &self.page {
            PageCommand::Home => ViewModel::Home,
            PageCommand::Remediation {
                initial_zinc,
                weeks,
            } => ViewModel::Remediation(RemediationControls {
                initial_zinc_ppm: *initial_zinc,
                weeks: *weeks,
            }),
            PageCommand::Biomass { image } => {
                let upload = match image {
                    Some(path) => {
                        let name = path.display().to_string();
                        tracing::debug!("Reading upload from {}", storage.location(&name));
                        Some(Upload {
                            bytes: storage.read_file(&name)?,
                            name,
                        })
                    }
                    None => None,
                };
                ViewModel::Biomass(BiomassControls { upload })
            }
            PageCommand::Diagnostics { location, pattern } => {
                ViewModel::Diagnostics(DiagnosticsControls {
                    location: *location,
                    pattern: *pattern,
                })
            }
            PageCommand::Genetics {
                gene,
                population_size,
                seed,
            } => ViewModel::Genetics(GeneticsControls {
                gene: *gene,
                population_size: population_size.unwrap_or(config.genetics.population_size),
                seed: seed.unwrap_or(config.genetics.seed),
            }),
            PageCommand::Mining {
                hectares,
                yield_t_per_ha,
                metal,
                concentration,
                price,
            } => ViewModel::Mining(MiningControls {
                hectares: *hectares,
                dry_biomass_t_per_ha: *yield_t_per_ha,
                metal: *metal,
                concentration_mg_per_kg: *concentration,
                price_per_kg: *price,
            }),
        };
        Ok(vm)
    }

    /// `--export` wins; otherwise the settings file's `export.output_path`.
    pub fn export_dir<'a>(&'a self, config: &'a DashboardConfig) -> Option<&'a str> {
        self.export
            .as_deref()
            .or(config.export.output_path.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::app::view_model::PageId;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("phytoscout").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_remediation_defaults() {
        let cli = parse(&["remediation"]);
        let vm = cli
            .view_model(&DashboardConfig::default(), &LocalStorage::new(".".to_string()))
            .unwrap();
        assert_eq!(vm, ViewModel::Remediation(RemediationControls::default()));
    }

    #[test]
    fn test_weeks_out_of_range_rejected() {
        assert!(CliConfig::try_parse_from(["phytoscout", "remediation", "--weeks", "30"]).is_err());
    }

    #[test]
    fn test_diagnostics_selects() {
        let cli = parse(&["diagnostics", "--location", "new-leaves", "--pattern", "purple-spots"]);
        let vm = cli
            .view_model(&DashboardConfig::default(), &LocalStorage::new(".".to_string()))
            .unwrap();
        assert_eq!(
            vm,
            ViewModel::Diagnostics(DiagnosticsControls {
                location: Some(SymptomLocation::NewLeaves),
                pattern: Some(SymptomPattern::PurpleSpots),
            })
        );
    }

    #[test]
    fn test_genetics_falls_back_to_config() {
        let mut config = DashboardConfig::default();
        config.genetics.seed = 7;
        let cli = parse(&["genetics", "--gene", "mtp1"]);
        let vm = cli.view_model(&config, &LocalStorage::new(".".to_string())).unwrap();
        match vm {
            ViewModel::Genetics(c) => {
                assert_eq!(c.seed, 7);
                assert_eq!(c.population_size, 150);
                assert_eq!(c.gene, CandidateGene::Mtp1);
            }
            other => panic!("unexpected {:?}", other.page()),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["mining", "--metal", "nickel", "--export", "out", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.export_dir(&DashboardConfig::default()), Some("out"));
        let vm = cli
            .view_model(&DashboardConfig::default(), &LocalStorage::new(".".to_string()))
            .unwrap();
        assert_eq!(vm.page(), PageId::Mining);
    }

    #[test]
    fn test_mining_yield_flag() {
        let storage = LocalStorage::new(".".to_string());
        for flag in ["--yield-t-per-ha", "--yield"] {
            let cli = parse(&["mining", "--hectares", "2", flag, "5"]);
            match cli.view_model(&DashboardConfig::default(), &storage).unwrap() {
                ViewModel::Mining(c) => {
                    assert_eq!(c.hectares, 2.0);
                    assert_eq!(c.dry_biomass_t_per_ha, 5.0);
                }
                other => panic!("unexpected {:?}", other.page()),
            }
        }
    }
}
