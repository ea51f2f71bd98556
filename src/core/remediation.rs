//! Soil depletion / plant uptake time-series simulator.
//!
//! Soil concentration decays exponentially from the initial value while plant
//! tissue concentration follows a logistic curve whose ceiling is the total
//! amount the soil lost over the run.

use crate::domain::model::{
    RemediationSummary, SimulationPoint, SimulationRequest, SimulationSeries,
};
use serde::{Deserialize, Serialize};

pub const DECAY_RATE: f64 = 0.05;
pub const UPTAKE_STEEPNESS: f64 = 0.5;
/// Maps removed soil PPM to leaf tissue mg/kg.
pub const TISSUE_SCALE: f64 = 50.0;
pub const SAFE_LIMIT_PPM: f64 = 300.0;
pub const HYPERACCUMULATION_THRESHOLD: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub decay_rate: f64,
    pub uptake_steepness: f64,
    pub tissue_scale: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            decay_rate: DECAY_RATE,
            uptake_steepness: UPTAKE_STEEPNESS,
            tissue_scale: TISSUE_SCALE,
        }
    }
}

/// Simulate with the default constants.
pub fn simulate(request: &SimulationRequest) -> SimulationSeries {
    simulate_with(request, &SimulationParams::default())
}

pub fn simulate_with(request: &SimulationRequest, params: &SimulationParams) -> SimulationSeries {
    let c0 = request.initial_concentration;
    let weeks = request.duration_weeks;

    let soil_at = |week: u32| c0 * (-params.decay_rate * f64::from(week)).exp();

    let total_removed = c0 - soil_at(weeks);
    let midpoint = f64::from(weeks) / 2.0;

    let points = (1..=weeks)
        .map(|week| {
            let uptake = total_removed
                / (1.0 + (-params.uptake_steepness * (f64::from(week) - midpoint)).exp());
            SimulationPoint {
                week,
                soil_concentration: soil_at(week),
                plant_accumulation: uptake * params.tissue_scale,
            }
        })
        .collect();

    SimulationSeries { points }
}

pub fn summarize(
    request: &SimulationRequest,
    series: &SimulationSeries,
    safe_limit: f64,
) -> RemediationSummary {
    let c0 = request.initial_concentration;
    let final_soil = series.last().map(|p| p.soil_concentration).unwrap_or(c0);
    let removed = c0 - final_soil;
    let removed_percent = if c0 > 0.0 { removed / c0 * 100.0 } else { 0.0 };
    let within_safe_limit = final_soil < safe_limit;

    let weekly_rate = removed / f64::from(request.duration_weeks.max(1));
    let weeks_to_safe_limit = if within_safe_limit || weekly_rate <= 0.0 {
        None
    } else {
        Some((c0 - safe_limit) / weekly_rate)
    };

    RemediationSummary {
        final_soil,
        removed_percent,
        within_safe_limit,
        weeks_to_safe_limit,
    }
}
