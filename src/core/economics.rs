//! Phytomining ("farming for metals") revenue arithmetic.

use crate::domain::model::{Metal, OreGrade, PhytominingInput, PhytominingProjection};

pub const ZINC_PRICE_PER_KG: f64 = 2.50;
pub const NICKEL_PRICE_PER_KG: f64 = 18.00;
/// Ash left after burning dry biomass for energy.
pub const ASH_FRACTION: f64 = 0.08;
/// Metal-in-ash percentage above which smelters treat the bio-ore as high grade.
pub const HIGH_GRADE_THRESHOLD_PCT: f64 = 10.0;

pub fn default_price(metal: Metal) -> f64 {
    match metal {
        Metal::Zinc => ZINC_PRICE_PER_KG,
        Metal::Nickel => NICKEL_PRICE_PER_KG,
    }
}

pub fn project(input: &PhytominingInput) -> PhytominingProjection {
    project_with(input, ASH_FRACTION, HIGH_GRADE_THRESHOLD_PCT)
}

/// Zero hectares or zero ash yield `None` for the ratio fields instead of
/// dividing by zero.
pub fn project_with(
    input: &PhytominingInput,
    ash_fraction: f64,
    high_grade_threshold_pct: f64,
) -> PhytominingProjection {
    let total_biomass_kg = input.hectares * input.dry_biomass_t_per_ha * 1000.0;
    let total_metal_kg = total_biomass_kg * (input.concentration_mg_per_kg / 1_000_000.0);
    let gross_revenue = total_metal_kg * input.price_per_kg;
    let ash_mass_kg = total_biomass_kg * ash_fraction;

    let revenue_per_hectare = checked_ratio(gross_revenue, input.hectares);
    let metal_in_ash_percent = checked_ratio(total_metal_kg, ash_mass_kg).map(|r| r * 100.0);

    let ore_grade = match metal_in_ash_percent {
        Some(pct) if pct > high_grade_threshold_pct => OreGrade::High,
        Some(_) => OreGrade::Low,
        None => OreGrade::Undefined,
    };

    PhytominingProjection {
        total_biomass_kg,
        total_metal_kg,
        gross_revenue,
        revenue_per_hectare,
        ash_mass_kg,
        metal_in_ash_percent,
        ore_grade,
    }
}

fn checked_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(hectares: f64, yield_t: f64, concentration: f64) -> PhytominingInput {
        PhytominingInput {
            hectares,
            dry_biomass_t_per_ha: yield_t,
            concentration_mg_per_kg: concentration,
            metal: Metal::Zinc,
            price_per_kg: ZINC_PRICE_PER_KG,
        }
    }

    #[test]
    fn test_default_inputs() {
        let p = project(&input(1.0, 10.0, 10_000.0));
        assert!((p.total_biomass_kg - 10_000.0).abs() < 1e-9);
        assert!((p.total_metal_kg - 100.0).abs() < 1e-9);
        assert!((p.gross_revenue - 250.0).abs() < 1e-9);
        assert!((p.ash_mass_kg - 800.0).abs() < 1e-9);
        assert!((p.metal_in_ash_percent.unwrap() - 12.5).abs() < 1e-9);
        assert_eq!(p.ore_grade, OreGrade::High);
        assert!((p.revenue_per_hectare.unwrap() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_metal_in_ash_only_depends_on_concentration() {
        // metal / ash = concentration / 1e6 / 0.08
        let p = project(&input(3.0, 7.0, 4_000.0));
        assert!((p.metal_in_ash_percent.unwrap() - 5.0).abs() < 1e-9);
        assert_eq!(p.ore_grade, OreGrade::Low);
    }

    #[test]
    fn test_zero_hectares_is_undefined_not_nan() {
        let p = project(&input(0.0, 10.0, 10_000.0));
        assert_eq!(p.total_metal_kg, 0.0);
        assert_eq!(p.revenue_per_hectare, None);
        assert_eq!(p.metal_in_ash_percent, None);
        assert_eq!(p.ore_grade, OreGrade::Undefined);
    }

    #[test]
    fn test_default_prices() {
        assert_eq!(default_price(Metal::Zinc), 2.5);
        assert_eq!(default_price(Metal::Nickel), 18.0);
    }
}
