use phytoscout::core::economics::{default_price, project};
use phytoscout::domain::model::{Metal, OreGrade, PhytominingInput};

fn base() -> PhytominingInput {
    PhytominingInput {
        hectares: 2.5,
        dry_biomass_t_per_ha: 8.0,
        concentration_mg_per_kg: 6_500.0,
        metal: Metal::Nickel,
        price_per_kg: default_price(Metal::Nickel),
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_total_metal_is_linear_in_each_input() {
    let reference = project(&base()).total_metal_kg;

    let doubled_area = project(&PhytominingInput {
        hectares: base().hectares * 2.0,
        ..base()
    });
    let doubled_yield = project(&PhytominingInput {
        dry_biomass_t_per_ha: base().dry_biomass_t_per_ha * 2.0,
        ..base()
    });
    let doubled_concentration = project(&PhytominingInput {
        concentration_mg_per_kg: base().concentration_mg_per_kg * 2.0,
        ..base()
    });

    assert!(close(doubled_area.total_metal_kg, reference * 2.0));
    assert!(close(doubled_yield.total_metal_kg, reference * 2.0));
    assert!(close(doubled_concentration.total_metal_kg, reference * 2.0));
}

#[test]
fn test_revenue_and_ash() {
    let p = project(&base());
    // 2.5 ha * 8 t * 1000 = 20 000 kg biomass; 6500 mg/kg -> 130 kg metal
    assert!(close(p.total_biomass_kg, 20_000.0));
    assert!(close(p.total_metal_kg, 130.0));
    assert!(close(p.gross_revenue, 130.0 * 18.0));
    assert!(close(p.revenue_per_hectare.unwrap(), 130.0 * 18.0 / 2.5));
    assert!(close(p.ash_mass_kg, 1_600.0));
    assert!(close(p.metal_in_ash_percent.unwrap(), 130.0 / 1_600.0 * 100.0));
    // 8.125% metal in ash
    assert_eq!(p.ore_grade, OreGrade::Low);
}

#[test]
fn test_degenerate_inputs_do_not_produce_nan() {
    let p = project(&PhytominingInput {
        dry_biomass_t_per_ha: 0.0,
        ..base()
    });
    assert_eq!(p.total_metal_kg, 0.0);
    assert_eq!(p.gross_revenue, 0.0);
    assert_eq!(p.revenue_per_hectare, Some(0.0));
    assert_eq!(p.metal_in_ash_percent, None);
    assert_eq!(p.ore_grade, OreGrade::Undefined);
}
