use crate::app::pages::format_money;
use crate::app::view::{NoticeLevel, RenderedPage};
use crate::app::view_model::{MiningControls, PageId};
use crate::config::toml_config::MiningConfig;
use crate::core::economics;
use crate::domain::model::{Metal, OreGrade, PhytominingInput};

pub const METAL_METRIC: &str = "Total Metal Harvested";
pub const REVENUE_METRIC: &str = "Gross Revenue";
pub const PER_HECTARE_METRIC: &str = "Revenue per Hectare";

const UNDEFINED: &str = "undefined";

pub fn render(controls: &MiningControls, config: &MiningConfig) -> RenderedPage {
    let price_per_kg = controls
        .price_per_kg
        .unwrap_or_else(|| config.price(controls.metal));
    let input = PhytominingInput {
        hectares: controls.hectares,
        dry_biomass_t_per_ha: controls.dry_biomass_t_per_ha,
        concentration_mg_per_kg: controls.concentration_mg_per_kg,
        metal: controls.metal,
        price_per_kg,
    };
    let projection =
        economics::project_with(&input, config.ash_fraction, config.high_grade_threshold_pct);

    let mut page = RenderedPage::new(PageId::Mining);
    page.heading("Phytomining Economy")
        .markdown(
            "Calculate the economic potential of **\"farming for metals\"** (Phytomining), \
             connecting *biomass yield* and *metal accumulation* to market value.",
        )
        .divider()
        .metric("Land Area (Hectares)", format!("{:.1}", input.hectares))
        .metric("Dry Biomass Yield (tons/ha)", format!("{:.1}", input.dry_biomass_t_per_ha))
        .metric("Target Metal", input.metal.display_name())
        .metric(
            "Plant Concentration (mg/kg)",
            format!("{:.0}", input.concentration_mg_per_kg),
        )
        .metric("Market Price ($/kg)", format_money(input.price_per_kg))
        .divider()
        .heading("Economic Projection")
        .metric(METAL_METRIC, format!("{:.1} kg", projection.total_metal_kg))
        .metric(REVENUE_METRIC, format_money(projection.gross_revenue))
        .metric(
            PER_HECTARE_METRIC,
            projection
                .revenue_per_hectare
                .map_or_else(|| UNDEFINED.to_string(), |v| format!("{} /ha", format_money(v))),
        );

    let grade = match projection.ore_grade {
        OreGrade::High => "High-grade ore! Smelters pay a premium for this.",
        OreGrade::Low => "Low grade, might need enrichment.",
        OreGrade::Undefined => "Grade undefined: no biomass, so no ash.",
    };
    let in_ash = projection
        .metal_in_ash_percent
        .map_or_else(|| UNDEFINED.to_string(), |pct| format!("{:.1}%", pct));
    page.notice(
        NoticeLevel::Info,
        format!(
            "**Bio-ore Analysis:** After burning the biomass for energy, you would be left with \
             **{:.0} kg of Bio-ore ash** containing approx. **{} {}**. *{}*",
            projection.ash_mass_kg,
            in_ash,
            input.metal.element(),
            grade
        ),
    );

    if input.metal == Metal::Nickel {
        page.notice(
            NoticeLevel::Success,
            "**Insight:** Nickel phytomining is generally more profitable than Zinc due to \
             higher market prices.",
        );
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_projection() {
        let page = render(&MiningControls::default(), &MiningConfig::default());
        assert_eq!(page.metric_value(METAL_METRIC), Some("100.0 kg"));
        assert_eq!(page.metric_value(REVENUE_METRIC), Some("$250.00"));
        assert_eq!(page.metric_value(PER_HECTARE_METRIC), Some("$250.00 /ha"));
        let info = page.notices(NoticeLevel::Info).next().unwrap();
        assert!(info.contains("800 kg"));
        assert!(info.contains("12.5% Zinc"));
        assert!(info.contains("High-grade"));
        assert_eq!(page.notices(NoticeLevel::Success).count(), 0);
    }

    #[test]
    fn test_nickel_uses_configured_price() {
        let controls = MiningControls {
            metal: Metal::Nickel,
            ..MiningControls::default()
        };
        let page = render(&controls, &MiningConfig::default());
        assert_eq!(page.metric_value(REVENUE_METRIC), Some("$1,800.00"));
        assert_eq!(page.notices(NoticeLevel::Success).count(), 1);
    }

    #[test]
    fn test_zero_hectares_render_undefined() {
        let controls = MiningControls {
            hectares: 0.0,
            ..MiningControls::default()
        };
        let page = render(&controls, &MiningConfig::default());
        assert_eq!(page.metric_value(PER_HECTARE_METRIC), Some(UNDEFINED));
        assert!(page
            .notices(NoticeLevel::Info)
            .next()
            .unwrap()
            .contains("undefined"));
    }
}
