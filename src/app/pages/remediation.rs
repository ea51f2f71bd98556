use crate::app::view::{Chart, ChartKind, NoticeLevel, RenderedPage};
use crate::app::view_model::{PageId, RemediationControls};
use crate::config::toml_config::RemediationConfig;
use crate::core::remediation;
use crate::domain::model::SimulationRequest;

pub const SOIL_COLUMN: &str = "Soil Zinc (PPM)";
pub const PLANT_COLUMN: &str = "Accumulated Plant Zinc (mg/kg)";

const MECHANISM: &str = "**Genomic Driver:** The hyperaccumulation trait in *Noccaea caerulescens* \
is driven by genomic variations in the **HMA4** gene. Copy Number Variations (CNV) enable the \
plant to pump zinc from roots to shoots at high rates.";

pub fn render(controls: &RemediationControls, config: &RemediationConfig) -> RenderedPage {
    let request = SimulationRequest {
        initial_concentration: controls.initial_zinc_ppm,
        duration_weeks: controls.weeks,
    };
    let series = remediation::simulate_with(&request, &config.params());
    let summary = remediation::summarize(&request, &series, config.safe_limit_ppm);

    tracing::debug!(
        initial = request.initial_concentration,
        weeks = request.duration_weeks,
        final_soil = summary.final_soil,
        "remediation series computed"
    );

    let soil_rows = series
        .points
        .iter()
        .map(|p| vec![f64::from(p.week), p.soil_concentration])
        .collect();
    let plant_rows = series
        .points
        .iter()
        .map(|p| vec![f64::from(p.week), p.plant_accumulation])
        .collect();

    let mut page = RenderedPage::new(PageId::Remediation);
    page.heading("Phytoremediation Tracker")
        .markdown(
            "Monitor the removal of heavy metals (Zinc) from contaminated soil using \
             *Noccaea caerulescens*.",
        )
        .notice(NoticeLevel::Info, MECHANISM)
        .metric("Initial Soil Zinc (PPM)", format!("{:.0}", controls.initial_zinc_ppm))
        .metric("Growth Duration (Weeks)", controls.weeks.to_string())
        .chart(
            Chart::new("soil_cleanup", ChartKind::Line, "Soil Zinc Depletion", "Week", SOIL_COLUMN)
                .with_rows(soil_rows),
        )
        .chart(
            Chart::new(
                "plant_accumulation",
                ChartKind::Area,
                "Zinc Accumulation in Plant Tissue",
                "Week",
                PLANT_COLUMN,
            )
            .with_rows(plant_rows)
            .with_reference_line(config.hyperaccumulation_threshold, "Hyperaccumulation Threshold"),
        )
        .notice(
            NoticeLevel::Success,
            format!(
                "**Remediation Status:** {:.1}% reduction in soil Zinc.",
                summary.removed_percent
            ),
        );

    if summary.within_safe_limit {
        page.notice(NoticeLevel::Info, "Soil is now within safe agricultural limits!");
    } else {
        let estimate = match summary.weeks_to_safe_limit {
            Some(weeks) => format!("Estimated {:.1} more weeks needed.", weeks),
            None => "No measurable removal yet.".to_string(),
        };
        page.notice(
            NoticeLevel::Warning,
            format!(
                "Soil still above safe limit ({:.0} PPM). {}",
                config.safe_limit_ppm, estimate
            ),
        );
    }

    page
}
