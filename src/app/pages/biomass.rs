use crate::app::view::{NoticeLevel, RenderedPage};
use crate::app::view_model::{BiomassControls, PageId};
use crate::config::toml_config::BiomassConfig;
use crate::core::phenotyping;

pub const RATIO_METRIC: &str = "Green Pixel Ratio";
pub const CURRENT_METRIC: &str = "Est. Current Biomass";
pub const PROJECTED_METRIC: &str = "Projected Yield (Day 40)";

const NOTE: &str = "**Scientific Note:** This page mimics high-throughput phenotyping. \
By masking non-green pixels, we remove soil background to correlate 'Projected Canopy Area' \
with biomass.";

pub fn render(controls: &BiomassControls, config: &BiomassConfig) -> RenderedPage {
    let mut page = RenderedPage::new(PageId::Biomass);
    page.heading("Biomass Predictor").markdown(
        "Estimate plant biomass from top-down photos using Computer Vision (Greenness Index).",
    );

    let Some(upload) = &controls.upload else {
        page.notice(NoticeLevel::Info, "Please upload an image to start analysis.");
        return page;
    };

    let original = match phenotyping::decode_image(&upload.bytes) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!("⚠️ Upload '{}' rejected: {}", upload.name, e);
            page.notice(NoticeLevel::Error, e.to_string());
            return page;
        }
    };

    let analysis = phenotyping::analyze_greenness(&original);
    let estimate = phenotyping::estimate_biomass(
        analysis.green_ratio_percent,
        config.biomass_factor,
        config.growth_factor,
    );
    tracing::debug!(
        width = original.width(),
        height = original.height(),
        ratio = analysis.green_ratio_percent,
        "greenness computed"
    );

    page.image("original", "Original Image", original)
        .image("green_mask", "Green Mask (Computer Vision)", analysis.masked_image)
        .divider()
        .metric(RATIO_METRIC, format!("{:.1}%", estimate.green_ratio_percent))
        .metric(CURRENT_METRIC, format!("{:.1} g", estimate.current_biomass_g))
        .metric(PROJECTED_METRIC, format!("{:.1} g", estimate.projected_yield_g))
        .notice(NoticeLevel::Info, NOTE);
    page
}
