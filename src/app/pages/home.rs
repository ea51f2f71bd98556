use crate::app::view::{NoticeLevel, RenderedPage};
use crate::app::view_model::PageId;
use crate::config::toml_config::DashboardConfig;

const OVERVIEW: &str = "\
### Bridging Fundamental Genetics & Field Application

The platform integrates three pillars of modern plant science:

1. **Metal Hyperaccumulation (Remediation)**
   * Based on: research on *Noccaea caerulescens* and ZIP transporters.
   * Goal: monitor soil cleanup progress and optimize harvest timing.

2. **Digital Phenotyping (Biomass)**
   * Based on: high-throughput imaging and photosynthesis studies.
   * Goal: predict yield/biomass from simple canopy images.

3. **Hidden Hunger (Diagnostics)**
   * Based on: nutrient homeostasis and deficiency signaling.
   * Goal: early detection of Zinc/Iron deficiency in crops.";

pub fn render(config: &DashboardConfig) -> RenderedPage {
    let mut page = RenderedPage::new(PageId::Home);
    page.heading(format!("Welcome to {}", config.dashboard.name))
        .markdown(OVERVIEW)
        .notice(
            NoticeLevel::Info,
            "Select a page (remediation, biomass, diagnostics, genetics, mining) to begin.",
        );
    page
}
