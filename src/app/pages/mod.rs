//! One render handler per page. Handlers are infallible: bad input that
//! survives validation (an undecodable upload, an unselected dropdown)
//! renders as a notice on the page.

pub mod biomass;
pub mod diagnostics;
pub mod genetics;
pub mod home;
pub mod mining;
pub mod remediation;

use crate::app::view::RenderedPage;
use crate::app::view_model::ViewModel;
use crate::config::toml_config::DashboardConfig;

pub fn render(view_model: &ViewModel, config: &DashboardConfig) -> RenderedPage {
    match view_model {
        ViewModel::Home => home::render(config),
        ViewModel::Remediation(controls) => remediation::render(controls, &config.remediation),
        ViewModel::Biomass(controls) => biomass::render(controls, &config.biomass),
        ViewModel::Diagnostics(controls) => diagnostics::render(controls),
        ViewModel::Genetics(controls) => genetics::render(controls),
        ViewModel::Mining(controls) => mining::render(controls, &config.mining),
    }
}

/// `$1,234.56` style currency.
pub(crate) fn format_money(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, frac)
}
