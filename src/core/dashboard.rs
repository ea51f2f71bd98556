use crate::app::view::RenderedPage;
use crate::app::view_model::ViewModel;
use crate::app::pages;
use crate::config::toml_config::DashboardConfig;
use crate::core::export::{self, ExportManifest};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Result of one render pass.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub page: RenderedPage,
    pub manifest: Option<ExportManifest>,
}

/// Renders view models against a fixed configuration. Holds no state that
/// changes between passes.
pub struct Dashboard<S: Storage> {
    config: DashboardConfig,
    export_storage: Option<S>,
}

impl<S: Storage> Dashboard<S> {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            export_storage: None,
        }
    }

    pub fn with_export(config: DashboardConfig, storage: S) -> Self {
        Self {
            config,
            export_storage: Some(storage),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn render(&self, view_model: &ViewModel) -> RenderedPage {
        pages::render(view_model, &self.config)
    }

    pub fn run(&self, view_model: &ViewModel) -> Result<RenderOutput> {
        view_model.validate()?;

        let page_id = view_model.page();
        tracing::info!("🌱 Rendering page: {}", page_id.title());

        let page = self.render(view_model);
        tracing::info!(
            "✅ Rendered {} block(s), {} chart(s)",
            page.blocks.len(),
            page.charts().count()
        );

        let manifest = match &self.export_storage {
            Some(storage) => Some(export::export_page(storage, &page, &self.config.export)?),
            None => None,
        };

        Ok(RenderOutput { page, manifest })
    }
}
