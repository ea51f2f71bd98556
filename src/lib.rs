pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::LocalStorage;
pub use app::{PageId, RenderedPage, ViewModel};
pub use config::DashboardConfig;
pub use core::dashboard::{Dashboard, RenderOutput};
pub use utils::error::{PhytoError, Result};
