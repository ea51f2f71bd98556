// Application layer: view model in, rendered page out.

pub mod pages;
pub mod view;
pub mod view_model;

pub use pages::render;
pub use view::{Block, Chart, ChartKind, NoticeLevel, RenderedPage};
pub use view_model::{PageId, ViewModel};
