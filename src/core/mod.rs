pub mod dashboard;
pub mod diagnostics;
pub mod economics;
pub mod export;
pub mod genetics;
pub mod phenotyping;
pub mod remediation;

pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
