//! Reference-page analysis: model and persistence contract.

mod model;
mod repository;

pub use model::{AnalysisReport, ReferenceAnalysis};
pub use repository::AnalysisRepository;
