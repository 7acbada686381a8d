//! Generation history: model and persistence contract.

mod model;
mod repository;

pub use model::{GenerationHistory, OutputFormat};
pub use repository::HistoryRepository;
