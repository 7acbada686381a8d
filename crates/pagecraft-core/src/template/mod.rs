//! Detail-page template registry: model and persistence contract.

mod model;
mod repository;

pub use model::Template;
pub use repository::TemplateRepository;
