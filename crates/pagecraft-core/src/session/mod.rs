//! Session domain: model and persistence contract.

mod model;
mod repository;

pub use model::{AnswerValue, ProductContext, Session, SessionStatus};
pub use repository::SessionRepository;
