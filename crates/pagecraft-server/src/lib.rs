//! HTTP surface of the pagecraft service.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

pub use routing::create_router;
pub use state::AppState;
