//! Web layer for the journey planner.
//!
//! Serves the presentational pages and the plan endpoint.

mod dto;
mod form;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use form::FormError;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
