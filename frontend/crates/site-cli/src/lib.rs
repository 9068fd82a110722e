//! site-cli library
//!
//! Bootstrap and page rendering for the `site` binary, exported for tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod page;
pub mod visit_step;

#[cfg(test)]
mod tests;

pub use app::App;
pub use error::{AppError, AppResult};
pub use page::{AccountArea, NavLink, Page};
pub use visit_step::VisitStep;
