pub mod config;
mod constants;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod transform;
mod validation;

#[cfg(test)]
mod test_suite;

pub use pipeline::{DashboardData, Panel, Pipeline, RefreshReport};
