pub mod category_filter;
pub use category_filter::{CategoryFilter, TableView, filter_by_category};
pub mod error;
pub mod scalar;
pub use scalar::{Combine, DerivedScalar, ScalarComponents, derive_scalar};
pub mod series;
pub use series::{MissingValuePolicy, Series, to_series, to_series_with_policy};
