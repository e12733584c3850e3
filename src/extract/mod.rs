pub mod date_parsing;
pub use date_parsing::{DateOrder, parse_date};
pub mod error;
pub mod row;
pub use row::{CellValue, Row};
pub mod tabular_source;
pub use tabular_source::TabularSource;
pub mod traits;
