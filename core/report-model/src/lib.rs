//! FILENAME: core/report-model/src/lib.rs
//! PURPOSE: Shared types for the report presentation crates.
//! CONTEXT: Holds the report payload model, numeric normalization of cells
//! and formatting of totals. Engines depend on this crate only for types.

pub mod cell;
pub mod error;
pub mod normalize;
pub mod number_format;
pub mod response;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use error::ModelError;
pub use normalize::{normalize, parse_localized_number, transliterate_digits, PLACEHOLDER_DASH};
pub use number_format::{format_decimal, format_total, TotalFormat};
pub use response::{
    ChartDescriptor, ChartType, ColumnDescriptor, ReportMetadata, ReportResponse, Row,
};
