//! Column-label normalization for data-loading pipelines.
//!
//! Upstream exports name their columns inconsistently: `"Revenue Growth"`,
//! `"Q1-2023 Sales"`, sometimes a multi-level header like
//! `("Region", "Sub-Area")`. This crate lowercases each label and collapses
//! every run of spaces and hyphens into a single underscore, so the examples
//! above become `revenue_growth`, `q1_2023_sales`, and
//! `("region", "sub_area")`. The shape of a label is always preserved: a
//! scalar stays a scalar and a multi-level label keeps its arity and order.
//!
//! ```
//! use column_normalizer::{normalize_name, ColumnLabel};
//!
//! assert_eq!(normalize_name("Revenue Growth"), "revenue_growth");
//!
//! let header = ColumnLabel::from(("Region", "Sub-Area"));
//! assert_eq!(
//!     header.normalize(),
//!     ColumnLabel::Composite(vec!["region".into(), "sub_area".into()])
//! );
//! ```

mod label;
mod normalizer;

pub use label::ColumnLabel;
pub use normalizer::{normalize_headers, normalize_label, normalize_name};
