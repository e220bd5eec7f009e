//! Core types for iifconv
//!
//! This crate provides the typed model of an IIF (Intuit Interchange Format)
//! file:
//!
//! - [`SectionType`] - The closed set of section tags (`ACCNT`, `VEND`, ...)
//! - [`Schema`] - The ordered field layout of a section, with decode/encode
//! - [`Record`] - One entity, holding a value per schema field
//! - [`Document`] - Records grouped by section type
//! - [`NumberFormat`] - Explicit decimal and group separators for reading and writing
//!
//! # Example
//!
//! ```
//! use iifconv_core::{schema_for, FieldMap, NumberFormat, SectionType};
//!
//! let schema = schema_for(SectionType::Accnt);
//! let fields = FieldMap::zip(
//!     ["NAME", "ACCNTTYPE", "OBAMOUNT"],
//!     ["Checking", "BANK", "1,234.50"],
//! );
//! let record = schema.decode(&fields);
//!
//! assert_eq!(record.float("OBAMOUNT"), Some(1234.5));
//! assert_eq!(
//!     schema.encode(&record, &NumberFormat::default()),
//!     "ACCNT\tChecking\t\t0\tBANK\t\"1,234.50\"\t\t\t0\t"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod coerce;
pub mod document;
pub mod format;
pub mod record;
pub mod schema;
pub mod section;

pub use coerce::{parse_float, parse_float_with, parse_int, parse_int_with};
pub use document::Document;
pub use format::{format_money, format_plain, NumberFormat};
pub use record::{Record, Value};
pub use schema::{schema_for, Blank, FieldDef, FieldKind, FieldMap, Schema, BUDGET_PERIODS};
pub use section::{SectionType, UnknownSection};
