//! IIF reader and writer for iifconv.
//!
//! An IIF file is a sequence of sections. Each section starts with a header
//! line (`!TAG\tFIELD1\tFIELD2...`) naming its columns, followed by data
//! lines (`TAG\tvalue1\tvalue2...`).
//!
//! # Features
//!
//! - Header-driven field mapping for every known section type
//! - Strict structure checks (no data outside sections, no surplus values)
//! - Unknown sections reported as warnings
//! - Canonical re-serialization with configurable number separators
//!
//! # Example
//!
//! ```
//! use iifconv_core::SectionType;
//! use iifconv_parser::{parse_str, to_string};
//!
//! let doc = parse_str("!CLASS\tNAME\tREFNUM\nCLASS\tOps\t4\n").unwrap();
//! assert_eq!(doc.records(SectionType::Class)[0].key(), "Ops");
//!
//! let out = to_string(&doc);
//! assert!(out.contains("!CLASS\tNAME\tREFNUM\tTIMESTAMP\nCLASS\tOps\t4\t0\n"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{ParseError, ParseErrorKind, ReadError, WriteError};
pub use reader::{parse_file, parse_str, FieldAlignment, IifReader, ReadResult, ReaderConfig};
pub use writer::{to_string, write_file, IifWriter, WriterConfig};
