//! Export formats for iifconv.
//!
//! This crate turns a parsed IIF [`Document`] into files other accounting
//! tools can import:
//!
//! - QIF account lists with opening balances ([`QifExporter`])
//! - CSV contact lists for customers, vendors and other names ([`CsvExporter`])
//!
//! It also converts tab-delimited register reports straight to QIF bank
//! transactions ([`RegisterConverter`]), without going through the IIF reader.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use iifconv_core::{Document, Record, SectionType};
//! use iifconv_export::{export_qif_string, QifConfig};
//!
//! let doc = Document::new().with_record(
//!     Record::new(SectionType::Accnt)
//!         .with_text("NAME", "Checking")
//!         .with_text("ACCNTTYPE", "BANK"),
//! );
//! let config = QifConfig::new().today(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! let qif = export_qif_string(&doc, &config).unwrap();
//! assert_eq!(qif, "!Account\nNChecking\nTBank\n^\n!Type:bank\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod csv_export;
pub mod qif;
pub mod register;

use anyhow::{Context, Result};
use iifconv_core::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use config::{QifConfig, RegisterConfig, RegisterConfigBuilder};
pub use csv_export::{
    export_customers_csv, export_othernames_csv, export_vendors_csv, CsvExporter, CsvList,
};
pub use qif::{export_qif, export_qif_string, QifAccountType, QifExporter};
pub use register::{convert_register_file, convert_register_str, RegisterConverter, RegisterResult};

/// Trait for document exporters.
///
/// Implementors render some part of a [`Document`] in another file format.
pub trait Exporter {
    /// Returns the name of this exporter.
    fn name(&self) -> &str;

    /// Write the export to `out`, returning the number of records written.
    fn write_to(&self, document: &Document, out: &mut dyn Write) -> Result<usize>;

    /// Write the export to a file, replacing any existing content.
    fn export_file(&self, document: &Document, path: &Path) -> Result<usize> {
        let mut out = create_output(path)?;
        let count = self.write_to(document, &mut out)?;
        out.flush()
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        tracing::debug!(
            "{}: wrote {count} records to {}",
            self.name(),
            path.display()
        );
        Ok(count)
    }

    /// Render the export to a string.
    fn export_string(&self, document: &Document) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(document, &mut buf)?;
        String::from_utf8(buf).context("export produced invalid UTF-8")
    }
}

pub(crate) fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    Ok(BufWriter::new(file))
}
