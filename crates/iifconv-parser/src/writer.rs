//! IIF writer.
//!
//! Every known section is written in canonical order, header first, even
//! when it holds no records.

use crate::error::WriteError;
use iifconv_core::{schema_for, Document, NumberFormat, SectionType};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const BYTE_ORDER_MARK: &str = "\u{feff}";

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Separators for money amounts.
    pub number_format: NumberFormat,
    /// Whether to start the output with a UTF-8 byte-order mark.
    pub byte_order_mark: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::default(),
            byte_order_mark: true,
        }
    }
}

impl WriterConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number format.
    #[must_use]
    pub const fn number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Set whether a byte-order mark is written.
    #[must_use]
    pub const fn byte_order_mark(mut self, enabled: bool) -> Self {
        self.byte_order_mark = enabled;
        self
    }
}

/// IIF writer.
#[derive(Debug, Clone, Default)]
pub struct IifWriter {
    config: WriterConfig,
}

impl IifWriter {
    /// Create a writer with the given configuration.
    #[must_use]
    pub const fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    fn lines<'a>(&'a self, document: &'a Document) -> impl Iterator<Item = String> + 'a {
        SectionType::ALL.into_iter().flat_map(move |section| {
            let schema = schema_for(section);
            std::iter::once(schema.header_line()).chain(
                document
                    .records(section)
                    .iter()
                    .map(move |record| schema.encode(record, &self.config.number_format)),
            )
        })
    }

    /// Write a document to any writer.
    pub fn write<W: Write>(&self, document: &Document, out: &mut W) -> io::Result<()> {
        if self.config.byte_order_mark {
            out.write_all(BYTE_ORDER_MARK.as_bytes())?;
        }
        for line in self.lines(document) {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render a document to a string.
    #[must_use]
    pub fn write_string(&self, document: &Document) -> String {
        let mut out = String::new();
        if self.config.byte_order_mark {
            out.push_str(BYTE_ORDER_MARK);
        }
        for line in self.lines(document) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Write a document to a file, replacing any existing content.
    pub fn write_file(&self, document: &Document, path: &Path) -> Result<(), WriteError> {
        let to_error = |source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(to_error)?;
        let mut out = BufWriter::new(file);
        self.write(document, &mut out).map_err(to_error)?;
        out.flush().map_err(to_error)?;
        tracing::debug!("wrote {} records to {}", document.len(), path.display());
        Ok(())
    }
}

/// Render a document with the default configuration.
#[must_use]
pub fn to_string(document: &Document) -> String {
    IifWriter::default().write_string(document)
}

/// Write a document to a file with the default configuration.
pub fn write_file(document: &Document, path: &Path) -> Result<(), WriteError> {
    IifWriter::default().write_file(document, path)
}
