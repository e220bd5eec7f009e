//! Register report to QIF conversion.
//!
//! A register report is a delimited text export of one account's
//! transactions. It may start with a title row (a single field) and has a
//! header row somewhere near the top, identified by the configured header
//! token. Every row after the header becomes one QIF bank transaction.

use crate::config::RegisterConfig;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Result of a register conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterResult {
    /// The report title, if the report had one.
    pub title: Option<String>,
    /// Number of transactions written.
    pub transactions: usize,
    /// Rows skipped for being too short to hold a date.
    pub warnings: Vec<String>,
}

impl RegisterResult {
    /// Add a warning to the result.
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    payee: Option<usize>,
    memo: Option<usize>,
    amount: Option<usize>,
    cleared: Option<usize>,
    account: Option<usize>,
}

impl Columns {
    fn resolve(header: &csv::StringRecord, config: &RegisterConfig) -> Result<Self> {
        // First occurrence of a repeated column name wins.
        let header_map = header
            .iter()
            .enumerate()
            .fold(HashMap::new(), |mut map: HashMap<&str, usize>, (i, name)| {
                map.entry(name).or_insert(i);
                map
            });
        let find = |name: &str| header_map.get(name).copied();

        Ok(Self {
            date: find(&config.date_column).with_context(|| {
                format!("Column '{}' not found in header", config.date_column)
            })?,
            payee: find(&config.payee_column),
            memo: find(&config.memo_column),
            amount: find(&config.amount_column),
            cleared: find(&config.cleared_column),
            account: find(&config.account_column),
        })
    }
}

fn field(record: &csv::StringRecord, index: Option<usize>) -> &str {
    index
        .and_then(|i| record.get(i))
        .map_or("", str::trim)
}

/// Converts register reports to QIF.
#[derive(Debug, Clone, Default)]
pub struct RegisterConverter {
    config: RegisterConfig,
}

impl RegisterConverter {
    /// Create a converter with the given configuration.
    #[must_use]
    pub const fn new(config: RegisterConfig) -> Self {
        Self { config }
    }

    fn reader<'a>(&self, content: &'a str) -> Result<csv::Reader<&'a [u8]>> {
        let delimiter = u8::try_from(self.config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| {
                format!(
                    "delimiter '{}' is not a single ASCII character",
                    self.config.delimiter
                )
            })?;
        Ok(csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(content.as_bytes()))
    }

    /// Find the title and header rows.
    fn scan(&self, content: &str) -> Result<(Option<String>, csv::StringRecord)> {
        let mut title = None;
        for (index, row) in self.reader(content)?.records().enumerate() {
            let row = row.with_context(|| format!("Row {}: failed to read", index + 1))?;
            if row.len() == 1 {
                title = row.get(0).map(ToString::to_string);
                continue;
            }
            if row.iter().any(|f| f == self.config.header_token) {
                return Ok((title, row));
            }
        }
        bail!(
            "no header row containing '{}' found",
            self.config.header_token
        )
    }

    /// Convert register content, writing QIF to `out`.
    pub fn write_to(&self, content: &str, out: &mut dyn Write) -> Result<RegisterResult> {
        let (title, header) = self.scan(content)?;
        let columns = Columns::resolve(&header, &self.config)?;

        let mut result = RegisterResult {
            title,
            ..RegisterResult::default()
        };
        writeln!(out, "!Type:{}", self.config.account_type)?;

        for (index, row) in self.reader(content)?.records().enumerate() {
            let row_num = index + 1;
            let row = row.with_context(|| format!("Row {row_num}: failed to read"))?;

            // Title rows
            if row.len() <= 1 {
                continue;
            }
            let Some(date) = row.get(columns.date) else {
                if row.iter().any(|f| !f.trim().is_empty()) {
                    tracing::warn!("row {row_num}: no {} column, skipped", self.config.date_column);
                    result = result.with_warning(format!(
                        "Row {row_num}: no {} column, skipped",
                        self.config.date_column
                    ));
                }
                continue;
            };
            if date == self.config.date_column || Some(date) == result.title.as_deref() {
                continue;
            }
            if row.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            let parsed = NaiveDate::parse_from_str(date.trim(), &self.config.input_date_format)
                .with_context(|| {
                    format!(
                        "Row {row_num}: failed to parse date '{date}' with format '{}'",
                        self.config.input_date_format
                    )
                })?;

            writeln!(out, "D{}", parsed.format(&self.config.output_date_format))?;
            writeln!(out, "T{}", field(&row, columns.amount))?;
            for (code, index) in [('P', columns.payee), ('M', columns.memo), ('L', columns.account)] {
                let value = field(&row, index);
                if !value.is_empty() {
                    writeln!(out, "{code}{value}")?;
                }
            }
            if !field(&row, columns.cleared).is_empty() {
                writeln!(out, "C*")?;
            }
            writeln!(out, "^")?;
            result.transactions += 1;
        }

        tracing::debug!("converted {} register transactions", result.transactions);
        Ok(result)
    }

    /// Convert register content to a QIF string.
    pub fn convert_str(&self, content: &str) -> Result<(String, RegisterResult)> {
        let mut buf = Vec::new();
        let result = self.write_to(content, &mut buf)?;
        let qif = String::from_utf8(buf).context("conversion produced invalid UTF-8")?;
        Ok((qif, result))
    }

    /// Convert a register file into a QIF file.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<RegisterResult> {
        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to open file: {}", input.display()))?;
        let mut out = crate::create_output(output)?;
        let result = self.write_to(&content, &mut out)?;
        out.flush()
            .with_context(|| format!("Failed to write file: {}", output.display()))?;
        Ok(result)
    }
}

/// Convert register content to QIF with the given configuration.
pub fn convert_register_str(content: &str, config: &RegisterConfig) -> Result<String> {
    RegisterConverter::new(config.clone())
        .convert_str(content)
        .map(|(qif, _)| qif)
}

/// Convert a register file into a QIF file.
pub fn convert_register_file(
    input: &Path,
    output: &Path,
    config: &RegisterConfig,
) -> Result<RegisterResult> {
    RegisterConverter::new(config.clone()).convert_file(input, output)
}
