//! IIF reader.
//!
//! The reader is a two-state machine over lines: either no section is open,
//! or a section is open together with the field names from its `!` header.
//! Data lines are decoded through the section's schema.

use crate::error::{ParseError, ParseErrorKind, ReadError};
use iifconv_core::{schema_for, Document, FieldMap, NumberFormat, SectionType};
use std::fs;
use std::path::Path;

/// How field names from a header line are paired with data-line values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldAlignment {
    /// The header's tag token pairs with the data line's tag token, so the
    /// first field name pairs with the second value.
    #[default]
    Tagged,
    /// Field names (tag excluded) pair with the full value list (tag
    /// included), shifting every field one column to the left.
    Positional,
}

/// Reader configuration.
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Header/value pairing.
    pub alignment: FieldAlignment,
    /// Separators used by integer and money fields.
    pub number_format: NumberFormat,
}

impl ReaderConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: FieldAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the separators used to read numbers.
    #[must_use]
    pub fn number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

/// Result of reading an IIF file.
#[derive(Debug, Clone)]
pub struct ReadResult {
    /// The parsed records.
    pub document: Document,
    /// Non-fatal diagnostics, such as unknown section tags.
    pub warnings: Vec<String>,
}

enum State<'a> {
    NoSection,
    InSection {
        section: SectionType,
        tag: &'a str,
        columns: Vec<&'a str>,
    },
}

/// IIF reader.
#[derive(Debug, Clone, Default)]
pub struct IifReader {
    config: ReaderConfig,
}

impl IifReader {
    /// Create a reader with the given configuration.
    #[must_use]
    pub const fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file from disk.
    pub fn read_file(&self, path: &Path) -> Result<ReadResult, ReadError> {
        let content = fs::read_to_string(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut warnings = Vec::new();
        match self.read_lines(&content, &mut warnings) {
            Ok(document) => Ok(ReadResult { document, warnings }),
            Err(error) => Err(ReadError::Parse {
                path: path.to_path_buf(),
                error,
                warnings,
            }),
        }
    }

    /// Read IIF content.
    pub fn read_str(&self, content: &str) -> Result<ReadResult, ParseError> {
        let mut warnings = Vec::new();
        let document = self.read_lines(content, &mut warnings)?;
        Ok(ReadResult { document, warnings })
    }

    /// Decode every line into a document, appending diagnostics to `warnings`
    /// as they are found so they survive a later fatal error.
    fn read_lines(
        &self,
        content: &str,
        warnings: &mut Vec<String>,
    ) -> Result<Document, ParseError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut document = Document::new();
        let mut state = State::NoSection;

        for (index, line) in content.lines().enumerate() {
            let line_num = index + 1;
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('!') {
                let mut tokens = header.split('\t');
                let tag = tokens.next().unwrap_or_default();
                state = match SectionType::from_tag(tag) {
                    Some(section) => {
                        tracing::debug!("line {line_num}: entering section {section}");
                        State::InSection {
                            section,
                            tag,
                            columns: tokens.collect(),
                        }
                    }
                    None => {
                        tracing::debug!("line {line_num}: unknown section '{tag}'");
                        warnings.push(format!("line {line_num}: unknown section '{tag}'"));
                        State::NoSection
                    }
                };
                continue;
            }

            let State::InSection {
                section,
                tag,
                columns,
            } = &state
            else {
                return Err(
                    ParseError::new(ParseErrorKind::NoOpenSection, line_num).with_context(line)
                );
            };

            let values: Vec<&str> = line.split('\t').collect();
            if columns.len() + 1 < values.len() {
                return Err(ParseError::new(
                    ParseErrorKind::TooManyValues {
                        section: *section,
                        declared: columns.len(),
                        found: values.len(),
                    },
                    line_num,
                )
                .with_context(line));
            }

            if section.is_group_end() {
                state = State::NoSection;
                continue;
            }

            let fields = match self.config.alignment {
                FieldAlignment::Tagged => FieldMap::zip(
                    std::iter::once(*tag).chain(columns.iter().copied()),
                    values,
                ),
                FieldAlignment::Positional => FieldMap::zip(columns.iter().copied(), values),
            };
            let schema = schema_for(*section);
            document.push(schema.decode_with(&fields, &self.config.number_format));
        }

        Ok(document)
    }
}

/// Parse IIF content with the default configuration.
pub fn parse_str(content: &str) -> Result<Document, ParseError> {
    IifReader::default()
        .read_str(content)
        .map(|result| result.document)
}

/// Parse an IIF file with the default configuration.
pub fn parse_file(path: &Path) -> Result<Document, ReadError> {
    IifReader::default()
        .read_file(path)
        .map(|result| result.document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{IifWriter, WriterConfig};
    use iifconv_core::Record;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ACCOUNTS: &str = "!ACCNT\tNAME\tREFNUM\tTIMESTAMP\tACCNTTYPE\tOBAMOUNT\tDESC\n\
                            ACCNT\tChecking\t1\t1700000000\tBANK\t\"1,234.50\"\tMain account\n\
                            ACCNT\tRent\t2\t1700000001\tEXP\t\t\n";

    // ========== Section handling ==========

    #[test]
    fn test_read_accounts() {
        let doc = parse_str(ACCOUNTS).unwrap();
        let accounts = doc.records(SectionType::Accnt);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].text("NAME"), "Checking");
        assert_eq!(accounts[0].int("REFNUM"), Some(1));
        assert_eq!(accounts[0].float("OBAMOUNT"), Some(1234.5));
        assert_eq!(accounts[0].text("DESC"), "Main account");
        assert_eq!(accounts[1].text("ACCNTTYPE"), "EXP");
        assert_eq!(accounts[1].float("OBAMOUNT"), None);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_bom_crlf_and_blank_lines() {
        let content = "\u{feff}!CLASS\tNAME\tREFNUM\tTIMESTAMP\r\n\r\nCLASS\tOps\t4\t0\r\n\n";
        let doc = parse_str(content).unwrap();
        let classes = doc.records(SectionType::Class);
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].text("NAME"), "Ops");
        assert_eq!(classes[0].int("TIMESTAMP"), Some(0));
    }

    #[test]
    fn test_multiple_sections_grouped_by_type() {
        let content = "!CLASS\tNAME\n\
                       CLASS\tA\n\
                       !VTYPE\tNAME\n\
                       VTYPE\tSupplies\n\
                       !CLASS\tNAME\n\
                       CLASS\tB\n";
        let doc = parse_str(content).unwrap();
        let classes: Vec<&str> = doc
            .records(SectionType::Class)
            .iter()
            .map(|r| r.key())
            .collect();
        assert_eq!(classes, ["A", "B"]);
        assert_eq!(doc.records(SectionType::VType).len(), 1);
    }

    #[test]
    fn test_shorter_line_leaves_fields_empty() {
        let doc = parse_str("!VEND\tNAME\tREFNUM\tTIMESTAMP\tPRINTAS\nVEND\tAcme\n").unwrap();
        let vendor = &doc.records(SectionType::Vend)[0];
        assert_eq!(vendor.text("NAME"), "Acme");
        assert_eq!(vendor.int("REFNUM"), None);
        assert_eq!(vendor.text("PRINTAS"), "");
    }

    #[test]
    fn test_header_columns_in_any_order() {
        let doc = parse_str("!CUST\tEMAIL\tNAME\nCUST\ta@b.com\tJane\n").unwrap();
        let customer = &doc.records(SectionType::Cust)[0];
        assert_eq!(customer.text("NAME"), "Jane");
        assert_eq!(customer.text("EMAIL"), "a@b.com");
    }

    #[test]
    fn test_unknown_columns_ignored() {
        let doc = parse_str("!CLASS\tNAME\tHIDDEN\nCLASS\tA\tN\n").unwrap();
        assert_eq!(doc.records(SectionType::Class)[0].key(), "A");
    }

    #[test]
    fn test_invoice_memo_section() {
        let doc = parse_str("!INVMEMO\tNAME\tREFNUM\nINVMEMO\tThanks!\t3\n").unwrap();
        assert_eq!(doc.records(SectionType::InvMemo)[0].key(), "Thanks!");
    }

    #[test]
    fn test_end_of_input_inside_section() {
        let doc = parse_str("!CLASS\tNAME\nCLASS\tA").unwrap();
        assert_eq!(doc.records(SectionType::Class).len(), 1);
    }

    // ========== ENDGRP ==========

    #[test]
    fn test_endgrp_closes_section() {
        let content = "!ENDGRP\nENDGRP\n";
        let doc = parse_str(content).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_data_after_endgrp_fails() {
        let err = parse_str("!ENDGRP\nENDGRP\nCLASS\tA\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoOpenSection);
        assert_eq!(err.line, 3);
    }

    // ========== Failures ==========

    #[test]
    fn test_data_without_section_fails() {
        let err = parse_str("CLASS\tA\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoOpenSection);
        assert_eq!(err.line, 1);
        assert_eq!(err.context.as_deref(), Some("CLASS\tA"));
    }

    #[test]
    fn test_unknown_section_then_data_fails() {
        let err = parse_str("!FOOBAR\tNAME\nFOOBAR\tX\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoOpenSection);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_unknown_section_without_data_warns() {
        let content = "!TRNS\tDATE\n!CLASS\tNAME\nCLASS\tA\n";
        let result = IifReader::default().read_str(content).unwrap();
        assert_eq!(result.warnings, ["line 1: unknown section 'TRNS'"]);
        assert_eq!(result.document.len(), 1);
    }

    #[test]
    fn test_too_many_values_fails() {
        let err = parse_str("!CLASS\tNAME\tREFNUM\nCLASS\tA\t1\textra\n").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::TooManyValues {
                section: SectionType::Class,
                declared: 2,
                found: 4,
            }
        );
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_value_count_at_limit_is_accepted() {
        let doc = parse_str("!CLASS\tNAME\tREFNUM\nCLASS\tA\t1\n").unwrap();
        assert_eq!(doc.records(SectionType::Class)[0].int("REFNUM"), Some(1));
    }

    // ========== Field alignment ==========

    #[test]
    fn test_tagged_alignment_maps_first_field_to_second_value() {
        let content = "!CLASS\tNAME\tREFNUM\tTIMESTAMP\nCLASS\tOps\t4\t99\n";
        let result = IifReader::new(ReaderConfig::new().alignment(FieldAlignment::Tagged))
            .read_str(content)
            .unwrap();
        let record = &result.document.records(SectionType::Class)[0];
        assert_eq!(record.text("NAME"), "Ops");
        assert_eq!(record.int("REFNUM"), Some(4));
        assert_eq!(record.int("TIMESTAMP"), Some(99));
    }

    #[test]
    fn test_positional_alignment_shifts_fields() {
        let content = "!CLASS\tNAME\tREFNUM\tTIMESTAMP\nCLASS\tOps\t4\t99\n";
        let result = IifReader::new(ReaderConfig::new().alignment(FieldAlignment::Positional))
            .read_str(content)
            .unwrap();
        let record = &result.document.records(SectionType::Class)[0];
        assert_eq!(record.text("NAME"), "CLASS");
        assert_eq!(record.int("REFNUM"), None);
        assert_eq!(record.int("TIMESTAMP"), Some(4));
    }

    #[test]
    fn test_positional_alignment_same_arity_rule() {
        let content = "!CLASS\tNAME\nCLASS\tA\tB\n";
        let reader = IifReader::new(ReaderConfig::new().alignment(FieldAlignment::Positional));
        assert!(reader.read_str(content).is_err());
    }

    #[test]
    fn test_repeated_header_column_last_wins() {
        let doc = parse_str("!CLASS\tNAME\tNAME\nCLASS\tfirst\tsecond\n").unwrap();
        assert_eq!(doc.records(SectionType::Class)[0].key(), "second");
    }

    // ========== Budgets ==========

    #[test]
    fn test_read_budget_numbered_amounts() {
        let amounts: Vec<String> = (1..=12).map(|n| format!("AMOUNT{n}")).collect();
        let values: Vec<String> = (1..=12).map(|n| format!("{}.5", n * 100)).collect();
        let content = format!(
            "!BUD\tACCNT\tPERIOD\t{}\tSTARTDATE\nBUD\tRent\tMONTH\t{}\t1/1/2024\n",
            amounts.join("\t"),
            values.join("\t")
        );
        let doc = parse_str(&content).unwrap();
        let budget = &doc.records(SectionType::Bud)[0];
        assert_eq!(budget.key(), "Rent");
        assert_eq!(budget.text("STARTDATE"), "1/1/2024");
        let read = budget.amounts("AMOUNT");
        assert_eq!(read.len(), 12);
        assert_eq!(read[0], Some(100.5));
        assert_eq!(read[11], Some(1200.5));
    }

    #[test]
    fn test_read_budget_repeated_amount_label() {
        let content = "!BUD\tACCNT\tPERIOD\tAMOUNT\tAMOUNT\tAMOUNT\tCLASS\n\
                       BUD\tRent\tMONTH\t10.0\t\t30.0\tOps\n";
        let doc = parse_str(content).unwrap();
        let budget = &doc.records(SectionType::Bud)[0];
        assert_eq!(&budget.amounts("AMOUNT")[..4], [Some(10.0), None, Some(30.0), None]);
        assert_eq!(budget.text("CLASS"), "Ops");
    }

    // ========== Number formats ==========

    #[test]
    fn test_read_european_amounts() {
        let content = "!ACCNT\tNAME\tOBAMOUNT\nACCNT\tCash\t\"2.500,00\"\n";
        let reader = IifReader::new(
            ReaderConfig::new().number_format(NumberFormat::new(',', Some('.'))),
        );
        let result = reader.read_str(content).unwrap();
        let account = &result.document.records(SectionType::Accnt)[0];
        assert_eq!(account.float("OBAMOUNT"), Some(2500.0));
    }

    #[test]
    fn test_european_writer_output_reads_back() {
        let format = NumberFormat::new(',', Some('.'));
        let doc = Document::new().with_record(
            Record::new(SectionType::Accnt)
                .with_text("NAME", "Cash")
                .with_int("TIMESTAMP", 0)
                .with_int("SCD", 0)
                .with_float("OBAMOUNT", 2500.0),
        );
        let writer = IifWriter::new(WriterConfig::new().number_format(format.clone()));
        let written = writer.write_string(&doc);
        assert!(written.contains("\t\"2.500,00\"\t"));
        let reread = IifReader::new(ReaderConfig::new().number_format(format))
            .read_str(&written)
            .unwrap();
        assert_eq!(reread.document, doc);
    }

    // ========== Files ==========

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::with_suffix(".iif").unwrap();
        file.write_all(ACCOUNTS.as_bytes()).unwrap();
        file.flush().unwrap();

        let doc = parse_file(file.path()).unwrap();
        assert_eq!(doc.records(SectionType::Accnt).len(), 2);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/nonexistent/list.iif")).unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }

    #[test]
    fn test_parse_file_malformed_reports_path() {
        let mut file = NamedTempFile::with_suffix(".iif").unwrap();
        file.write_all(b"CLASS\tA\n").unwrap();
        file.flush().unwrap();

        let err = parse_file(file.path()).unwrap_err();
        assert!(matches!(err, ReadError::Parse { .. }));
        assert!(err.to_string().contains("data line outside of any section"));
    }

    #[test]
    fn test_read_file_keeps_warnings_on_failure() {
        let mut file = NamedTempFile::with_suffix(".iif").unwrap();
        file.write_all(b"!FOOBAR\tNAME\nFOOBAR\tX\n").unwrap();
        file.flush().unwrap();

        let err = IifReader::default().read_file(file.path()).unwrap_err();
        assert_eq!(err.warnings(), ["line 1: unknown section 'FOOBAR'"]);
        assert!(err.to_string().contains("line 2: data line outside of any section"));
    }
}
