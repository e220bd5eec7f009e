//! iif-convert - Convert an IIF list export to other formats.
//!
//! The input is parsed once, a per-section summary is printed, and then each
//! requested export runs in turn.
//!
//! # Usage
//!
//! ```bash
//! iif-convert lists.iif
//! iif-convert lists.iif --qif accounts.qif --customers customers.csv
//! iif-convert lists.iif --iif clean.iif --decimal-separator , --group-separator .
//! iif-convert eu.iif --input-decimal-separator , --input-group-separator . --qif accounts.qif
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use iifconv_core::{Document, NumberFormat, SectionType};
use iifconv_export::{CsvExporter, CsvList, Exporter, QifConfig, QifExporter};
use iifconv_parser::{FieldAlignment, IifReader, IifWriter, ReaderConfig, WriterConfig};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// How header field names line up with data values.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Alignment {
    /// Header tag pairs with data tag (default)
    #[default]
    Tagged,
    /// Field names pair with values starting at the tag
    Positional,
}

impl From<Alignment> for FieldAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Tagged => Self::Tagged,
            Alignment::Positional => Self::Positional,
        }
    }
}

/// Output format for the parse summary.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `SECTION: count` line per section (default)
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Parse summary in JSON form.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    sections: BTreeMap<SectionType, usize>,
    categories: usize,
    records: usize,
    warnings: &'a [String],
}

/// Convert an IIF list export to QIF, CSV or canonical IIF.
#[derive(Parser, Debug)]
#[command(name = "iif-convert")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input IIF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Export accounts to a QIF file
    #[arg(long, value_name = "FILE")]
    qif: Option<PathBuf>,

    /// Export customers to a CSV file
    #[arg(long, value_name = "FILE")]
    customers: Option<PathBuf>,

    /// Export vendors to a CSV file
    #[arg(long, value_name = "FILE")]
    vendors: Option<PathBuf>,

    /// Export other names to a CSV file
    #[arg(long, value_name = "FILE")]
    othernames: Option<PathBuf>,

    /// Re-export every section to an IIF file
    #[arg(long, value_name = "FILE")]
    iif: Option<PathBuf>,

    /// Field alignment used when reading data lines
    #[arg(long, value_enum, default_value_t = Alignment::Tagged)]
    alignment: Alignment,

    /// Decimal separator used by amounts in the input file
    #[arg(long, default_value = ".")]
    input_decimal_separator: char,

    /// Thousands separator used by amounts in the input file
    #[arg(long, default_value = ",")]
    input_group_separator: char,

    /// Decimal separator for money amounts in IIF output
    #[arg(long, default_value = ".")]
    decimal_separator: char,

    /// Thousands separator for money amounts in IIF output
    #[arg(long, default_value = ",")]
    group_separator: char,

    /// Do not group thousands in IIF output
    #[arg(long)]
    no_grouping: bool,

    /// Date for opening-balance transactions (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Summary output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the convert command.
pub fn main() -> ExitCode {
    let args = Args::parse();
    super::init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = ReaderConfig::new()
        .alignment(args.alignment.into())
        .number_format(NumberFormat::new(
            args.input_decimal_separator,
            Some(args.input_group_separator),
        ));
    let result = match IifReader::new(config).read_file(&args.input) {
        Ok(result) => result,
        Err(e) => {
            print_warnings(e.warnings());
            return Err(e.into());
        }
    };
    print_warnings(&result.warnings);

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Text => write_summary(&mut stdout, &result.document)?,
        OutputFormat::Json => {
            let summary = Summary {
                sections: result.document.counts().into_iter().collect(),
                categories: result.document.section_count(),
                records: result.document.len(),
                warnings: &result.warnings,
            };
            serde_json::to_writer_pretty(&mut stdout, &summary)?;
            writeln!(stdout)?;
        }
    }

    let document = &result.document;
    if let Some(path) = &args.qif {
        let mut config = QifConfig::new();
        if let Some(date) = args.today {
            config = config.today(date);
        }
        export(&QifExporter::new(config), document, path)?;
    }
    if let Some(path) = &args.customers {
        export(&CsvExporter::new(CsvList::Customers), document, path)?;
    }
    if let Some(path) = &args.othernames {
        export(&CsvExporter::new(CsvList::OtherNames), document, path)?;
    }
    if let Some(path) = &args.vendors {
        export(&CsvExporter::new(CsvList::Vendors), document, path)?;
    }
    if let Some(path) = &args.iif {
        let group = (!args.no_grouping).then_some(args.group_separator);
        let config = WriterConfig::new()
            .number_format(NumberFormat::new(args.decimal_separator, group));
        IifWriter::new(config).write_file(document, path)?;
        tracing::info!("wrote {} records to {}", document.len(), path.display());
    }

    Ok(())
}

fn export(exporter: &dyn Exporter, document: &Document, path: &Path) -> Result<()> {
    let count = exporter
        .export_file(document, path)
        .with_context(|| format!("{} export failed", exporter.name()))?;
    tracing::info!("{}: wrote {count} records to {}", exporter.name(), path.display());
    Ok(())
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

fn write_summary<W: Write>(out: &mut W, document: &Document) -> io::Result<()> {
    for (section, count) in document.counts() {
        writeln!(out, "{section}: {count}")?;
    }
    writeln!(out, "{} categories", document.section_count())?;
    writeln!(out, "{} records", document.len())
}
