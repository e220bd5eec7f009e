//! register-to-qif - Convert a register report to QIF bank transactions.
//!
//! # Usage
//!
//! ```bash
//! register-to-qif register.txt register.qif
//! register-to-qif register.csv register.qif --delimiter , --date-format %Y-%m-%d
//! ```

use anyhow::Result;
use clap::Parser;
use iifconv_export::{RegisterConfig, RegisterConverter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert a tab-delimited register report to QIF.
#[derive(Parser, Debug)]
#[command(name = "register-to-qif")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Register report to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// QIF file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Field delimiter
    #[arg(long, default_value = "\t")]
    delimiter: char,

    /// Date format of the report (strftime-style)
    #[arg(long, default_value = "%m/%d/%y")]
    date_format: String,

    /// Date column name, also used to find the header row
    #[arg(long, default_value = "Date")]
    date_column: String,

    /// Payee column name
    #[arg(long, default_value = "Name")]
    payee_column: String,

    /// Memo column name
    #[arg(long, default_value = "Memo")]
    memo_column: String,

    /// Amount column name
    #[arg(long, default_value = "Amount")]
    amount_column: String,

    /// Cleared-flag column name
    #[arg(long, default_value = "C")]
    cleared_column: String,

    /// Transfer account column name
    #[arg(long, default_value = "Account")]
    account_column: String,

    /// QIF account type
    #[arg(long, default_value = "Bank")]
    account_type: String,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Main entry point for the register command.
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

fn config(args: &Args) -> RegisterConfig {
    RegisterConfig::builder()
        .delimiter(args.delimiter)
        .header_token(&args.date_column)
        .date_column(&args.date_column)
        .input_date_format(&args.date_format)
        .payee_column(&args.payee_column)
        .memo_column(&args.memo_column)
        .amount_column(&args.amount_column)
        .cleared_column(&args.cleared_column)
        .account_column(&args.account_column)
        .account_type(&args.account_type)
        .build()
}

fn run(args: &Args) -> Result<()> {
    let result = RegisterConverter::new(config(args)).convert_file(&args.input, &args.output)?;

    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    if let Some(title) = &result.title {
        tracing::info!("register: {title}");
    }
    println!(
        "Wrote {} transactions to {}",
        result.transactions,
        args.output.display()
    );
    Ok(())
}
