//! QIF account export.
//!
//! Each account becomes an `!Account` block followed by an empty `!Type:`
//! transaction list. Accounts with an opening balance get one cleared
//! transaction carrying that balance.

use crate::config::QifConfig;
use crate::Exporter;
use anyhow::Result;
use iifconv_core::{format_plain, Document, Record, SectionType};
use std::fmt;
use std::io::Write;
use std::path::Path;

/// QIF account types produced from IIF account codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QifAccountType {
    /// Bank account (the fallback for unmapped codes).
    Bank,
    /// Other asset.
    OtherAsset,
    /// Other liability.
    OtherLiability,
}

impl QifAccountType {
    /// Map an IIF `ACCNTTYPE` code.
    #[must_use]
    pub fn from_iif(code: &str) -> Self {
        match code {
            "EXEXP" | "EXINC" | "EXP" | "INC" | "EQUITY" | "FIXASSET" | "OCASSET" => {
                Self::OtherAsset
            }
            "LTLIAB" | "OCLIAB" => Self::OtherLiability,
            _ => Self::Bank,
        }
    }

    /// The QIF label for this type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bank => "Bank",
            Self::OtherAsset => "Oth A",
            Self::OtherLiability => "Oth L",
        }
    }
}

impl fmt::Display for QifAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exports accounts as QIF.
#[derive(Debug, Clone, Default)]
pub struct QifExporter {
    config: QifConfig,
}

impl QifExporter {
    /// Create an exporter with the given configuration.
    #[must_use]
    pub const fn new(config: QifConfig) -> Self {
        Self { config }
    }

    fn write_account(&self, account: &Record, out: &mut dyn Write) -> Result<()> {
        let account_type = QifAccountType::from_iif(account.text("ACCNTTYPE"));

        writeln!(out, "!Account")?;
        writeln!(out, "N{}", account.text("NAME"))?;
        writeln!(out, "T{account_type}")?;
        let desc = account.text("DESC");
        if !desc.is_empty() {
            writeln!(out, "D{desc}")?;
        }
        writeln!(out, "^")?;
        writeln!(out, "!Type:{}", account_type.label().to_lowercase())?;

        if let Some(balance) = account.float("OBAMOUNT").filter(|b| *b != 0.0) {
            let today = self.config.resolve_today();
            writeln!(out, "D{}", today.format("%m/%d/%Y"))?;
            writeln!(out, "T{}", format_plain(balance))?;
            writeln!(out, "C*")?;
            writeln!(out, "MOpening Balance")?;
            writeln!(out, "^")?;
        }
        Ok(())
    }
}

impl Exporter for QifExporter {
    fn name(&self) -> &str {
        "qif"
    }

    fn write_to(&self, document: &Document, out: &mut dyn Write) -> Result<usize> {
        let accounts = document.records(SectionType::Accnt);
        for account in accounts {
            self.write_account(account, out)?;
        }
        Ok(accounts.len())
    }
}

/// Export the document's accounts to a QIF file.
pub fn export_qif(document: &Document, path: &Path, config: &QifConfig) -> Result<usize> {
    QifExporter::new(config.clone()).export_file(document, path)
}

/// Render the document's accounts as QIF.
pub fn export_qif_string(document: &Document, config: &QifConfig) -> Result<String> {
    QifExporter::new(config.clone()).export_string(document)
}
