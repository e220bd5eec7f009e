//! Configuration for exporters and the register converter.

use chrono::{Local, NaiveDate};

/// Configuration for QIF export.
#[derive(Debug, Clone, Default)]
pub struct QifConfig {
    /// Date stamped on opening-balance transactions. `None` means the local
    /// date at export time.
    pub today: Option<NaiveDate>,
}

impl QifConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the opening-balance date.
    #[must_use]
    pub const fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// The date to stamp on opening-balance transactions.
    #[must_use]
    pub fn resolve_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Configuration for converting a tab-delimited register report to QIF.
#[derive(Debug, Clone)]
pub struct RegisterConfig {
    /// The field delimiter.
    pub delimiter: char,
    /// Token identifying the header row.
    pub header_token: String,
    /// Date format of the input (strftime-style).
    pub input_date_format: String,
    /// Date format written to the QIF `D` line.
    pub output_date_format: String,
    /// Column holding the transaction date.
    pub date_column: String,
    /// Column holding the payee.
    pub payee_column: String,
    /// Column holding the memo.
    pub memo_column: String,
    /// Column holding the amount.
    pub amount_column: String,
    /// Column whose non-empty value marks a cleared transaction.
    pub cleared_column: String,
    /// Column holding the transfer account.
    pub account_column: String,
    /// QIF account type written after `!Type:`.
    pub account_type: String,
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            header_token: "Date".to_string(),
            input_date_format: "%m/%d/%y".to_string(),
            output_date_format: "%m/%d/%Y".to_string(),
            date_column: "Date".to_string(),
            payee_column: "Name".to_string(),
            memo_column: "Memo".to_string(),
            amount_column: "Amount".to_string(),
            cleared_column: "C".to_string(),
            account_column: "Account".to_string(),
            account_type: "Bank".to_string(),
        }
    }
}

impl RegisterConfig {
    /// Start building a register configuration.
    #[must_use]
    pub fn builder() -> RegisterConfigBuilder {
        RegisterConfigBuilder::new()
    }
}

/// Builder for [`RegisterConfig`].
#[derive(Debug, Clone, Default)]
pub struct RegisterConfigBuilder {
    config: RegisterConfig,
}

impl RegisterConfigBuilder {
    /// Create a builder holding the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    #[must_use]
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the token that identifies the header row.
    #[must_use]
    pub fn header_token(mut self, token: impl Into<String>) -> Self {
        self.config.header_token = token.into();
        self
    }

    /// Set the input date format.
    #[must_use]
    pub fn input_date_format(mut self, format: impl Into<String>) -> Self {
        self.config.input_date_format = format.into();
        self
    }

    /// Set the output date format.
    #[must_use]
    pub fn output_date_format(mut self, format: impl Into<String>) -> Self {
        self.config.output_date_format = format.into();
        self
    }

    /// Set the date column by name.
    #[must_use]
    pub fn date_column(mut self, name: impl Into<String>) -> Self {
        self.config.date_column = name.into();
        self
    }

    /// Set the payee column by name.
    #[must_use]
    pub fn payee_column(mut self, name: impl Into<String>) -> Self {
        self.config.payee_column = name.into();
        self
    }

    /// Set the memo column by name.
    #[must_use]
    pub fn memo_column(mut self, name: impl Into<String>) -> Self {
        self.config.memo_column = name.into();
        self
    }

    /// Set the amount column by name.
    #[must_use]
    pub fn amount_column(mut self, name: impl Into<String>) -> Self {
        self.config.amount_column = name.into();
        self
    }

    /// Set the cleared-flag column by name.
    #[must_use]
    pub fn cleared_column(mut self, name: impl Into<String>) -> Self {
        self.config.cleared_column = name.into();
        self
    }

    /// Set the transfer-account column by name.
    #[must_use]
    pub fn account_column(mut self, name: impl Into<String>) -> Self {
        self.config.account_column = name.into();
        self
    }

    /// Set the QIF account type.
    #[must_use]
    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.config.account_type = account_type.into();
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> RegisterConfig {
        self.config
    }
}
