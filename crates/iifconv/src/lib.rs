//! IIF conversion CLI tools.
//!
//! This crate provides command-line tools built on the iifconv libraries:
//!
//! - `iif-convert`: Parse an IIF list export, print a summary, and export
//!   accounts to QIF, contact lists to CSV, or the whole file back to IIF
//! - `register-to-qif`: Convert a tab-delimited register report to QIF
//!
//! # Example Usage
//!
//! ```bash
//! iif-convert lists.iif --qif accounts.qif --vendors vendors.csv
//! register-to-qif register.txt register.qif
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
