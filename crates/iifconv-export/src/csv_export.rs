//! CSV contact-list export.
//!
//! Vendors and other names share one contact layout with empty shipping
//! columns. Customers get a compact layout with the billing address folded
//! into a single column.

use crate::Exporter;
use anyhow::{Context, Result};
use iifconv_core::{Document, Record, SectionType};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Column headers of the vendor and other-name layout.
pub const CONTACT_HEADERS: [&str; 19] = [
    "ID",
    "Company",
    "Name",
    "Address1",
    "Address2",
    "Address3",
    "Address4",
    "Phone",
    "Fax",
    "Email",
    "Notes",
    "Shipping Name",
    "Shipping Address1",
    "Shipping Address2",
    "Shipping Address3",
    "Shipping Address4",
    "Shipping Phone",
    "Shipping Fax",
    "Shipping Email",
];

/// Column headers of the customer layout.
pub const CUSTOMER_HEADERS: [&str; 4] = ["Name", "Address", "Phone", "Email"];

#[derive(Debug, Serialize)]
struct ContactRow<'a> {
    #[serde(rename = "ID")]
    id: usize,
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Address1")]
    address1: &'a str,
    #[serde(rename = "Address2")]
    address2: &'a str,
    #[serde(rename = "Address3")]
    address3: &'a str,
    #[serde(rename = "Address4")]
    address4: &'a str,
    #[serde(rename = "Phone")]
    phone: &'a str,
    #[serde(rename = "Fax")]
    fax: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Notes")]
    notes: &'a str,
    #[serde(rename = "Shipping Name")]
    shipping_name: &'a str,
    #[serde(rename = "Shipping Address1")]
    shipping_address1: &'a str,
    #[serde(rename = "Shipping Address2")]
    shipping_address2: &'a str,
    #[serde(rename = "Shipping Address3")]
    shipping_address3: &'a str,
    #[serde(rename = "Shipping Address4")]
    shipping_address4: &'a str,
    #[serde(rename = "Shipping Phone")]
    shipping_phone: &'a str,
    #[serde(rename = "Shipping Fax")]
    shipping_fax: &'a str,
    #[serde(rename = "Shipping Email")]
    shipping_email: &'a str,
}

impl<'a> ContactRow<'a> {
    fn new(id: usize, record: &'a Record, address: [&'static str; 4]) -> Self {
        Self {
            id,
            company: record.text("COMPANYNAME"),
            name: record.text("NAME"),
            address1: record.text(address[0]),
            address2: record.text(address[1]),
            address3: record.text(address[2]),
            address4: record.text(address[3]),
            phone: record.text("PHONE1"),
            fax: record.text("FAXNUM"),
            email: record.text("EMAIL"),
            notes: record.text("NOTEPAD"),
            shipping_name: "",
            shipping_address1: "",
            shipping_address2: "",
            shipping_address3: "",
            shipping_address4: "",
            shipping_phone: "",
            shipping_fax: "",
            shipping_email: "",
        }
    }
}

#[derive(Debug, Serialize)]
struct CustomerRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "Phone")]
    phone: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
}

impl<'a> CustomerRow<'a> {
    fn new(record: &'a Record) -> Self {
        let address = ["BADDR1", "BADDR2", "BADDR3", "BADDR4", "BADDR5"]
            .map(|field| record.text(field))
            .join(" ");
        Self {
            name: record.text("NAME"),
            address,
            phone: record.text("PHONE1"),
            email: record.text("EMAIL"),
        }
    }
}

/// The contact lists that can be exported as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvList {
    /// `CUST` records.
    Customers,
    /// `VEND` records.
    Vendors,
    /// `OTHERNAME` records.
    OtherNames,
}

impl CsvList {
    /// The section the list is drawn from.
    #[must_use]
    pub const fn section(self) -> SectionType {
        match self {
            Self::Customers => SectionType::Cust,
            Self::Vendors => SectionType::Vend,
            Self::OtherNames => SectionType::OtherName,
        }
    }

    /// The header row written for this list.
    #[must_use]
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Customers => &CUSTOMER_HEADERS,
            Self::Vendors | Self::OtherNames => &CONTACT_HEADERS,
        }
    }

    const fn address_fields(self) -> [&'static str; 4] {
        match self {
            Self::Vendors => ["ADDR1", "ADDR2", "ADDR3", "ADDR4"],
            Self::Customers | Self::OtherNames => ["BADDR1", "BADDR2", "BADDR3", "BADDR4"],
        }
    }
}

/// Exports one contact list as CSV.
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    list: CsvList,
}

impl CsvExporter {
    /// Create an exporter for the given list.
    #[must_use]
    pub const fn new(list: CsvList) -> Self {
        Self { list }
    }
}

impl Exporter for CsvExporter {
    fn name(&self) -> &str {
        match self.list {
            CsvList::Customers => "customers",
            CsvList::Vendors => "vendors",
            CsvList::OtherNames => "othernames",
        }
    }

    fn write_to(&self, document: &Document, out: &mut dyn Write) -> Result<usize> {
        let records = document.records(self.list.section());
        let mut writer = csv::Writer::from_writer(out);

        // Serialized rows carry their own header; an empty list still gets one.
        if records.is_empty() {
            writer.write_record(self.list.headers())?;
        }
        for (index, record) in records.iter().enumerate() {
            let written = match self.list {
                CsvList::Customers => writer.serialize(CustomerRow::new(record)),
                CsvList::Vendors | CsvList::OtherNames => writer.serialize(ContactRow::new(
                    index + 1,
                    record,
                    self.list.address_fields(),
                )),
            };
            written.with_context(|| format!("Failed to write {} row {}", self.name(), index + 1))?;
        }
        writer.flush()?;
        Ok(records.len())
    }
}

/// Export vendors to a CSV file.
pub fn export_vendors_csv(document: &Document, path: &Path) -> Result<usize> {
    CsvExporter::new(CsvList::Vendors).export_file(document, path)
}

/// Export other names to a CSV file.
pub fn export_othernames_csv(document: &Document, path: &Path) -> Result<usize> {
    CsvExporter::new(CsvList::OtherNames).export_file(document, path)
}

/// Export customers to a CSV file.
pub fn export_customers_csv(document: &Document, path: &Path) -> Result<usize> {
    CsvExporter::new(CsvList::Customers).export_file(document, path)
}
