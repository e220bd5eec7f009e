//! Section types of an IIF file.
//!
//! Every header line in an IIF file starts with `!` followed by a section tag
//! such as `ACCNT` or `VEND`. The set of tags understood by this crate is
//! closed: a tag either resolves to a [`SectionType`] or the section is
//! unknown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A section tag in an IIF file.
///
/// The declaration order is the canonical order used when writing a
/// document back out.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionType {
    /// File header (`HDR`).
    Hdr,
    /// Chart of accounts (`ACCNT`).
    Accnt,
    /// Inventory and service items (`INVITEM`).
    InvItem,
    /// Classes (`CLASS`).
    Class,
    /// Customer types (`CTYPE`).
    CType,
    /// Customers and jobs (`CUST`).
    Cust,
    /// Vendor types (`VTYPE`).
    VType,
    /// Vendors (`VEND`).
    Vend,
    /// Employees (`EMP`).
    Emp,
    /// Other names (`OTHERNAME`).
    OtherName,
    /// Shipping methods (`SHIPMETH`).
    ShipMeth,
    /// Payment methods (`PAYMETH`).
    PayMeth,
    /// Customer messages (`INVMEMO`).
    InvMemo,
    /// Payment terms (`TERMS`).
    Terms,
    /// Budgets (`BUD`).
    Bud,
    /// To-do notes (`TODO`).
    Todo,
    /// Vehicles (`VEHICLE`).
    Vehicle,
    /// Sales representatives (`SALESREP`).
    SalesRep,
    /// Sales tax codes (`SALESTAXCODE`).
    SalesTaxCode,
    /// End of a transaction group (`ENDGRP`). Never carries a record.
    EndGrp,
}

impl SectionType {
    /// All section types in canonical order.
    pub const ALL: [Self; 20] = [
        Self::Hdr,
        Self::Accnt,
        Self::InvItem,
        Self::Class,
        Self::CType,
        Self::Cust,
        Self::VType,
        Self::Vend,
        Self::Emp,
        Self::OtherName,
        Self::ShipMeth,
        Self::PayMeth,
        Self::InvMemo,
        Self::Terms,
        Self::Bud,
        Self::Todo,
        Self::Vehicle,
        Self::SalesRep,
        Self::SalesTaxCode,
        Self::EndGrp,
    ];

    /// The tag as it appears in the file, without the leading `!`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Hdr => "HDR",
            Self::Accnt => "ACCNT",
            Self::InvItem => "INVITEM",
            Self::Class => "CLASS",
            Self::CType => "CTYPE",
            Self::Cust => "CUST",
            Self::VType => "VTYPE",
            Self::Vend => "VEND",
            Self::Emp => "EMP",
            Self::OtherName => "OTHERNAME",
            Self::ShipMeth => "SHIPMETH",
            Self::PayMeth => "PAYMETH",
            Self::InvMemo => "INVMEMO",
            Self::Terms => "TERMS",
            Self::Bud => "BUD",
            Self::Todo => "TODO",
            Self::Vehicle => "VEHICLE",
            Self::SalesRep => "SALESREP",
            Self::SalesTaxCode => "SALESTAXCODE",
            Self::EndGrp => "ENDGRP",
        }
    }

    /// Resolve a tag string. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.tag() == tag)
    }

    /// Whether this section only closes a group and never holds records.
    #[must_use]
    pub const fn is_group_end(self) -> bool {
        matches!(self, Self::EndGrp)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string is not a known section tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionType {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownSection(s.to_string()))
    }
}
