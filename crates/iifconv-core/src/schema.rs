//! Record schemas and the section router.
//!
//! Each section type has one static [`Schema`]: an ordered list of field
//! descriptors. Decoding a data line and encoding a record are both driven by
//! that list, so the header line and the data rows can never disagree on
//! field order.

use crate::coerce::{parse_float, parse_float_with, parse_int_with};
use crate::format::{format_money, format_plain, NumberFormat};
use crate::record::{Record, Value};
use crate::SectionType;

/// How an absent integer is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blank {
    /// Absent renders as an empty column.
    Empty,
    /// Absent renders as `0`.
    Zero,
}

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, rendered verbatim.
    Text,
    /// Optional integer.
    Int(Blank),
    /// Two-decimal, grouped, possibly quoted amount.
    Money,
    /// A fixed number of amounts sharing one column label.
    Amounts(usize),
}

/// A single field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// The column label.
    pub name: &'static str,
    /// The value kind.
    pub kind: FieldKind,
}

impl FieldDef {
    /// Number of columns this field occupies.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self.kind {
            FieldKind::Amounts(count) => count,
            _ => 1,
        }
    }
}

const fn text(name: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Text,
    }
}

const fn int(name: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Int(Blank::Empty),
    }
}

const fn counter(name: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind: FieldKind::Int(Blank::Zero),
    }
}

/// Field names and values of one data line, in column order.
///
/// Duplicate names are allowed; [`FieldMap::get`] returns the last match, as a
/// later column overrides an earlier one, and [`FieldMap::nth`] reaches each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> FieldMap<'a> {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Pair names with values positionally. Surplus on either side is dropped.
    pub fn zip<N, V>(names: N, values: V) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        names.into_iter().zip(values).collect()
    }

    /// Append a pair.
    pub fn insert(&mut self, name: &'a str, value: &'a str) {
        self.pairs.push((name, value));
    }

    /// The value of the last column with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .rev()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// The value of the `n`-th column (zero-based) with the given name.
    #[must_use]
    pub fn nth(&self, name: &str, n: usize) -> Option<&'a str> {
        self.pairs
            .iter()
            .filter(|(key, _)| *key == name)
            .nth(n)
            .map(|(_, value)| *value)
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldMap<'a> {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// The field layout of one section type.
#[derive(Debug, PartialEq, Eq)]
pub struct Schema {
    /// The section this schema describes.
    pub section: SectionType,
    /// The primary key field, if the section has one.
    pub key: Option<&'static str>,
    /// Field descriptors in column order.
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Position of a field in [`Schema::fields`].
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Column labels in order, with repeated fields expanded.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .flat_map(|field| std::iter::repeat(field.name).take(field.width()))
    }

    /// Number of columns after the tag.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.fields.iter().map(FieldDef::width).sum()
    }

    /// The `!`-prefixed header line, without a line terminator.
    #[must_use]
    pub fn header_line(&self) -> String {
        let mut line = format!("!{}", self.section.tag());
        for name in self.column_names() {
            line.push('\t');
            line.push_str(name);
        }
        line
    }

    /// Build a record from one data line's fields.
    ///
    /// Missing text becomes `""` and missing or unparseable numbers become
    /// `None`. Repeated amounts are looked up as `AMOUNT1`..`AMOUNTn` first
    /// and otherwise taken positionally from columns sharing the plain label.
    #[must_use]
    pub fn decode(&self, fields: &FieldMap<'_>) -> Record {
        self.decode_with(fields, &NumberFormat::default())
    }

    /// Build a record, reading integers and money with the given separators.
    ///
    /// Budget amounts are always plain decimals and ignore `format`.
    #[must_use]
    pub fn decode_with(&self, fields: &FieldMap<'_>, format: &NumberFormat) -> Record {
        let values = self
            .fields
            .iter()
            .map(|field| match field.kind {
                FieldKind::Text => Value::Text(fields.get(field.name).unwrap_or("").to_string()),
                FieldKind::Int(_) => Value::Int(
                    fields
                        .get(field.name)
                        .and_then(|text| parse_int_with(text, format)),
                ),
                FieldKind::Money => Value::Float(
                    fields
                        .get(field.name)
                        .and_then(|text| parse_float_with(text, format)),
                ),
                FieldKind::Amounts(count) => Value::Amounts(
                    (0..count)
                        .map(|slot| {
                            fields
                                .get(&format!("{}{}", field.name, slot + 1))
                                .or_else(|| fields.nth(field.name, slot))
                                .and_then(parse_float)
                        })
                        .collect(),
                ),
            })
            .collect();
        Record::from_values(self.section, values)
    }

    /// Render a record as a tab-joined data row, without a line terminator.
    #[must_use]
    pub fn encode(&self, record: &Record, config: &NumberFormat) -> String {
        let mut line = self.section.tag().to_string();
        for (field, value) in self.fields.iter().zip(record.values()) {
            match (field.kind, value) {
                (FieldKind::Amounts(_), Value::Amounts(amounts)) => {
                    for amount in amounts {
                        line.push('\t');
                        if let Some(amount) = amount {
                            line.push_str(&format_plain(*amount));
                        }
                    }
                }
                (kind, value) => {
                    line.push('\t');
                    line.push_str(&render_scalar(kind, value, config));
                }
            }
        }
        line
    }
}

fn render_scalar(kind: FieldKind, value: &Value, config: &NumberFormat) -> String {
    match (kind, value) {
        (_, Value::Text(s)) => s.clone(),
        (_, Value::Int(Some(n))) => n.to_string(),
        (FieldKind::Int(Blank::Zero), Value::Int(None)) => "0".to_string(),
        (FieldKind::Money, Value::Float(amount)) => format_money(*amount, config),
        _ => String::new(),
    }
}

/// Return the schema for a section type.
#[must_use]
pub fn schema_for(section: SectionType) -> &'static Schema {
    match section {
        SectionType::Hdr => &HDR,
        SectionType::Accnt => &ACCNT,
        SectionType::InvItem => &INVITEM,
        SectionType::Class => &CLASS,
        SectionType::CType => &CTYPE,
        SectionType::Cust => &CUST,
        SectionType::VType => &VTYPE,
        SectionType::Vend => &VEND,
        SectionType::Emp => &EMP,
        SectionType::OtherName => &OTHERNAME,
        SectionType::ShipMeth => &SHIPMETH,
        SectionType::PayMeth => &PAYMETH,
        SectionType::InvMemo => &INVMEMO,
        SectionType::Terms => &TERMS,
        SectionType::Bud => &BUD,
        SectionType::Todo => &TODO,
        SectionType::Vehicle => &VEHICLE,
        SectionType::SalesRep => &SALESREP,
        SectionType::SalesTaxCode => &SALESTAXCODE,
        SectionType::EndGrp => &ENDGRP,
    }
}

// ============================================================================
// Field layouts
// ============================================================================

const LIST_FIELDS: &[FieldDef] = &[text("NAME"), int("REFNUM"), counter("TIMESTAMP")];

static HDR: Schema = Schema {
    section: SectionType::Hdr,
    key: Some("PROD"),
    fields: &[
        text("PROD"),
        text("VER"),
        text("REL"),
        int("IIFVER"),
        text("DATE"),
        int("TIME"),
    ],
};

static ACCNT: Schema = Schema {
    section: SectionType::Accnt,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        text("ACCNTTYPE"),
        FieldDef {
            name: "OBAMOUNT",
            kind: FieldKind::Money,
        },
        text("DESC"),
        text("ACCNUM"),
        counter("SCD"),
        text("EXTRA"),
    ],
};

static INVITEM: Schema = Schema {
    section: SectionType::InvItem,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        text("INVITEMTYPE"),
        text("DESC"),
        text("PURCHASEDESC"),
        text("ACCNT"),
        text("ASSETACCNT"),
        text("COGSACCNT"),
        text("PRICE"),
        text("COST"),
        text("TAXABLE"),
        text("SALESTAXCODE"),
        text("PAYMETH"),
        text("TAXVEND"),
        text("TAXDIST"),
        text("PREFVEND"),
        text("REORDERPOINT"),
        text("EXTRA"),
        text("CUSTFLD1"),
        text("CUSTFLD2"),
        text("CUSTFLD3"),
        text("CUSTFLD4"),
        text("CUSTFLD5"),
        text("DEP_TYPE"),
        text("ISPASSEDTHRU"),
    ],
};

static CLASS: Schema = Schema {
    section: SectionType::Class,
    key: Some("NAME"),
    fields: LIST_FIELDS,
};

static CTYPE: Schema = Schema {
    section: SectionType::CType,
    key: Some("NAME"),
    fields: LIST_FIELDS,
};

static CUST: Schema = Schema {
    section: SectionType::Cust,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        text("BADDR1"),
        text("BADDR2"),
        text("BADDR3"),
        text("BADDR4"),
        text("BADDR5"),
        text("SADDR1"),
        text("SADDR2"),
        text("SADDR3"),
        text("SADDR4"),
        text("SADDR5"),
        text("PHONE1"),
        text("PHONE2"),
        text("FAXNUM"),
        text("EMAIL"),
        text("CONT1"),
        text("CONT2"),
        text("CTYPE"),
        text("TERMS"),
        text("TAXABLE"),
        text("SALESTAXCODE"),
        text("LIMIT"),
        text("RESALENUM"),
        text("REP"),
        text("TAXITEM"),
        text("NOTEPAD"),
        text("SALUTATION"),
        text("COMPANYNAME"),
        text("FIRSTNAME"),
        text("MIDINIT"),
        text("LASTNAME"),
        text("CUSTFLD1"),
        text("CUSTFLD2"),
        text("CUSTFLD3"),
        text("CUSTFLD4"),
        text("CUSTFLD5"),
        text("CUSTFLD6"),
        text("CUSTFLD7"),
        text("CUSTFLD8"),
        text("CUSTFLD9"),
        text("CUSTFLD10"),
        text("CUSTFLD11"),
        text("CUSTFLD12"),
        text("CUSTFLD13"),
        text("CUSTFLD14"),
        text("CUSTFLD15"),
        text("JOBDESC"),
        text("JOBTYPE"),
        text("JOBSTATUS"),
        text("JOBSTART"),
        text("JOBPROJEND"),
        text("JOBEND"),
    ],
};

static VTYPE: Schema = Schema {
    section: SectionType::VType,
    key: Some("NAME"),
    fields: LIST_FIELDS,
};

static VEND: Schema = Schema {
    section: SectionType::Vend,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        text("PRINTAS"),
        text("ADDR1"),
        text("ADDR2"),
        text("ADDR3"),
        text("ADDR4"),
        text("ADDR5"),
        text("VTYPE"),
        text("CONT1"),
        text("CONT2"),
        text("PHONE1"),
        text("PHONE2"),
        text("FAXNUM"),
        text("EMAIL"),
        text("NOTE"),
        text("TAXID"),
        text("LIMIT"),
        text("TERMS"),
        text("NOTEPAD"),
        text("SALUTATION"),
        text("COMPANYNAME"),
        text("FIRSTNAME"),
        text("MIDINIT"),
        text("LASTNAME"),
        text("CUSTFLD1"),
        text("CUSTFLD2"),
        text("CUSTFLD3"),
        text("CUSTFLD4"),
        text("CUSTFLD5"),
        text("CUSTFLD6"),
        text("CUSTFLD7"),
        text("CUSTFLD8"),
        text("CUSTFLD9"),
        text("CUSTFLD10"),
        text("CUSTFLD11"),
        text("CUSTFLD12"),
        text("CUSTFLD13"),
        text("CUSTFLD14"),
        text("CUSTFLD15"),
        text("1099"),
    ],
};

static EMP: Schema = Schema {
    section: SectionType::Emp,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        text("INIT"),
        text("ADDR1"),
        text("ADDR2"),
        text("ADDR3"),
        text("ADDR4"),
        text("ADDR5"),
        text("SSNO"),
        text("PHONE1"),
        text("PHONE2"),
        text("EMAIL"),
        text("NOTEPAD"),
        text("FIRSTNAME"),
        text("MIDINIT"),
        text("LASTNAME"),
        text("SALUTATION"),
        text("CUSTFLD1"),
        text("CUSTFLD2"),
        text("CUSTFLD3"),
        text("CUSTFLD4"),
        text("CUSTFLD5"),
        text("CUSTFLD6"),
        text("CUSTFLD7"),
        text("CUSTFLD8"),
        text("CUSTFLD9"),
        text("CUSTFLD10"),
        text("CUSTFLD11"),
        text("CUSTFLD12"),
        text("CUSTFLD13"),
        text("CUSTFLD14"),
        text("CUSTFLD15"),
        text("HIDDEN"),
    ],
};

static OTHERNAME: Schema = Schema {
    section: SectionType::OtherName,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        text("BADDR1"),
        text("BADDR2"),
        text("BADDR3"),
        text("BADDR4"),
        text("BADDR5"),
        text("PHONE1"),
        text("PHONE2"),
        text("FAXNUM"),
        text("EMAIL"),
        text("CONT1"),
        text("NOTEPAD"),
        text("SALUTATION"),
        text("COMPANYNAME"),
        text("FIRSTNAME"),
        text("MIDINIT"),
        text("LASTNAME"),
    ],
};

static SHIPMETH: Schema = Schema {
    section: SectionType::ShipMeth,
    key: Some("NAME"),
    fields: LIST_FIELDS,
};

static PAYMETH: Schema = Schema {
    section: SectionType::PayMeth,
    key: Some("NAME"),
    fields: LIST_FIELDS,
};

static INVMEMO: Schema = Schema {
    section: SectionType::InvMemo,
    key: Some("NAME"),
    fields: LIST_FIELDS,
};

static TERMS: Schema = Schema {
    section: SectionType::Terms,
    key: Some("NAME"),
    fields: &[
        text("NAME"),
        int("REFNUM"),
        counter("TIMESTAMP"),
        counter("DUEDAYS"),
        counter("MINDAYS"),
        text("DISCPER"),
        counter("DISCDAYS"),
        counter("TERMSTYPE"),
    ],
};

/// Number of period amounts in a budget row.
pub const BUDGET_PERIODS: usize = 12;

static BUD: Schema = Schema {
    section: SectionType::Bud,
    key: Some("ACCNT"),
    fields: &[
        text("ACCNT"),
        text("PERIOD"),
        FieldDef {
            name: "AMOUNT",
            kind: FieldKind::Amounts(BUDGET_PERIODS),
        },
        text("STARTDATE"),
        text("CLASS"),
        text("CUSTOMER"),
    ],
};

static TODO: Schema = Schema {
    section: SectionType::Todo,
    key: None,
    fields: &[int("REFNUM"), text("ISDONE"), text("DATE"), text("DESC")],
};

static VEHICLE: Schema = Schema {
    section: SectionType::Vehicle,
    key: Some("NAME"),
    fields: &[text("NAME"), int("REFNUM"), text("DESC")],
};

static SALESREP: Schema = Schema {
    section: SectionType::SalesRep,
    key: Some("INIT"),
    fields: &[text("INIT"), int("REFNUM"), text("NAME"), text("TYPE")],
};

static SALESTAXCODE: Schema = Schema {
    section: SectionType::SalesTaxCode,
    key: Some("CODE"),
    fields: &[
        text("CODE"),
        int("REFNUM"),
        text("HIDDEN"),
        text("DESC"),
        text("TAXABLE"),
    ],
};

static ENDGRP: Schema = Schema {
    section: SectionType::EndGrp,
    key: None,
    fields: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>(pairs: &[(&'a str, &'a str)]) -> FieldMap<'a> {
        pairs.iter().copied().collect()
    }

    // ========== Router ==========

    #[test]
    fn test_router_is_total_and_consistent() {
        for section in SectionType::ALL {
            let schema = schema_for(section);
            assert_eq!(schema.section, section);
            if let Some(key) = schema.key {
                assert!(schema.index_of(key).is_some(), "{section}: key {key}");
            }
        }
    }

    #[test]
    fn test_field_names_unique_per_schema() {
        for section in SectionType::ALL {
            let schema = schema_for(section);
            for (i, field) in schema.fields.iter().enumerate() {
                assert_eq!(schema.index_of(field.name), Some(i), "{section}");
            }
        }
    }

    // ========== Header lines ==========

    #[test]
    fn test_header_lines() {
        assert_eq!(
            schema_for(SectionType::Hdr).header_line(),
            "!HDR\tPROD\tVER\tREL\tIIFVER\tDATE\tTIME"
        );
        assert_eq!(
            schema_for(SectionType::Accnt).header_line(),
            "!ACCNT\tNAME\tREFNUM\tTIMESTAMP\tACCNTTYPE\tOBAMOUNT\tDESC\tACCNUM\tSCD\tEXTRA"
        );
        assert_eq!(
            schema_for(SectionType::Class).header_line(),
            "!CLASS\tNAME\tREFNUM\tTIMESTAMP"
        );
        assert_eq!(schema_for(SectionType::EndGrp).header_line(), "!ENDGRP");
    }

    #[test]
    fn test_budget_header_repeats_amount_label() {
        let header = schema_for(SectionType::Bud).header_line();
        let expected = format!(
            "!BUD\tACCNT\tPERIOD\t{}\tSTARTDATE\tCLASS\tCUSTOMER",
            vec!["AMOUNT"; 12].join("\t")
        );
        assert_eq!(header, expected);
        assert_eq!(schema_for(SectionType::Bud).column_count(), 17);
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(schema_for(SectionType::Cust).column_count(), 54);
        assert_eq!(schema_for(SectionType::Vend).column_count(), 42);
        assert_eq!(schema_for(SectionType::Emp).column_count(), 34);
        assert_eq!(schema_for(SectionType::InvItem).column_count(), 26);
        assert_eq!(schema_for(SectionType::EndGrp).column_count(), 0);
    }

    // ========== Decode ==========

    #[test]
    fn test_decode_account() {
        let map = fields(&[
            ("NAME", "Checking"),
            ("REFNUM", "3"),
            ("TIMESTAMP", "1700000000"),
            ("ACCNTTYPE", "BANK"),
            ("OBAMOUNT", "\"1,234.50\""),
            ("SCD", "x"),
        ]);
        let record = schema_for(SectionType::Accnt).decode(&map);
        assert_eq!(record.text("NAME"), "Checking");
        assert_eq!(record.int("REFNUM"), Some(3));
        assert_eq!(record.int("TIMESTAMP"), Some(1_700_000_000));
        assert_eq!(record.text("ACCNTTYPE"), "BANK");
        assert_eq!(record.float("OBAMOUNT"), Some(1234.5));
        assert_eq!(record.int("SCD"), None);
        assert_eq!(record.text("DESC"), "");
    }

    #[test]
    fn test_decode_vendor_1099_column() {
        let map = fields(&[("NAME", "Acme"), ("1099", "Y")]);
        let record = schema_for(SectionType::Vend).decode(&map);
        assert_eq!(record.text("1099"), "Y");
    }

    #[test]
    fn test_decode_budget_by_numbered_name() {
        let map = fields(&[("ACCNT", "Rent"), ("AMOUNT3", "150.00"), ("AMOUNT5", "")]);
        let record = schema_for(SectionType::Bud).decode(&map);
        let amounts = record.amounts("AMOUNT");
        assert_eq!(amounts.len(), 12);
        for (slot, amount) in amounts.iter().enumerate() {
            if slot == 2 {
                assert_eq!(*amount, Some(150.0));
            } else {
                assert_eq!(*amount, None, "slot {slot}");
            }
        }
    }

    #[test]
    fn test_decode_budget_positionally() {
        let mut map = FieldMap::new();
        map.insert("ACCNT", "Rent");
        map.insert("PERIOD", "MONTH");
        for slot in 0..12 {
            map.insert("AMOUNT", if slot == 1 { "20.5" } else { "" });
        }
        map.insert("CLASS", "Ops");
        let record = schema_for(SectionType::Bud).decode(&map);
        assert_eq!(record.amounts("AMOUNT")[1], Some(20.5));
        assert_eq!(record.amounts("AMOUNT")[0], None);
        assert_eq!(record.text("CLASS"), "Ops");
    }

    #[test]
    fn test_decode_repeated_column_last_wins() {
        let map = FieldMap::zip(["NAME", "NAME"], ["first", "second"]);
        let record = schema_for(SectionType::Class).decode(&map);
        assert_eq!(record.key(), "second");
    }

    #[test]
    fn test_decode_with_european_separators() {
        let map = fields(&[("NAME", "Cash"), ("OBAMOUNT", "\"2.500,00\""), ("REFNUM", "7")]);
        let format = NumberFormat::new(',', Some('.'));
        let record = schema_for(SectionType::Accnt).decode_with(&map, &format);
        assert_eq!(record.float("OBAMOUNT"), Some(2500.0));
        assert_eq!(record.int("REFNUM"), Some(7));

        let budget = fields(&[("ACCNT", "Rent"), ("AMOUNT1", "1500.5")]);
        let record = schema_for(SectionType::Bud).decode_with(&budget, &format);
        assert_eq!(record.amounts("AMOUNT")[0], Some(1500.5));
    }

    // ========== Encode ==========

    #[test]
    fn test_encode_account_defaults() {
        let record = Record::new(SectionType::Accnt).with_text("NAME", "Cash");
        let row = schema_for(SectionType::Accnt).encode(&record, &NumberFormat::default());
        assert_eq!(row, "ACCNT\tCash\t\t0\t\t0.00\t\t\t0\t");
    }

    #[test]
    fn test_encode_account_with_balance() {
        let record = Record::new(SectionType::Accnt)
            .with_text("NAME", "Savings")
            .with_int("REFNUM", 7)
            .with_int("TIMESTAMP", 1_600_000_000)
            .with_text("ACCNTTYPE", "BANK")
            .with_float("OBAMOUNT", 1234.5);
        let row = schema_for(SectionType::Accnt).encode(&record, &NumberFormat::default());
        assert_eq!(
            row,
            "ACCNT\tSavings\t7\t1600000000\tBANK\t\"1,234.50\"\t\t\t0\t"
        );
    }

    #[test]
    fn test_encode_budget_single_amount() {
        let record = Record::new(SectionType::Bud)
            .with_text("ACCNT", "Rent")
            .with_amount("AMOUNT", 2, 150.0);
        let row = schema_for(SectionType::Bud).encode(&record, &NumberFormat::default());
        let columns: Vec<&str> = row.split('\t').collect();
        assert_eq!(columns.len(), 18);
        let amounts = &columns[3..15];
        assert_eq!(amounts.iter().filter(|c| c.is_empty()).count(), 11);
        assert_eq!(amounts[2], "150.0");
    }

    #[test]
    fn test_encode_terms_counters() {
        let record = Record::new(SectionType::Terms)
            .with_text("NAME", "Net 30")
            .with_int("DUEDAYS", 30)
            .with_text("DISCPER", "2%");
        let row = schema_for(SectionType::Terms).encode(&record, &NumberFormat::default());
        assert_eq!(row, "TERMS\tNet 30\t\t0\t30\t0\t2%\t0\t0");
    }

    #[test]
    fn test_encode_group_end() {
        let record = Record::new(SectionType::EndGrp);
        let row = schema_for(SectionType::EndGrp).encode(&record, &NumberFormat::default());
        assert_eq!(row, "ENDGRP");
    }

    #[test]
    fn test_encode_column_count_matches_header() {
        for section in SectionType::ALL {
            let schema = schema_for(section);
            let row = schema.encode(&Record::new(section), &NumberFormat::default());
            assert_eq!(
                row.split('\t').count(),
                schema.header_line().split('\t').count(),
                "{section}"
            );
        }
    }

    // ========== FieldMap ==========

    #[test]
    fn test_field_map_zip_and_lookup() {
        let map = FieldMap::zip(["A", "B", "A"], ["1", "2", "3", "4"]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("A"), Some("3"));
        assert_eq!(map.nth("A", 0), Some("1"));
        assert_eq!(map.nth("A", 1), Some("3"));
        assert_eq!(map.nth("A", 2), None);
        assert_eq!(map.get("C"), None);
        assert!(!map.is_empty());
        assert_eq!(map.iter().count(), 3);
    }
}
