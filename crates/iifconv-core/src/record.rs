//! Generic IIF records.
//!
//! A [`Record`] holds one value per field of its section's [`Schema`], in
//! schema order. Records are only ever created through a schema, so the
//! value kinds always line up with the field kinds.

use crate::schema::{schema_for, FieldKind, Schema};
use crate::SectionType;
use serde::{Deserialize, Serialize};

/// A single field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Free text. Missing text is the empty string.
    Text(String),
    /// Optional integer.
    Int(Option<i64>),
    /// Optional money amount.
    Float(Option<f64>),
    /// Fixed number of optional amounts (budget periods).
    Amounts(Vec<Option<f64>>),
}

impl Value {
    /// The empty value for a field kind.
    #[must_use]
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::Int(_) => Self::Int(None),
            FieldKind::Money => Self::Float(None),
            FieldKind::Amounts(count) => Self::Amounts(vec![None; count]),
        }
    }

    /// Whether this value holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Int(v) => v.is_none(),
            Self::Float(v) => v.is_none(),
            Self::Amounts(v) => v.iter().all(Option::is_none),
        }
    }

    fn matches(&self, kind: FieldKind) -> bool {
        match (self, kind) {
            (Self::Text(_), FieldKind::Text)
            | (Self::Int(_), FieldKind::Int(_))
            | (Self::Float(_), FieldKind::Money) => true,
            (Self::Amounts(v), FieldKind::Amounts(count)) => v.len() == count,
            _ => false,
        }
    }
}

/// One entity of a given section type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    section: SectionType,
    values: Vec<Value>,
}

impl Record {
    /// Create a record with every field empty.
    #[must_use]
    pub fn new(section: SectionType) -> Self {
        let values = schema_for(section)
            .fields
            .iter()
            .map(|field| Value::empty(field.kind))
            .collect();
        Self { section, values }
    }

    pub(crate) const fn from_values(section: SectionType, values: Vec<Value>) -> Self {
        Self { section, values }
    }

    /// The section this record belongs to.
    #[must_use]
    pub const fn section(&self) -> SectionType {
        self.section
    }

    /// The schema describing this record's fields.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        schema_for(self.section)
    }

    /// All values in schema order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Look up a value by field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema()
            .index_of(name)
            .and_then(|index| self.values.get(index))
    }

    /// Text value of a field, or `""` if the field is absent or not text.
    #[must_use]
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(Value::Text(s)) => s,
            _ => "",
        }
    }

    /// Integer value of a field.
    #[must_use]
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::Int(v)) => *v,
            _ => None,
        }
    }

    /// Money value of a field.
    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Float(v)) => *v,
            _ => None,
        }
    }

    /// Repeated amounts of a field, or an empty slice.
    #[must_use]
    pub fn amounts(&self, name: &str) -> &[Option<f64>] {
        match self.get(name) {
            Some(Value::Amounts(v)) => v,
            _ => &[],
        }
    }

    /// The primary key of the record (usually `NAME`).
    #[must_use]
    pub fn key(&self) -> &str {
        self.schema().key.map_or("", |key| self.text(key))
    }

    /// Replace a field value.
    ///
    /// Returns `false` and leaves the record untouched if the field does not
    /// exist or the value has the wrong kind.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        let schema = self.schema();
        let Some(index) = schema.index_of(name) else {
            return false;
        };
        if !value.matches(schema.fields[index].kind) {
            return false;
        }
        self.values[index] = value;
        true
    }

    /// Set a text field.
    #[must_use]
    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, Value::Text(value.into()));
        self
    }

    /// Set an integer field.
    #[must_use]
    pub fn with_int(mut self, name: &str, value: i64) -> Self {
        self.set(name, Value::Int(Some(value)));
        self
    }

    /// Set a money field.
    #[must_use]
    pub fn with_float(mut self, name: &str, value: f64) -> Self {
        self.set(name, Value::Float(Some(value)));
        self
    }

    /// Set one slot of a repeated amount field. Out-of-range slots are ignored.
    #[must_use]
    pub fn with_amount(mut self, name: &str, slot: usize, value: f64) -> Self {
        let mut amounts = self.amounts(name).to_vec();
        if let Some(entry) = amounts.get_mut(slot) {
            *entry = Some(value);
            self.set(name, Value::Amounts(amounts));
        }
        self
    }
}
