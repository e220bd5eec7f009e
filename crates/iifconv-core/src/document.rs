//! In-memory IIF documents.

use crate::{Record, SectionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Records of an IIF file grouped by section type.
///
/// Every section type is present, possibly with no records. Records keep the
/// order in which they were pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    sections: BTreeMap<SectionType, Vec<Record>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with every section empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: SectionType::ALL
                .into_iter()
                .map(|section| (section, Vec::new()))
                .collect(),
        }
    }

    /// Records of one section, in insertion order.
    #[must_use]
    pub fn records(&self, section: SectionType) -> &[Record] {
        self.sections.get(&section).map_or(&[], Vec::as_slice)
    }

    /// Append a record to its section.
    ///
    /// `ENDGRP` records carry nothing and are dropped.
    pub fn push(&mut self, record: Record) {
        let section = record.section();
        if section.is_group_end() {
            return;
        }
        self.sections.entry(section).or_default().push(record);
    }

    /// Builder-style [`Document::push`].
    #[must_use]
    pub fn with_record(mut self, record: Record) -> Self {
        self.push(record);
        self
    }

    /// Iterate over all sections in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionType, &[Record])> {
        self.sections
            .iter()
            .map(|(section, records)| (*section, records.as_slice()))
    }

    /// Record counts per section, in canonical order.
    #[must_use]
    pub fn counts(&self) -> Vec<(SectionType, usize)> {
        self.iter()
            .map(|(section, records)| (section, records.len()))
            .collect()
    }

    /// Number of sections (always every known section type).
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Whether the document holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
