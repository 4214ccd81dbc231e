//! Aggregation of normalized records into unique combinations.
//!
//! [`Aggregator`] owns two views of the run: every record in input order, and
//! one [`AggregateEntry`] per distinct record with its occurrence count. Entry
//! lookup goes through a hash index keyed on the full record, while the
//! entries themselves stay in a vector so reports come out in first-seen order.

use std::collections::HashMap;

use crate::record::Record;

/// A distinct combination of attribute values and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    pub record: Record,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<Record>,
    entries: Vec<AggregateEntry>,
    positions: HashMap<Record, usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, record: Record) {
        match self.positions.get(&record) {
            Some(&position) => self.entries[position].count += 1,
            None => {
                self.positions.insert(record.clone(), self.entries.len());
                self.entries.push(AggregateEntry {
                    record: record.clone(),
                    count: 1,
                });
            }
        }
        self.records.push(record);
    }

    /// Every ingested record, in input order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Distinct combinations, first-seen first.
    pub fn entries(&self) -> &[AggregateEntry] {
        &self.entries
    }

    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
