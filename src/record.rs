//! Normalized product records.
//!
//! Required-field validation looks at physical columns 0 and 1 of the raw
//! row, while values are extracted through the [`FieldIndexMap`]. The two
//! steps are independent: a file whose `brand_name` column sits elsewhere is
//! still validated on its first two columns.

use crate::{
    error::ParseError,
    schema::{FIELD_COUNT, FieldIndexMap, LogicalField},
};

/// One parsed data row as the seven attribute values, in [`LogicalField::ALL`] order.
///
/// Equality is exact, case-sensitive string equality across all seven values,
/// so a `Record` doubles as the grouping key of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    values: [String; FIELD_COUNT],
}

impl Record {
    pub fn from_values(values: [String; FIELD_COUNT]) -> Self {
        Self { values }
    }

    /// Normalizes `row`, the data row at 1-based file position `row_number`.
    pub fn normalize(
        row: &[String],
        index_map: &FieldIndexMap,
        row_number: usize,
    ) -> Result<Self, ParseError> {
        if row.len() < 2 || row[0].is_empty() || row[1].is_empty() {
            return Err(ParseError::MissingRequiredField { row: row_number });
        }
        // Trailing optional columns may be omitted entirely; an index past the
        // end of the row reads as an empty value, as does an unmapped field.
        let values = LogicalField::ALL.map(|field| {
            index_map
                .get(field)
                .and_then(|idx| row.get(idx))
                .cloned()
                .unwrap_or_default()
        });
        Ok(Self { values })
    }

    pub fn get(&self, field: LogicalField) -> &str {
        &self.values[field as usize]
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}
