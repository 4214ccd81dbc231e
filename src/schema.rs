//! Logical product fields and the header-row mapping onto input columns.
//!
//! Input files may order their columns arbitrarily and carry extra columns.
//! [`FieldIndexMap::from_header`] reads the header row once and remembers the
//! position of every recognized header name. Unrecognized names are ignored.

use std::fmt;

use log::debug;

pub const FIELD_COUNT: usize = 7;

/// One of the seven product attributes the tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    Make,
    Model,
    Colour,
    Capacity,
    Network,
    Grade,
    Condition,
}

impl LogicalField {
    /// All fields in output column order.
    pub const ALL: [LogicalField; FIELD_COUNT] = [
        LogicalField::Make,
        LogicalField::Model,
        LogicalField::Colour,
        LogicalField::Capacity,
        LogicalField::Network,
        LogicalField::Grade,
        LogicalField::Condition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LogicalField::Make => "make",
            LogicalField::Model => "model",
            LogicalField::Colour => "colour",
            LogicalField::Capacity => "capacity",
            LogicalField::Network => "network",
            LogicalField::Grade => "grade",
            LogicalField::Condition => "condition",
        }
    }

    /// Header cell text that identifies this field in an input file.
    pub fn header_name(self) -> &'static str {
        match self {
            LogicalField::Make => "brand_name",
            LogicalField::Model => "model_name",
            LogicalField::Colour => "colour_name",
            LogicalField::Capacity => "gb_spec_name",
            LogicalField::Network => "network_name",
            LogicalField::Grade => "grade_name",
            LogicalField::Condition => "condition_name",
        }
    }

    pub fn from_header(cell: &str) -> Option<LogicalField> {
        Self::ALL
            .into_iter()
            .find(|field| field.header_name() == cell)
    }

    pub fn is_required(self) -> bool {
        matches!(self, LogicalField::Make | LogicalField::Model)
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column position of each logical field, as found in the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndexMap {
    slots: [Option<usize>; FIELD_COUNT],
}

impl FieldIndexMap {
    pub fn from_header(header: &[String]) -> Self {
        let mut map = FieldIndexMap::default();
        for (idx, cell) in header.iter().enumerate() {
            match LogicalField::from_header(cell) {
                Some(field) => map.slots[field.position()] = Some(idx),
                None => debug!("Ignoring unrecognized header '{cell}' at column {idx}"),
            }
        }
        map
    }

    pub fn get(&self, field: LogicalField) -> Option<usize> {
        self.slots[field.position()]
    }

    pub fn missing_fields(&self) -> Vec<LogicalField> {
        LogicalField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }
}

impl fmt::Display for FieldIndexMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in LogicalField::ALL {
            if let Some(idx) = self.get(field) {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{field}={idx}")?;
                first = false;
            }
        }
        Ok(())
    }
}
