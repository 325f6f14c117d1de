// Duplicate row removal
// Author: Gabriel Demetrios Lafis

use std::collections::HashSet;

use crate::data::{DataSet, Row, Value};
use super::{DataProcessor, ProcessingError, ProcessorType};

/// Remove rows that duplicate an earlier row.
///
/// Equality is exact, cell by cell over every column; the first occurrence is
/// kept and the relative order of surviving rows is preserved.
pub struct DeduplicateProcessor;

impl DeduplicateProcessor {
    /// Create a new deduplicate processor
    pub fn new() -> Self {
        DeduplicateProcessor
    }

    /// Build a hashable key for a row.
    ///
    /// Floats are keyed by bit pattern, so Integer(2) and Float(2.0) stay
    /// distinct rows. Each cell is prefixed with a tag and its length to keep
    /// the encoding unambiguous.
    fn row_key(row: &Row) -> String {
        let mut key = String::new();

        for value in &row.values {
            match value {
                Value::Null => key.push_str("n;"),
                Value::Integer(i) => {
                    key.push_str(&format!("i{};", i));
                }
                Value::Float(f) => {
                    key.push_str(&format!("f{};", f.to_bits()));
                }
                Value::String(s) => {
                    key.push_str(&format!("s{}:{};", s.len(), s));
                }
            }
        }

        key
    }
}

impl Default for DeduplicateProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProcessor for DeduplicateProcessor {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let mut result = DataSet::new(input.schema.clone());
        let mut seen = HashSet::new();

        for row in &input.data {
            if seen.insert(Self::row_key(row)) {
                result.add_row(row.clone())?;
            }
        }

        // Copy metadata
        for (key, value) in &input.metadata.properties {
            result.metadata.add(key.clone(), value.clone());
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "deduplicate"
    }

    fn processor_type(&self) -> ProcessorType {
        ProcessorType::Transform
    }
}
