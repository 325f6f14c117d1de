// Missing-value imputation
// Author: Gabriel Demetrios Lafis

use crate::data::{DataSet, DataType, Row, Schema, Value};
use super::{DataProcessor, ProcessingError, ProcessorType};

/// Default fill for missing cells in text columns
pub const DEFAULT_PLACEHOLDER: &str = "Unknown";

/// Fill missing cells column by column.
///
/// Numeric columns are filled with the arithmetic mean of their non-missing
/// values, computed before any replacement. Text columns are filled with a
/// placeholder string. Columns without missing cells pass through unchanged;
/// column set and order are preserved.
pub struct ImputeProcessor {
    placeholder: String,
}

impl ImputeProcessor {
    /// Create a new impute processor with the default placeholder
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Create a new impute processor with a custom text placeholder
    pub fn with_placeholder(placeholder: &str) -> Self {
        ImputeProcessor {
            placeholder: placeholder.to_string(),
        }
    }

    /// Mean of the non-missing numeric values in a column
    fn column_mean(input: &DataSet, column_index: usize) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;

        for row in &input.data {
            if let Some(v) = row.values[column_index].as_f64() {
                sum += v;
                count += 1;
            }
        }

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

impl Default for ImputeProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProcessor for ImputeProcessor {
    fn process(&self, input: &DataSet) -> Result<DataSet, ProcessingError> {
        let column_count = input.schema.fields.len();
        let mut fields = input.schema.fields.clone();
        let mut fills: Vec<Option<Value>> = vec![None; column_count];
        let mut promoted = vec![false; column_count];

        for (i, field) in input.schema.fields.iter().enumerate() {
            if input.missing_count(i) == 0 {
                continue;
            }

            match field.data_type {
                DataType::Integer | DataType::Float => {
                    let mean = Self::column_mean(input, i).ok_or_else(|| {
                        ProcessingError::InvalidOperation(format!(
                            "Column '{}' has no values to compute a mean from",
                            field.name
                        ))
                    })?;

                    fills[i] = Some(Value::Float(mean));

                    // A filled integer column holds a fractional mean, so the
                    // whole column becomes float
                    if field.data_type == DataType::Integer {
                        fields[i].data_type = DataType::Float;
                        promoted[i] = true;
                    }
                }
                DataType::String => {
                    fills[i] = Some(Value::String(self.placeholder.clone()));
                }
            }
        }

        let mut result = DataSet::new(Schema::new(fields));

        for row in &input.data {
            let values: Vec<Value> = row
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| match value {
                    Value::Null => fills[i].clone().unwrap_or(Value::Null),
                    Value::Integer(n) if promoted[i] => Value::Float(*n as f64),
                    other => other.clone(),
                })
                .collect();

            result.add_row(Row::new(values))?;
        }

        // Copy metadata
        for (key, value) in &input.metadata.properties {
            result.metadata.add(key.clone(), value.clone());
        }

        Ok(result)
    }

    fn name(&self) -> &str {
        "impute"
    }

    fn processor_type(&self) -> ProcessorType {
        ProcessorType::Transform
    }
}
