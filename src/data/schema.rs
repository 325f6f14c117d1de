// Schema inference and construction
// Author: Gabriel Demetrios Lafis

use super::{DataError, DataType, Field, Schema, Value};

/// Cell contents treated as the missing-value marker on load
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Check whether a raw cell denotes a missing value
pub fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

/// Infer the data type of a column from its raw cells.
///
/// A column where every non-missing cell parses as an integer is `Integer`,
/// unless the column also has missing cells, in which case it is promoted to
/// `Float` (the mean fill is fractional in general). A column where every
/// non-missing cell parses as a float is `Float`. Anything else, including a
/// column with no non-missing cells at all, is `String`.
pub fn infer_column_type<'a, I>(cells: I) -> DataType
where
    I: IntoIterator<Item = &'a str>,
{
    let mut has_missing = false;
    let mut non_missing = 0usize;
    let mut all_integer = true;
    let mut all_float = true;

    for cell in cells {
        if is_missing(cell) {
            has_missing = true;
            continue;
        }

        non_missing += 1;
        let trimmed = cell.trim();

        if trimmed.parse::<i64>().is_err() {
            all_integer = false;
        }

        if trimmed.parse::<f64>().is_err() {
            all_float = false;
        }
    }

    if non_missing == 0 {
        // All-missing columns are treated as text and filled with the
        // placeholder; a mean is undefined here.
        return DataType::String;
    }

    if all_integer {
        if has_missing {
            DataType::Float
        } else {
            DataType::Integer
        }
    } else if all_float {
        DataType::Float
    } else {
        DataType::String
    }
}

/// Parse a raw cell into a value of the given type
pub fn parse_value(cell: &str, data_type: &DataType) -> Result<Value, DataError> {
    if is_missing(cell) {
        return Ok(Value::Null);
    }

    let trimmed = cell.trim();

    match data_type {
        DataType::Integer => trimmed
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| DataError::ParseError(format!("Cannot parse '{}' as integer", cell))),
        DataType::Float => trimmed
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| DataError::ParseError(format!("Cannot parse '{}' as float", cell))),
        DataType::String => Ok(Value::String(cell.to_string())),
    }
}

/// Schema builder for creating schemas
pub struct SchemaBuilder {
    fields: Vec<Field>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Add a field to the schema
    pub fn add_field(mut self, name: &str, data_type: DataType, nullable: bool) -> Self {
        self.fields
            .push(Field::new(name.to_string(), data_type, nullable));
        self
    }

    /// Add an integer field
    pub fn add_integer(self, name: &str, nullable: bool) -> Self {
        self.add_field(name, DataType::Integer, nullable)
    }

    /// Add a float field
    pub fn add_float(self, name: &str, nullable: bool) -> Self {
        self.add_field(name, DataType::Float, nullable)
    }

    /// Add a string field
    pub fn add_string(self, name: &str, nullable: bool) -> Self {
        self.add_field(name, DataType::String, nullable)
    }

    /// Build the schema
    pub fn build(self) -> Schema {
        Schema::new(self.fields)
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
