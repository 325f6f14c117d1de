// CSV data source and sink implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::{
    infer_column_type, parse_value, DataError, DataSet, DataSink, DataSource, Field, Row, Schema,
    Value,
};

/// CSV data source
pub struct CsvSource {
    path: String,
    has_header: bool,
    delimiter: char,
}

impl CsvSource {
    /// Create a new CSV data source
    pub fn new<P: AsRef<Path>>(path: P, has_header: bool, delimiter: char) -> Self {
        CsvSource {
            path: path.as_ref().to_string_lossy().to_string(),
            has_header,
            delimiter,
        }
    }
}

impl DataSource for CsvSource {
    fn read(&self) -> Result<DataSet, DataError> {
        if !Path::new(&self.path).exists() {
            return Err(DataError::NotFound(self.path.clone()));
        }

        let file = File::open(&self.path).map_err(DataError::IoError)?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter as u8)
            .has_headers(self.has_header)
            .from_reader(reader);

        // Read headers to name columns
        let headers: Vec<String> = if self.has_header {
            csv_reader
                .headers()
                .map_err(|e| DataError::ParseError(e.to_string()))?
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            Vec::new()
        };

        // Read all records as raw cells; type inference needs a full column scan
        let mut records: Vec<Vec<String>> = Vec::new();
        for result in csv_reader.records() {
            let record = result.map_err(|e| DataError::ParseError(e.to_string()))?;
            records.push(record.iter().map(|s| s.to_string()).collect());
        }

        let headers = if headers.is_empty() {
            let width = records.first().map_or(0, |r| r.len());
            (0..width).map(|i| format!("column_{}", i)).collect()
        } else {
            headers
        };

        for record in &records {
            if record.len() != headers.len() {
                return Err(DataError::ParseError(format!(
                    "Record has {} fields, header has {}",
                    record.len(),
                    headers.len()
                )));
            }
        }

        // Infer a type per column from its raw cells
        let fields: Vec<Field> = headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let data_type =
                    infer_column_type(records.iter().map(|record| record[i].as_str()));
                Field::new(name.clone(), data_type, true)
            })
            .collect();

        let schema = Schema::new(fields);
        let mut dataset = DataSet::new(schema);

        // Parse cells against the inferred column types
        for record in &records {
            let mut values = Vec::with_capacity(record.len());
            for (i, cell) in record.iter().enumerate() {
                let data_type = dataset.schema.fields[i].data_type;
                values.push(parse_value(cell, &data_type)?);
            }
            dataset.add_row(Row::new(values))?;
        }

        // Add metadata
        dataset.metadata.add("source".to_string(), "csv".to_string());
        dataset.metadata.add("path".to_string(), self.path.clone());

        Ok(dataset)
    }

    fn name(&self) -> &str {
        &self.path
    }
}

/// CSV data sink
pub struct CsvSink {
    path: String,
    delimiter: char,
}

impl CsvSink {
    /// Create a new CSV data sink
    pub fn new<P: AsRef<Path>>(path: P, delimiter: char) -> Self {
        CsvSink {
            path: path.as_ref().to_string_lossy().to_string(),
            delimiter,
        }
    }

    /// Render a value as a CSV field
    fn format_value(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => {
                // Integral floats keep one decimal so the column stays
                // recognizably floating point on reload
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{:.1}", f)
                } else {
                    f.to_string()
                }
            }
            Value::String(s) => s.clone(),
        }
    }
}

impl DataSink for CsvSink {
    fn write(&self, data: &DataSet) -> Result<(), DataError> {
        let file = File::create(&self.path).map_err(DataError::IoError)?;
        let writer = BufWriter::new(file);

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter as u8)
            .from_writer(writer);

        // Write headers
        let headers: Vec<&str> = data
            .schema
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect();

        csv_writer
            .write_record(&headers)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        // Write data
        for row in &data.data {
            let record: Vec<String> = row.values.iter().map(Self::format_value).collect();

            csv_writer
                .write_record(&record)
                .map_err(|e| DataError::ParseError(e.to_string()))?;
        }

        csv_writer.flush().map_err(DataError::IoError)?;

        Ok(())
    }

    fn name(&self) -> &str {
        &self.path
    }
}
