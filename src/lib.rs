// Rust Data Cleaner
// Author: Gabriel Demetrios Lafis

//! # Rust Data Cleaner
//!
//! A CSV data cleaning automation tool written in Rust.
//!
//! ## Features
//!
//! - CSV loading with per-column type inference
//! - Duplicate row removal (first occurrence kept, order preserved)
//! - Missing-value imputation (column mean for numeric columns, a
//!   placeholder string for text columns)
//! - Timestamped cleaned output and a plain-text summary report
//!
//! ## Example
//!
//! ```rust
//! use rust_data_cleaner::{
//!     data::{DataSet, DataType, Field, Row, Schema, Value},
//!     processing::{DeduplicateProcessor, ImputeProcessor, Pipeline},
//! };
//!
//! // Create a schema
//! let schema = Schema::new(vec![
//!     Field::new("age".to_string(), DataType::Float, true),
//!     Field::new("name".to_string(), DataType::String, true),
//! ]);
//!
//! // Create a dataset with a duplicate row and missing cells
//! let mut dataset = DataSet::new(schema);
//!
//! dataset.add_row(Row::new(vec![
//!     Value::Float(30.0),
//!     Value::String("Alice".to_string()),
//! ])).unwrap();
//!
//! dataset.add_row(Row::new(vec![
//!     Value::Float(30.0),
//!     Value::String("Alice".to_string()),
//! ])).unwrap();
//!
//! dataset.add_row(Row::new(vec![
//!     Value::Null,
//!     Value::String("Bob".to_string()),
//! ])).unwrap();
//!
//! // Create a cleaning pipeline
//! let pipeline = Pipeline::new("clean")
//!     .add(DeduplicateProcessor::new())
//!     .add(ImputeProcessor::new());
//!
//! // Process the dataset
//! let result = pipeline.execute(&dataset).unwrap();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.data[1].values[0], Value::Float(30.0));
//! ```

pub mod data;
pub mod job;
pub mod processing;
pub mod report;
pub mod utils;

// Re-export main types
pub use data::{DataSet, DataType, Field, Row, Schema, Value};
pub use job::CleaningJob;
pub use processing::Pipeline;
pub use report::SummaryReport;
pub use utils::Config;
