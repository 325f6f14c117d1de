// Cleaning pipeline tests
// Author: Gabriel Demetrios Lafis

use std::fs;

use rust_data_cleaner::{
    data::{
        CsvSink, CsvSource, DataError, DataSet, DataSink, DataSource, DataType, Row, SchemaBuilder,
        Value,
    },
    job::CleaningJob,
    processing::{
        ColumnSummary, DataProcessor, DeduplicateProcessor, ImputeProcessor, Pipeline,
        ProcessingError,
    },
    report::SummaryReport,
    utils::Config,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_deduplicate_keeps_first_occurrence() {
    let schema = SchemaBuilder::new()
        .add_integer("id", true)
        .add_string("name", true)
        .build();

    let mut dataset = DataSet::new(schema);

    dataset
        .add_row(Row::new(vec![
            Value::Integer(1),
            Value::String("Alice".to_string()),
        ]))
        .unwrap();

    dataset
        .add_row(Row::new(vec![
            Value::Integer(2),
            Value::String("Bob".to_string()),
        ]))
        .unwrap();

    dataset
        .add_row(Row::new(vec![
            Value::Integer(1),
            Value::String("Alice".to_string()),
        ]))
        .unwrap();

    let result = DeduplicateProcessor::new().process(&dataset).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result.data[0].values[0], Value::Integer(1));
    assert_eq!(result.data[1].values[0], Value::Integer(2));
}

#[test]
fn test_deduplicate_is_idempotent() {
    let schema = SchemaBuilder::new()
        .add_integer("id", true)
        .add_float("score", true)
        .build();

    let mut dataset = DataSet::new(schema);

    dataset
        .add_row(Row::new(vec![Value::Integer(1), Value::Float(0.5)]))
        .unwrap();

    dataset
        .add_row(Row::new(vec![Value::Integer(2), Value::Null]))
        .unwrap();

    let dedup = DeduplicateProcessor::new();
    let once = dedup.process(&dataset).unwrap();
    let twice = dedup.process(&once).unwrap();

    assert_eq!(once.len(), 2);
    assert_eq!(twice.len(), 2);
    assert_eq!(once.data, twice.data);
}

#[test]
fn test_deduplicate_distinguishes_integer_and_float() {
    let schema = SchemaBuilder::new().add_float("x", true).build();

    let mut dataset = DataSet::new(schema);
    dataset.add_row(Row::new(vec![Value::Integer(2)])).unwrap();
    dataset.add_row(Row::new(vec![Value::Float(2.0)])).unwrap();

    let result = DeduplicateProcessor::new().process(&dataset).unwrap();

    assert_eq!(result.len(), 2);
}

#[test]
fn test_impute_numeric_mean() {
    let schema = SchemaBuilder::new().add_float("score", true).build();

    let mut dataset = DataSet::new(schema);
    dataset.add_row(Row::new(vec![Value::Float(2.0)])).unwrap();
    dataset.add_row(Row::new(vec![Value::Float(4.0)])).unwrap();
    dataset.add_row(Row::new(vec![Value::Float(6.0)])).unwrap();
    dataset.add_row(Row::new(vec![Value::Null])).unwrap();

    let result = ImputeProcessor::new().process(&dataset).unwrap();

    assert_eq!(result.data[3].values[0], Value::Float(4.0));
}

#[test]
fn test_impute_promotes_integer_column_to_float() {
    let schema = SchemaBuilder::new().add_integer("count", true).build();

    let mut dataset = DataSet::new(schema);
    dataset.add_row(Row::new(vec![Value::Integer(1)])).unwrap();
    dataset.add_row(Row::new(vec![Value::Null])).unwrap();
    dataset.add_row(Row::new(vec![Value::Integer(3)])).unwrap();

    let result = ImputeProcessor::new().process(&dataset).unwrap();

    assert_eq!(result.schema.fields[0].data_type, DataType::Float);
    assert_eq!(result.data[0].values[0], Value::Float(1.0));
    assert_eq!(result.data[1].values[0], Value::Float(2.0));
    assert_eq!(result.data[2].values[0], Value::Float(3.0));
}

#[test]
fn test_impute_text_placeholder() {
    let schema = SchemaBuilder::new().add_string("name", true).build();

    let mut dataset = DataSet::new(schema);
    dataset
        .add_row(Row::new(vec![Value::String("Alice".to_string())]))
        .unwrap();
    dataset.add_row(Row::new(vec![Value::Null])).unwrap();

    let result = ImputeProcessor::new().process(&dataset).unwrap();

    assert_eq!(result.data[1].values[0], Value::String("Unknown".to_string()));
}

#[test]
fn test_impute_leaves_complete_columns_unchanged() {
    let schema = SchemaBuilder::new()
        .add_integer("id", false)
        .add_string("name", false)
        .build();

    let mut dataset = DataSet::new(schema);
    dataset
        .add_row(Row::new(vec![
            Value::Integer(1),
            Value::String("Alice".to_string()),
        ]))
        .unwrap();

    let result = ImputeProcessor::new().process(&dataset).unwrap();

    assert_eq!(result.schema.fields[0].data_type, DataType::Integer);
    assert_eq!(result.data, dataset.data);
}

#[test]
fn test_impute_all_missing_numeric_column_is_an_error() {
    let schema = SchemaBuilder::new().add_float("score", true).build();

    let mut dataset = DataSet::new(schema);
    dataset.add_row(Row::new(vec![Value::Null])).unwrap();
    dataset.add_row(Row::new(vec![Value::Null])).unwrap();

    let result = ImputeProcessor::new().process(&dataset);

    assert!(matches!(
        result,
        Err(ProcessingError::InvalidOperation(_))
    ));
}

#[test]
fn test_clean_end_to_end() {
    // Rows: (A=1, B="x"), (A=1, B="x"), (A=missing, B="y"), (A=3, B=missing)
    let schema = SchemaBuilder::new()
        .add_float("A", true)
        .add_string("B", true)
        .build();

    let mut dataset = DataSet::new(schema);
    dataset
        .add_row(Row::new(vec![
            Value::Float(1.0),
            Value::String("x".to_string()),
        ]))
        .unwrap();
    dataset
        .add_row(Row::new(vec![
            Value::Float(1.0),
            Value::String("x".to_string()),
        ]))
        .unwrap();
    dataset
        .add_row(Row::new(vec![Value::Null, Value::String("y".to_string())]))
        .unwrap();
    dataset
        .add_row(Row::new(vec![Value::Float(3.0), Value::Null]))
        .unwrap();

    let pipeline = Pipeline::new("clean")
        .add(DeduplicateProcessor::new())
        .add(ImputeProcessor::new());

    let result = pipeline.execute(&dataset).unwrap();

    // One duplicate removed
    assert_eq!(result.len(), 3);

    // Column set and order preserved
    assert_eq!(result.schema.fields[0].name, "A");
    assert_eq!(result.schema.fields[1].name, "B");

    // Missing A filled with mean of {1, 3}, missing B with the placeholder
    assert_eq!(result.data[1].values[0], Value::Float(2.0));
    assert_eq!(result.data[2].values[1], Value::String("Unknown".to_string()));

    // No missing markers remain
    for row in &result.data {
        for value in &row.values {
            assert!(!value.is_null());
        }
    }
}

#[test]
fn test_csv_source_infers_column_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");

    fs::write(&path, "id,count,name\n1,4,a\n2,,b\n3,6,\n").unwrap();

    let dataset = CsvSource::new(&path, true, ',').read().unwrap();

    // No missing cells and all integers
    assert_eq!(dataset.schema.fields[0].data_type, DataType::Integer);
    // Integer cells with a hole promote to float
    assert_eq!(dataset.schema.fields[1].data_type, DataType::Float);
    assert_eq!(dataset.schema.fields[2].data_type, DataType::String);

    assert_eq!(dataset.data[0].values[0], Value::Integer(1));
    assert_eq!(dataset.data[0].values[1], Value::Float(4.0));
    assert_eq!(dataset.data[1].values[1], Value::Null);
    assert_eq!(dataset.data[2].values[2], Value::Null);
}

#[test]
fn test_csv_source_treats_all_missing_column_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");

    fs::write(&path, "id,ghost\n1,\n2,\n").unwrap();

    let dataset = CsvSource::new(&path, true, ',').read().unwrap();
    assert_eq!(dataset.schema.fields[1].data_type, DataType::String);

    let cleaned = ImputeProcessor::new().process(&dataset).unwrap();
    assert_eq!(cleaned.data[0].values[1], Value::String("Unknown".to_string()));
}

#[test]
fn test_csv_source_missing_file_is_fatal_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nonexistent.csv");

    let result = CsvSource::new(&path, true, ',').read();

    assert!(matches!(result, Err(DataError::NotFound(_))));

    // Nothing was written
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_csv_sink_output_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let schema = SchemaBuilder::new()
        .add_float("A", true)
        .add_string("B", true)
        .build();

    let mut dataset = DataSet::new(schema);
    dataset
        .add_row(Row::new(vec![
            Value::Float(2.0),
            Value::String("x".to_string()),
        ]))
        .unwrap();
    dataset
        .add_row(Row::new(vec![Value::Float(1.5), Value::Null]))
        .unwrap();

    CsvSink::new(&path, ',').write(&dataset).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "A,B\n2.0,x\n1.5,\n");
}

#[test]
fn test_column_summary_statistics() {
    let summary = ColumnSummary::describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!(summary.count, 4);
    assert!(approx(summary.mean, 2.5));
    assert!(approx(summary.std_dev, (5.0f64 / 3.0).sqrt()));
    assert!(approx(summary.min, 1.0));
    assert!(approx(summary.q1, 1.75));
    assert!(approx(summary.median, 2.5));
    assert!(approx(summary.q3, 3.25));
    assert!(approx(summary.max, 4.0));
}

#[test]
fn test_column_summary_empty_is_none() {
    assert!(ColumnSummary::describe(&[]).is_none());
}

#[test]
fn test_report_counts_missing_before_cleaning() {
    let schema = SchemaBuilder::new()
        .add_float("A", true)
        .add_string("B", true)
        .build();

    let mut original = DataSet::new(schema);
    original
        .add_row(Row::new(vec![
            Value::Float(1.0),
            Value::String("x".to_string()),
        ]))
        .unwrap();
    original
        .add_row(Row::new(vec![Value::Null, Value::String("y".to_string())]))
        .unwrap();
    original
        .add_row(Row::new(vec![Value::Float(3.0), Value::Null]))
        .unwrap();

    let cleaned = ImputeProcessor::new().process(&original).unwrap();
    let report = SummaryReport::build(&original, &cleaned);

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.total_columns, 2);
    assert_eq!(report.missing_values[0], ("A".to_string(), 1));
    assert_eq!(report.missing_values[1], ("B".to_string(), 1));

    let text = report.render();
    assert!(text.contains("Total rows: 3"));
    assert!(text.contains("  A: 1"));
    assert!(text.contains("    mean: 2.0000"));
}

#[test]
fn test_job_run_produces_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.csv");

    fs::write(&input, "A,B\n1,x\n1,x\n,y\n3,\n").unwrap();

    let mut config = Config::default();
    config.job.input_path = input.to_string_lossy().to_string();
    config.job.output_prefix = dir.path().join("cleaned").to_string_lossy().to_string();
    config.job.report_path = dir.path().join("report.txt").to_string_lossy().to_string();

    let outcome = CleaningJob::new(config).run().unwrap();

    assert_eq!(outcome.rows_before, 4);
    assert_eq!(outcome.rows_after, 3);
    assert!(outcome.output_path.exists());

    let cleaned = fs::read_to_string(&outcome.output_path).unwrap();
    assert_eq!(cleaned, "A,B\n1.0,x\n2.0,y\n3.0,Unknown\n");

    let report = fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(report.contains("Total rows: 3"));
    assert!(report.contains("Missing values per column (before cleaning):"));
}

#[test]
fn test_job_missing_input_produces_no_artifacts() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.job.input_path = dir.path().join("absent.csv").to_string_lossy().to_string();
    config.job.output_prefix = dir.path().join("cleaned").to_string_lossy().to_string();
    config.job.report_path = dir.path().join("report.txt").to_string_lossy().to_string();

    let result = CleaningJob::new(config).run();

    assert!(result.is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
