// Cleaning job orchestration: load, clean, save, report
// Author: Gabriel Demetrios Lafis

use std::path::PathBuf;

use chrono::Local;
use log::{error, info};

use crate::data::{CsvSink, CsvSource, DataError, DataSet, DataSink, DataSource};
use crate::processing::{DeduplicateProcessor, ImputeProcessor, Pipeline};
use crate::report::SummaryReport;
use crate::utils::{AppResult, Config};

/// Outcome of a completed cleaning run
#[derive(Debug)]
pub struct JobOutcome {
    pub output_path: PathBuf,
    pub rows_before: usize,
    pub rows_after: usize,
}

/// One batch cleaning run over a single CSV file.
///
/// Loads the input, removes duplicate rows, imputes missing values, writes a
/// timestamped cleaned file and a plain-text summary report.
pub struct CleaningJob {
    config: Config,
}

impl CleaningJob {
    /// Create a new cleaning job with the given configuration
    pub fn new(config: Config) -> Self {
        CleaningJob { config }
    }

    /// Load the input CSV into a dataset
    pub fn load(&self) -> AppResult<DataSet> {
        info!("Loading CSV file...");

        let source = CsvSource::new(&self.config.job.input_path, true, ',');

        source.read().map_err(|err| {
            if matches!(err, DataError::NotFound(_)) {
                error!("Input file does not exist.");
            }
            err.into()
        })
    }

    /// Deduplicate and impute, in that order
    pub fn clean(&self, input: &DataSet) -> AppResult<DataSet> {
        info!("Cleaning data...");

        let pipeline = Pipeline::new("clean")
            .add(DeduplicateProcessor::new())
            .add(ImputeProcessor::with_placeholder(&self.config.job.placeholder));

        Ok(pipeline.execute(input)?)
    }

    /// Write the cleaned dataset to a timestamped CSV file
    pub fn save(&self, data: &DataSet) -> AppResult<PathBuf> {
        let timestamp = Local::now().format("%Y%m%d_%H%M");
        let path = PathBuf::from(format!("{}_{}.csv", self.config.job.output_prefix, timestamp));

        let sink = CsvSink::new(&path, ',');
        sink.write(data)?;

        info!("Cleaned file saved as {}", path.display());
        Ok(path)
    }

    /// Write the summary report
    pub fn report(&self, original: &DataSet, cleaned: &DataSet) -> AppResult<()> {
        let report = SummaryReport::build(original, cleaned);
        report.write_to(&self.config.job.report_path)?;

        info!("Generated summary report.");
        Ok(())
    }

    /// Run the whole job: load, clean, save, report
    pub fn run(&self) -> AppResult<JobOutcome> {
        let original = self.load()?;
        let cleaned = self.clean(&original)?;
        let output_path = self.save(&cleaned)?;
        self.report(&original, &cleaned)?;

        info!("Data cleaning automation completed successfully.");

        Ok(JobOutcome {
            output_path,
            rows_before: original.len(),
            rows_after: cleaned.len(),
        })
    }
}
