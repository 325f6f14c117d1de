// Summary report generation
// Author: Gabriel Demetrios Lafis

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::data::DataSet;
use crate::processing::{numeric_summary, ColumnSummary};

/// Plain-text summary of a cleaning run.
///
/// Row and column totals and the numeric statistics come from the cleaned
/// table; the missing-value counts come from the table as loaded, since the
/// cleaned table has none left by construction.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub total_rows: usize,
    pub total_columns: usize,
    pub missing_values: Vec<(String, usize)>,
    pub numerical_summary: Vec<(String, ColumnSummary)>,
}

impl SummaryReport {
    /// Build a report from the original and cleaned tables
    pub fn build(original: &DataSet, cleaned: &DataSet) -> Self {
        let missing_values = original
            .schema
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| (field.name.clone(), original.missing_count(i)))
            .collect();

        SummaryReport {
            total_rows: cleaned.len(),
            total_columns: cleaned.schema.fields.len(),
            missing_values,
            numerical_summary: numeric_summary(cleaned),
        }
    }

    /// Render the report as human-readable text
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Data Cleaning Report");
        let _ = writeln!(out, "====================");
        let _ = writeln!(out);
        let _ = writeln!(out, "Total rows: {}", self.total_rows);
        let _ = writeln!(out, "Total columns: {}", self.total_columns);
        let _ = writeln!(out);

        let _ = writeln!(out, "Missing values per column (before cleaning):");
        for (name, count) in &self.missing_values {
            let _ = writeln!(out, "  {}: {}", name, count);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Numerical summary:");
        for (name, summary) in &self.numerical_summary {
            let _ = writeln!(out, "  {}:", name);
            let _ = writeln!(out, "    count: {}", summary.count);
            let _ = writeln!(out, "    mean: {:.4}", summary.mean);
            let _ = writeln!(out, "    std: {:.4}", summary.std_dev);
            let _ = writeln!(out, "    min: {:.4}", summary.min);
            let _ = writeln!(out, "    25%: {:.4}", summary.q1);
            let _ = writeln!(out, "    50%: {:.4}", summary.median);
            let _ = writeln!(out, "    75%: {:.4}", summary.q3);
            let _ = writeln!(out, "    max: {:.4}", summary.max);
        }

        out
    }

    /// Write the rendered report to a file, overwriting any previous one
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.render().as_bytes())?;
        writer.flush()
    }
}
