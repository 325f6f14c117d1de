// Descriptive statistics for numeric columns
// Author: Gabriel Demetrios Lafis

use crate::data::DataSet;

/// Descriptive statistics for a single numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize a set of values; `None` when there are no values
    pub fn describe(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(ColumnSummary {
            count: values.len(),
            mean: compute_mean(values),
            std_dev: compute_std_dev(values),
            min: sorted[0],
            q1: compute_quantile(&sorted, 0.25),
            median: compute_quantile(&sorted, 0.5),
            q3: compute_quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Summarize every numeric column of a dataset, in schema order
pub fn numeric_summary(data: &DataSet) -> Vec<(String, ColumnSummary)> {
    let mut summaries = Vec::new();

    for (i, field) in data.schema.fields.iter().enumerate() {
        if !field.data_type.is_numeric() {
            continue;
        }

        let values = numeric_values(data, i);

        if let Some(summary) = ColumnSummary::describe(&values) {
            summaries.push((field.name.clone(), summary));
        }
    }

    summaries
}

/// Get the non-missing numeric values from a column
fn numeric_values(data: &DataSet, column_index: usize) -> Vec<f64> {
    data.data
        .iter()
        .filter_map(|row| row.values[column_index].as_f64())
        .collect()
}

/// Compute mean of values
fn compute_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Compute sample standard deviation of values
fn compute_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let mean = compute_mean(values);
    let variance = values
        .iter()
        .map(|&x| (x - mean).powi(2))
        .sum::<f64>()
        / (values.len() - 1) as f64;

    variance.sqrt()
}

/// Compute a quantile of sorted values with linear interpolation
fn compute_quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let pos = q * (sorted.len() - 1) as f64;
    let idx = pos.floor() as usize;
    let frac = pos - idx as f64;

    if idx + 1 < sorted.len() {
        sorted[idx] + frac * (sorted[idx + 1] - sorted[idx])
    } else {
        sorted[idx]
    }
}
