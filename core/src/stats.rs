//! Aggregation of a statistic across repeated runs.

use thiserror::Error;

/// Result type returned by fallible aggregation routines.
pub type StatsResult<T> = Result<T, StatsError>;

/// Error encountered when adding samples.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StatsError {
    #[error("sample row has length {got} but earlier rows have length {expected}")]
    RowLength { expected: usize, got: usize },
}

/// Matrix of samples with one row per run and one column per generation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Samples {
    rows: Vec<Vec<f64>>,
}

impl Samples {
    /// Creates an empty set of samples.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the values from one run.
    pub fn push(&mut self, row: Vec<f64>) -> StatsResult<()> {
        if let Some(expected) = self.row_len() {
            if row.len() != expected {
                return Err(StatsError::RowLength {
                    expected,
                    got: row.len(),
                });
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the number of runs.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// Returns whether there are no runs.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Returns the number of values in each run, or `None` if there are no
    /// runs.
    pub fn row_len(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }
    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the mean of each column.
    pub fn mean(&self) -> Vec<f64> {
        let n = self.rows.len() as f64;
        self.column_sums()
            .into_iter()
            .map(|sum| sum / n)
            .collect()
    }

    /// Returns the population standard deviation of each column.
    pub fn std(&self) -> Vec<f64> {
        let n = self.rows.len() as f64;
        let mean = self.mean();
        (0..mean.len())
            .map(|i| {
                let sum_sq: f64 = self.rows.iter().map(|row| (row[i] - mean[i]).powi(2)).sum();
                (sum_sq / n).sqrt()
            })
            .collect()
    }

    fn column_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.row_len().unwrap_or(0)];
        for row in &self.rows {
            for (sum, &x) in sums.iter_mut().zip(row) {
                *sum += x;
            }
        }
        sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(expected: &[f64], actual: &[f64]) {
        assert_eq!(expected.len(), actual.len());
        for (e, a) in expected.iter().zip(actual) {
            assert!((e - a).abs() < 1e-12, "expected {:?}, got {:?}", expected, actual);
        }
    }

    #[test]
    fn test_mean_and_std() {
        let mut samples = Samples::new();
        samples.push(vec![1.0, 2.0, 0.0]).unwrap();
        samples.push(vec![3.0, 2.0, 4.0]).unwrap();
        assert_eq!(2, samples.len());
        assert_eq!(Some(3), samples.row_len());
        assert_close(&[2.0, 2.0, 2.0], &samples.mean());
        assert_close(&[1.0, 0.0, 2.0], &samples.std());
    }

    #[test]
    fn test_single_row() {
        let mut samples = Samples::new();
        samples.push(vec![5.0, 7.0]).unwrap();
        assert_close(&[5.0, 7.0], &samples.mean());
        assert_close(&[0.0, 0.0], &samples.std());
    }

    #[test]
    fn test_empty() {
        let samples = Samples::new();
        assert!(samples.is_empty());
        assert_eq!(None, samples.row_len());
        assert!(samples.mean().is_empty());
        assert!(samples.std().is_empty());
    }

    #[test]
    fn test_row_length_mismatch() {
        let mut samples = Samples::new();
        samples.push(vec![1.0, 2.0]).unwrap();
        assert_eq!(
            Err(StatsError::RowLength {
                expected: 2,
                got: 3
            }),
            samples.push(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(1, samples.len());
    }
}
