use crate::error::{SeisError, SeisResult};

/// Summary statistics of a sample sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divide by N)
    pub std_dev: f64,
}

impl SummaryStats {
    /// Compute mean and population standard deviation in two passes.
    /// Errors on an empty sequence instead of reporting zeros.
    pub fn compute(samples: &[f64]) -> SeisResult<Self> {
        if samples.is_empty() {
            return Err(SeisError::EmptyStatistics);
        }
        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Ok(SummaryStats {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Subtract `mean` from every sample in place
pub fn demean(samples: &mut [f64], mean: f64) {
    for v in samples.iter_mut() {
        *v -= mean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fixture() {
        let stats = SummaryStats::compute(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(stats.mean, 3.0);
        assert!((stats.std_dev - 1.41421356).abs() < 1e-8);
    }

    #[test]
    fn test_empty_sequence_errors() {
        assert!(matches!(
            SummaryStats::compute(&[]),
            Err(SeisError::EmptyStatistics)
        ));
    }

    #[test]
    fn test_constant_sequence_has_zero_deviation() {
        let stats = SummaryStats::compute(&[7.5, 7.5, 7.5]).unwrap();
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_demean_idempotence() {
        let mut samples = vec![2.0, 4.0, 6.0, 8.0];
        let stats = SummaryStats::compute(&samples).unwrap();
        demean(&mut samples, stats.mean);

        let again = SummaryStats::compute(&samples).unwrap();
        assert!(again.mean.abs() < 1e-12);
        let before = samples.clone();
        demean(&mut samples, again.mean);
        for (a, b) in before.iter().zip(samples.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
