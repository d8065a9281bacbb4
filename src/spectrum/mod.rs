//! Transform-engine binding and spectrum output

/// Textual spectrum report writer
pub mod writer;

pub use writer::write_spectrum;

use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;

/// Complex frequency-domain representation of one trace
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequency bins; bin k corresponds to k/N times the sample rate
    pub bins: Vec<Complex64>,
    /// Sample rate of the time-domain input in Hz
    pub sample_rate: f64,
}

impl Spectrum {
    /// Forward DFT of a real-valued sample sequence.
    ///
    /// The engine output is unscaled: bin k holds the sum of
    /// x\[n\]·e^(−2πi·k·n/N) over n. No normalization is applied.
    pub fn forward(samples: &[f64], sample_rate: f64) -> Self {
        let mut bins: Vec<Complex64> = samples
            .iter()
            .map(|&v| Complex64::new(v, 0.0))
            .collect();
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(bins.len());
        fft.process(&mut bins);
        Spectrum { bins, sample_rate }
    }

    /// Get the number of bins (equals the input sample count)
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check whether the spectrum holds no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Frequency of bin `i` in Hz: i/N times the sample rate
    pub fn frequency(&self, i: usize) -> f64 {
        i as f64 / self.bins.len() as f64 * self.sample_rate
    }

    /// Magnitude of bin `i`
    pub fn magnitude(&self, i: usize) -> f64 {
        self.bins[i].norm()
    }
}

/// Unscaled inverse DFT over the given bins
pub fn inverse(bins: &[Complex64]) -> Vec<Complex64> {
    let mut out = bins.to_vec();
    let mut planner = FftPlanner::<f64>::new();
    let ifft = planner.plan_fft_inverse(out.len());
    ifft.process(&mut out);
    out
}

/// Round-trip diagnostic for the transform-engine binding.
///
/// Forward-transforms `samples`, inverse-transforms the result, scales by
/// 1/N, and returns the largest absolute deviation from the original input
/// (including any residual imaginary part). Standalone check, not part of
/// the reporting pipeline.
pub fn round_trip_error(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let n = samples.len() as f64;
    let spectrum = Spectrum::forward(samples, 1.0);
    let recovered = inverse(&spectrum.bins);
    samples
        .iter()
        .zip(recovered.iter())
        .map(|(&x, c)| {
            let scaled = *c / n;
            (scaled.re - x).abs().max(scaled.im.abs())
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn one_cycle_sine(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * i as f64 / n as f64).sin())
            .collect()
    }

    #[test]
    fn test_spectrum_length_equals_input_length() {
        let spectrum = Spectrum::forward(&one_cycle_sine(16), 16.0);
        assert_eq!(spectrum.len(), 16);
    }

    #[test]
    fn test_frequency_axis_is_exact() {
        let spectrum = Spectrum::forward(&one_cycle_sine(8), 8.0);
        // i/N * rate must be exact for integer cases, not approximate
        assert_eq!(spectrum.frequency(0), 0.0);
        assert_eq!(spectrum.frequency(1), 1.0);
        assert_eq!(spectrum.frequency(2), 2.0);
        assert_eq!(spectrum.frequency(4), 4.0);
    }

    #[test]
    fn test_sine_energy_concentrates_in_bin_one() {
        // one full cycle at frequency f, sampled at 8f: dominant bin is 1
        // and its mirror is N-1
        let n = 8;
        let spectrum = Spectrum::forward(&one_cycle_sine(n), 8.0);
        for k in 2..n / 2 {
            assert!(spectrum.magnitude(1) > spectrum.magnitude(k));
        }
        assert!((spectrum.magnitude(1) - spectrum.magnitude(n - 1)).abs() < 1e-9);
        // unscaled DFT of a unit sine puts N/2 in the dominant bin
        assert!((spectrum.magnitude(1) - n as f64 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_recovers_input() {
        let samples: Vec<f64> = (0..32).map(|i| (i as f64 * 0.7).sin() + 0.3).collect();
        assert!(round_trip_error(&samples) < 1e-9);
    }

    #[test]
    fn test_round_trip_of_nothing_is_zero() {
        assert_eq!(round_trip_error(&[]), 0.0);
    }
}
