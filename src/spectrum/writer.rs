use super::Spectrum;
use crate::error::SeisResult;
use std::io::Write;

/// Write a spectrum as `frequency real imag` lines.
///
/// All three fields use fixed six-digit precision. With `half` set, only
/// the first floor(N/2) bins are written, the non-redundant band of a
/// real-valued input signal.
pub fn write_spectrum<W: Write>(spectrum: &Spectrum, half: bool, sink: &mut W) -> SeisResult<()> {
    let count = if half {
        spectrum.len() / 2
    } else {
        spectrum.len()
    };
    for i in 0..count {
        let bin = &spectrum.bins[i];
        writeln!(
            sink,
            "{:.6} {:.6} {:.6}",
            spectrum.frequency(i),
            bin.re,
            bin.im
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex64;

    fn spectrum_of(n: usize, rate: f64) -> Spectrum {
        Spectrum {
            bins: (0..n)
                .map(|i| Complex64::new(i as f64, -(i as f64)))
                .collect(),
            sample_rate: rate,
        }
    }

    #[test]
    fn test_half_emits_floor_n_over_two_records() {
        for n in [8usize, 9, 1] {
            let mut out = Vec::new();
            write_spectrum(&spectrum_of(n, 100.0), true, &mut out).unwrap();
            let text = String::from_utf8(out).unwrap();
            assert_eq!(text.lines().count(), n / 2, "n = {n}");
        }
    }

    #[test]
    fn test_full_emits_all_records() {
        let mut out = Vec::new();
        write_spectrum(&spectrum_of(5, 100.0), false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 5);
    }

    #[test]
    fn test_records_have_three_parseable_fields() {
        let mut out = Vec::new();
        write_spectrum(&spectrum_of(8, 40.0), true, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for (i, line) in text.lines().enumerate() {
            let fields: Vec<f64> = line
                .split_whitespace()
                .map(|f| f.parse().unwrap())
                .collect();
            assert_eq!(fields.len(), 3);
            assert!((fields[0] - i as f64 / 8.0 * 40.0).abs() < 1e-6);
            assert_eq!(fields[1], i as f64);
            assert_eq!(fields[2], -(i as f64));
        }
    }

    #[test]
    fn test_fixed_precision_formatting() {
        let spectrum = Spectrum {
            bins: vec![Complex64::new(1.5, -2.25)],
            sample_rate: 4.0,
        };
        let mut out = Vec::new();
        write_spectrum(&spectrum, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0.000000 1.500000 -2.250000\n"
        );
    }
}
