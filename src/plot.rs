//! Optional chart of the magnitude spectrum
//!
//! Decorative companion to the textual report: reads the emitted
//! frequency/real/imaginary records back and renders the magnitudes as a
//! PNG line chart.

use crate::error::{SeisError, SeisResult};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Chart dimensions and colors
#[derive(Clone, Debug)]
pub struct PlotStyle {
    /// Chart width in pixels
    pub width: u32,
    /// Chart height in pixels
    pub height: u32,
    /// Background fill color
    pub background: RGBColor,
    /// Series line color
    pub line: RGBColor,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 400,
            background: RGBColor(10, 10, 10),
            line: BLUE,
        }
    }
}

/// Render (frequency, magnitude) points as a PNG line chart
pub fn render_magnitudes_png(
    points: &[(f64, f64)],
    max_frequency: f64,
    style: &PlotStyle,
) -> SeisResult<Vec<u8>> {
    if points.is_empty() {
        return Err(SeisError::PlotError("no records to plot".to_string()));
    }
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background).map_err(plot_err)?;

        let x_max = if max_frequency > 0.0 {
            max_frequency
        } else {
            points.iter().map(|p| p.0).fold(1.0, f64::max)
        };
        let y_max = points.iter().map(|p| p.1).fold(1e-3, f64::max);

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(plot_err)?;
        chart
            .configure_mesh()
            .light_line_style(&WHITE.mix(0.1))
            .draw()
            .map_err(plot_err)?;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &style.line))
            .map_err(plot_err)?;
        root.present().map_err(plot_err)?;
    }
    encode_png(&buffer, style.width, style.height)
}

/// Read a spectrum report back and chart it to a PNG file.
/// `max_frequency` bounds the x axis; pass the Nyquist frequency to show
/// the full non-redundant band.
pub fn plot_report<P: AsRef<Path>, Q: AsRef<Path>>(
    report_path: P,
    max_frequency: f64,
    png_path: Q,
) -> SeisResult<()> {
    let text = fs::read_to_string(report_path.as_ref())?;
    let points = parse_report(&text)?;
    let png = render_magnitudes_png(&points, max_frequency, &PlotStyle::default())?;
    fs::write(png_path.as_ref(), png)?;
    Ok(())
}

fn parse_report(text: &str) -> SeisResult<Vec<(f64, f64)>> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let mut fields = line.split_whitespace().map(str::parse::<f64>);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(Ok(freq)), Some(Ok(re)), Some(Ok(im))) => {
                points.push((freq, (re * re + im * im).sqrt()));
            }
            _ => {
                return Err(SeisError::ParseError(format!(
                    "report line {} is not a frequency/real/imag record",
                    lineno + 1
                )));
            }
        }
    }
    Ok(points)
}

fn plot_err<E: std::fmt::Debug>(err: E) -> SeisError {
    SeisError::PlotError(format!("{err:?}"))
}

fn encode_png(buffer: &[u8], width: u32, height: u32) -> SeisResult<Vec<u8>> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| SeisError::PlotError("failed to allocate image buffer".to_string()))?;
    let mut output = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| SeisError::PlotError(e.to_string()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_magnitudes() {
        let points = parse_report("0.000000 3.000000 -4.000000\n1.000000 0.000000 0.000000\n")
            .unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[0].1 - 5.0).abs() < 1e-12);
        assert_eq!(points[1], (1.0, 0.0));
    }

    #[test]
    fn test_parse_report_rejects_garbage() {
        assert!(parse_report("not a record\n").is_err());
        assert!(parse_report("1.0 2.0\n").is_err());
    }

    #[test]
    fn test_render_returns_png_bytes() {
        let points: Vec<(f64, f64)> = (0..32).map(|i| (i as f64, (i as f64).sin().abs())).collect();
        let png = render_magnitudes_png(&points, 16.0, &PlotStyle::default()).unwrap();
        assert!(!png.is_empty());
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_render_rejects_empty_input() {
        assert!(render_magnitudes_png(&[], 1.0, &PlotStyle::default()).is_err());
    }
}
