//! ms2fft Command Line Interface
//!
//! Reads a trace recording and writes a half-spectrum report per trace.

use clap::Parser;
use log::info;
use ms2fft::processor::Pipeline;
use ms2fft::{plot, reader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ms2fft")]
#[command(about = "Frequency-domain report generator for seismic recordings", long_about = None)]
#[command(version)]
struct Cli {
    /// Input recording file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output report file
    #[arg(short, long, value_name = "FILE", default_value = "fftoutput.txt")]
    output: PathBuf,

    /// Emit the full spectrum instead of the non-redundant half
    #[arg(long)]
    full: bool,

    /// Write demeaned samples, one per line, to this file
    #[arg(long, value_name = "FILE")]
    dump_samples: Option<PathBuf>,

    /// Render a PNG chart of the magnitude spectrum to this file
    #[arg(long, value_name = "FILE")]
    plot: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    info!("ms2fft {}", ms2fft::VERSION);

    // Open the recording first; the output file is only created once the
    // input validated as a readable container.
    let mut input = reader::from_file(&cli.input)?;
    let mut sink = BufWriter::new(File::create(&cli.output)?);
    let mut dump = match &cli.dump_samples {
        Some(path) => Some(BufWriter::new(File::create(path)?)),
        None => None,
    };

    let pipeline = Pipeline::new().full_spectrum(cli.full);
    let report = pipeline.run(
        input.as_mut(),
        &mut sink,
        dump.as_mut().map(|w| w as &mut dyn Write),
    )?;
    sink.flush()?;
    if let Some(mut writer) = dump {
        writer.flush()?;
    }

    info!(
        "wrote {} bin(s) for {} trace(s) to {}",
        report.bins_written,
        report.traces_processed,
        cli.output.display()
    );

    if let Some(png) = &cli.plot {
        plot::plot_report(&cli.output, report.max_sample_rate / 2.0, png)?;
        info!("rendered spectrum chart to {}", png.display());
    }

    Ok(())
}
