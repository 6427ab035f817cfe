// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Main entry point for the signal generator simulator

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use signal_generator::config::{output_config_schema, Config};
use signal_generator::spectral::WindowFunction;
use signal_generator::synthesis::Waveform;
use signal_generator::{Frame, SignalError, SignalGenerator};

/// Laboratory signal generator with windowed spectral analysis
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML configuration holding the initial parameters (created with
    /// defaults if it does not exist)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Frequency in Hz
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Peak amplitude
    #[arg(short, long)]
    amplitude: Option<f64>,

    /// Phase offset in radians
    #[arg(short, long)]
    phase: Option<f64>,

    /// Time span of the signal in seconds
    #[arg(short, long)]
    duration: Option<f64>,

    /// Number of samples over the time span
    #[arg(short, long)]
    samples: Option<usize>,

    /// Waveform: Sine, Sawtooth, anything else selects Square
    #[arg(short, long)]
    waveform: Option<String>,

    /// Noise intensity (0.0 to 1.0)
    #[arg(short, long)]
    noise: Option<f64>,

    /// Start of the analysis window in seconds
    #[arg(long)]
    window_start: Option<f64>,

    /// Width of the analysis window in seconds
    #[arg(long)]
    window_width: Option<f64>,

    /// Taper applied before the transform (rectangular, hann, blackman)
    #[arg(long)]
    taper: Option<String>,

    /// Print the whole frame as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the JSON schema of the configuration file and exit
    #[arg(long, default_value_t = false)]
    show_config_schema: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        let code = e
            .downcast_ref::<SignalError>()
            .map(SignalError::exit_code)
            .unwrap_or(1);
        process::exit(code);
    }
}

fn run(args: Args) -> Result<()> {
    if args.show_config_schema {
        return output_config_schema();
    }

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let taper = match &args.taper {
        Some(label) => Some(
            WindowFunction::from_label(label)
                .with_context(|| format!("Unknown taper '{}'", label))?,
        ),
        None => None,
    };

    config.apply_args(
        args.frequency,
        args.amplitude,
        args.phase,
        args.duration,
        args.samples,
        args.waveform.as_deref().map(Waveform::from_label),
        args.noise,
        args.window_start,
        args.window_width,
        taper,
    );
    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    // The first frame is computed explicitly once the session exists
    let generator = SignalGenerator::new(config.generator.clone())?
        .with_window_function(config.analysis.window_function);
    let frame = generator.frame()?;
    info!(
        "Computed {} samples, {} in window",
        frame.signal.len(),
        frame.spectrum.in_trans_count
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
    } else {
        print_summary(&config, &frame);
    }

    Ok(())
}

fn print_summary(config: &Config, frame: &Frame) {
    let p = &config.generator;
    println!("Signal Generator");
    println!("----------------");
    println!("- Waveform: {}", p.waveform);
    println!("- Amplitude: {}", p.amplitude);
    println!("- Frequency: {} Hz", p.frequency);
    println!("- Phase: {:.3} rad", p.phase);
    println!("- Duration: {} s ({} samples)", p.duration, p.sample_count);
    println!("- Noise intensity: {}", p.noise_intensity);
    println!("- Taper: {:?}", config.analysis.window_function);
    println!("{}", frame.window_label);
    println!();

    let spectrum = &frame.spectrum;
    println!("Spectrum:");
    println!("- Samples in window: {}", spectrum.in_trans_count);
    println!(
        "- Frequency axis: {:.3} to {:.3} (plot limit {:.3})",
        spectrum.frequencies.first().copied().unwrap_or_default(),
        spectrum.frequencies.last().copied().unwrap_or_default(),
        frame.frequency_limit
    );
    println!("- Total power: {:.6}", spectrum.total_power());
    if let Some((bin, frequency, power)) = spectrum.peak() {
        println!(
            "- Peak: bin {} at {:.3} with power {:.6}",
            bin, frequency, power
        );
    }
}
