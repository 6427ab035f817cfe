// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! Spectral analysis module
//!
//! This module handles spectral analysis of the synthesized signal,
//! restricted to a time window and reported as a power spectrum.

mod fft;
mod window;

pub use fft::{SpectralAnalyzer, WindowedSpectrum, WindowedSpectrumAnalyzer};
pub use window::{select_window, WindowFunction};

use crate::error::Result;

/// Create a new spectral analyzer with the given taper
pub fn create_spectral_analyzer(window_function: WindowFunction) -> Box<dyn SpectralAnalyzer> {
    Box::new(WindowedSpectrumAnalyzer::new().with_window_function(window_function))
}

/// Power spectrum and frequency axis of the samples whose time lies in
/// `[window_start, window_start + window_width]`, without tapering.
pub fn analyze(
    signal: &[f64],
    time_base: &[f64],
    window_start: f64,
    window_width: f64,
) -> Result<WindowedSpectrum> {
    WindowedSpectrumAnalyzer::new().analyze(signal, time_base, window_start, window_width)
}
