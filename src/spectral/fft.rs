// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! FFT implementation for windowed spectral analysis

use log::debug;
use rustfft::{num_complex::Complex64, FftPlanner};
use serde::Serialize;

use super::window::{select_window, WindowFunction};
use crate::error::{ensure_all_finite, DomainError, Result};
use crate::utility::linspace;

/// Trait for implementing spectral analysis over a time window
pub trait SpectralAnalyzer: Send + Sync {
    /// Analyze the part of `signal` whose time base lies in
    /// `[window_start, window_start + window_width]`
    fn analyze(
        &self,
        signal: &[f64],
        time_base: &[f64],
        window_start: f64,
        window_width: f64,
    ) -> Result<WindowedSpectrum>;
}

/// Data resulting from spectral analysis of one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowedSpectrum {
    /// Power per bin, `|X|² / in_trans_count`
    pub power: Vec<f64>,
    /// Frequency axis, one value per bin
    pub frequencies: Vec<f64>,
    /// Number of samples that fell inside the window
    pub in_trans_count: usize,
}

impl WindowedSpectrum {
    /// Index, frequency and power of the strongest bin
    pub fn peak(&self) -> Option<(usize, f64, f64)> {
        self.power
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, &p)| (i, self.frequencies[i], p))
    }

    /// Sum of the power over all bins
    pub fn total_power(&self) -> f64 {
        self.power.iter().sum()
    }
}

/// DFT-based power spectrum over a time window
pub struct WindowedSpectrumAnalyzer {
    window_function: WindowFunction,
}

impl WindowedSpectrumAnalyzer {
    /// Create an analyzer that transforms the in-window samples untouched
    pub fn new() -> Self {
        Self {
            window_function: WindowFunction::Rectangular,
        }
    }

    /// Taper the in-window samples with `window_function` before the transform
    pub fn with_window_function(mut self, window_function: WindowFunction) -> Self {
        self.window_function = window_function;
        self
    }

    pub fn window_function(&self) -> WindowFunction {
        self.window_function
    }

    /// Compute FFT of the input samples
    fn compute_fft(&self, samples: &[f64]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> =
            samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(samples.len());
        fft.process(&mut buffer);

        buffer
    }

    /// Frequency axis: `count` points from `window_start` to
    /// `count / (2 * (window_start + window_width))`.
    fn frequency_axis(window_start: f64, window_width: f64, count: usize) -> Result<Vec<f64>> {
        let window_end = window_start + window_width;
        if count > 1 && window_end == 0.0 {
            return Err(DomainError::DegenerateFrequencyAxis { count }.into());
        }
        let stop = count as f64 / (2.0 * window_end);
        Ok(linspace(window_start, stop, count))
    }
}

impl Default for WindowedSpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralAnalyzer for WindowedSpectrumAnalyzer {
    fn analyze(
        &self,
        signal: &[f64],
        time_base: &[f64],
        window_start: f64,
        window_width: f64,
    ) -> Result<WindowedSpectrum> {
        let windowed = select_window(signal, time_base, window_start, window_width)?;
        let in_trans_count = windowed.len();

        debug!(
            "Analyzing {} of {} samples in window [{}, {}] with {:?} taper",
            in_trans_count,
            signal.len(),
            window_start,
            window_start + window_width,
            self.window_function
        );

        let tapered = self.window_function.apply(&windowed);
        let spectrum = self.compute_fft(&tapered);

        // X·conj(X) is real, keep only the magnitude
        let n = in_trans_count as f64;
        let power: Vec<f64> = spectrum.iter().map(|x| x.norm_sqr() / n).collect();
        ensure_all_finite("Power spectrum", &power)?;
        let frequencies = Self::frequency_axis(window_start, window_width, in_trans_count)?;

        Ok(WindowedSpectrum {
            power,
            frequencies,
            in_trans_count,
        })
    }
}
