// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Analysis window selection and tapering

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, DomainError, Result, SignalError};

/// Extracts the samples whose time lies in `[start, start + width]`,
/// both ends included, keeping their original order.
///
/// # Errors
///
/// * Shape mismatch if `signal` and `time_base` differ in length
/// * Domain error if start or width is not finite or the width is negative
/// * [`DomainError::WindowStartOutOfRange`] if start lies outside
///   `[0, time_base.last()]`
/// * [`DomainError::EmptyWindow`] if no sample falls inside the window
pub fn select_window(
    signal: &[f64],
    time_base: &[f64],
    start: f64,
    width: f64,
) -> Result<Vec<f64>> {
    if signal.len() != time_base.len() {
        return Err(SignalError::ShapeMismatch {
            what: "Time base",
            expected: signal.len(),
            actual: time_base.len(),
        });
    }
    let start = ensure_finite("window_start", start)?;
    let width = ensure_finite("window_width", width)?;
    if width < 0.0 {
        return Err(DomainError::NegativeWindowWidth { width }.into());
    }
    if let Some(&duration) = time_base.last() {
        if !(0.0..=duration).contains(&start) {
            return Err(DomainError::WindowStartOutOfRange { start, duration }.into());
        }
    }

    let end = start + width;
    let selected: Vec<f64> = signal
        .iter()
        .zip(time_base)
        .filter(|&(_, &t)| t >= start && t <= end)
        .map(|(&x, _)| x)
        .collect();

    if selected.is_empty() {
        return Err(DomainError::EmptyWindow { start, end }.into());
    }
    Ok(selected)
}

/// Taper applied to the in-window samples before the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    /// Samples are used as-is
    #[default]
    Rectangular,
    Hann,
    Blackman,
}

impl WindowFunction {
    /// Parse a window function name
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "rect" | "none" => Some(WindowFunction::Rectangular),
            "hann" | "hanning" => Some(WindowFunction::Hann),
            "blackman" => Some(WindowFunction::Blackman),
            _ => None,
        }
    }

    /// Apply window function to the input samples.
    ///
    /// Fewer than two samples are returned unchanged since the tapers are
    /// defined over `len - 1` intervals.
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        let n = samples.len();
        if n < 2 || *self == WindowFunction::Rectangular {
            return samples.to_vec();
        }

        let last = (n - 1) as f64;
        samples
            .iter()
            .enumerate()
            .map(|(i, &sample)| {
                let x = i as f64 / last;
                let factor = match self {
                    WindowFunction::Rectangular => 1.0,
                    WindowFunction::Hann => 0.5 * (1.0 - (2.0 * PI * x).cos()),
                    WindowFunction::Blackman => {
                        0.42 - 0.5 * (2.0 * PI * x).cos() + 0.08 * (4.0 * PI * x).cos()
                    }
                };
                sample * factor
            })
            .collect()
    }
}
