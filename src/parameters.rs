// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! The parameter set driving one synthesis and analysis pass
//!
//! A [`ParameterSet`] is owned by whoever drives the generator (the headless
//! [`crate::generator::SignalGenerator`], the CLI, or a caller embedding the
//! engine) and is passed by reference into the pure engine functions.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, DomainError, Result};
use crate::synthesis::Waveform;

/// Relative slack allowed when checking that the window ends inside the
/// signal, so that `start + (duration - start)` never trips on rounding.
const WINDOW_END_TOLERANCE: f64 = 1e-9;

/// Complete set of user-adjustable generator controls.
///
/// Every field has a default matching the generator's power-on state:
/// a 1 Hz unit sine over one second, sampled 100 times, noiseless, with
/// the analysis window covering the whole signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Peak amplitude of the waveform
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,

    /// Frequency in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Phase offset in radians
    #[serde(default)]
    pub phase: f64,

    /// Time span of the generated signal in seconds
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Number of samples over `[0, duration]`
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Waveform family
    #[serde(default)]
    pub waveform: Waveform,

    /// Additive uniform noise level in `[0, 1]`
    #[serde(default)]
    pub noise_intensity: f64,

    /// Start of the analysis window in seconds
    #[serde(default)]
    pub window_start: f64,

    /// Width of the analysis window in seconds
    #[serde(default = "default_duration")]
    pub window_width: f64,
}

fn default_amplitude() -> f64 {
    1.0
}

fn default_frequency() -> f64 {
    1.0
}

fn default_duration() -> f64 {
    1.0
}

fn default_sample_count() -> usize {
    100
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            phase: 0.0,
            duration: default_duration(),
            sample_count: default_sample_count(),
            waveform: Waveform::default(),
            noise_intensity: 0.0,
            window_start: 0.0,
            window_width: default_duration(),
        }
    }
}

impl ParameterSet {
    /// End of the analysis window, `window_start + window_width`
    pub fn window_end(&self) -> f64 {
        self.window_start + self.window_width
    }

    /// Checks every parameter against its domain.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] found: non-finite values, fewer than
    /// two samples, a non-positive duration, a noise intensity outside `[0, 1]`,
    /// or an analysis window that does not fit inside `[0, duration]`.
    pub fn validate(&self) -> Result<()> {
        ensure_finite("amplitude", self.amplitude)?;
        ensure_finite("frequency", self.frequency)?;
        ensure_finite("phase", self.phase)?;
        ensure_finite("duration", self.duration)?;
        ensure_finite("noise_intensity", self.noise_intensity)?;
        ensure_finite("window_start", self.window_start)?;
        ensure_finite("window_width", self.window_width)?;

        if self.sample_count < 2 {
            return Err(DomainError::TooFewSamples {
                count: self.sample_count,
            }
            .into());
        }
        if self.duration <= 0.0 {
            return Err(DomainError::NonPositiveDuration {
                duration: self.duration,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&self.noise_intensity) {
            return Err(DomainError::NoiseIntensityOutOfRange {
                intensity: self.noise_intensity,
            }
            .into());
        }
        if !(0.0..=self.duration).contains(&self.window_start) {
            warn!(
                "Rejecting window start {} for duration {}",
                self.window_start, self.duration
            );
            return Err(DomainError::WindowStartOutOfRange {
                start: self.window_start,
                duration: self.duration,
            }
            .into());
        }
        if self.window_width < 0.0 {
            return Err(DomainError::NegativeWindowWidth {
                width: self.window_width,
            }
            .into());
        }
        if self.window_end() > self.duration * (1.0 + WINDOW_END_TOLERANCE) {
            warn!(
                "Rejecting window [{}, {}] for duration {}",
                self.window_start,
                self.window_end(),
                self.duration
            );
            return Err(DomainError::WindowEndOutOfRange {
                start: self.window_start,
                end: self.window_end(),
                duration: self.duration,
            }
            .into());
        }

        Ok(())
    }
}
