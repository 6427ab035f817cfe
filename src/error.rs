// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Error types shared by the synthesis and analysis engine

use thiserror::Error;

/// Invalid parameter combination rejected by the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Sample count must be at least 2, got {count}")]
    TooFewSamples { count: usize },

    #[error("Duration must be strictly positive, got {duration}")]
    NonPositiveDuration { duration: f64 },

    #[error("Window start {start} lies outside [0, {duration}]")]
    WindowStartOutOfRange { start: f64, duration: f64 },

    #[error("Window [{start}, {end}] extends past the signal duration {duration}")]
    WindowEndOutOfRange { start: f64, end: f64, duration: f64 },

    #[error("Window width must not be negative, got {width}")]
    NegativeWindowWidth { width: f64 },

    #[error("Window [{start}, {end}] contains no samples")]
    EmptyWindow { start: f64, end: f64 },

    #[error("Noise intensity must lie in [0, 1], got {intensity}")]
    NoiseIntensityOutOfRange { intensity: f64 },

    #[error("Slider fraction for {name} must lie in [0, 1], got {value}")]
    FractionOutOfRange { name: &'static str, value: f64 },

    #[error("Parameter '{name}' is not a finite number")]
    NonFinite { name: &'static str },

    /// Parameters were finite but the computation overflowed
    #[error("{what} contains {count} non-finite values")]
    NonFiniteResult { what: &'static str, count: usize },

    /// The frequency axis divides by `window_start + window_width`
    #[error("Frequency axis is undefined for {count} samples in a window ending at 0")]
    DegenerateFrequencyAxis { count: usize },
}

/// Errors surfaced by the engine to its caller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Invalid parameters: {0}")]
    Domain(#[from] DomainError),

    #[error("{what} has {actual} samples but the signal has {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl SignalError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SignalError::Domain(_) => 2,
            SignalError::ShapeMismatch { .. } => 3,
        }
    }
}

/// Convenience alias used across the engine
pub type Result<T> = std::result::Result<T, SignalError>;

/// Rejects NaN and infinite values for the named parameter
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { name }.into())
    }
}

/// Rejects a computed trace holding NaN or infinite values
pub(crate) fn ensure_all_finite(what: &'static str, values: &[f64]) -> Result<()> {
    let count = values.iter().filter(|v| !v.is_finite()).count();
    if count == 0 {
        Ok(())
    } else {
        Err(DomainError::NonFiniteResult { what, count }.into())
    }
}
