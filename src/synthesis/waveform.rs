// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Periodic basis functions

use std::f64::consts::{PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Waveform families offered by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Waveform {
    #[default]
    Sine,
    /// +1 over the first half of each period, -1 over the second
    Square,
    /// Rising ramp from -1 to 1 over each period
    Sawtooth,
}

impl Waveform {
    /// Resolves a selector label.
    ///
    /// "Sine" and "Sawtooth" are recognised (case-insensitively); any other
    /// label selects [`Waveform::Square`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "sine" => Waveform::Sine,
            "sawtooth" => Waveform::Sawtooth,
            _ => Waveform::Square,
        }
    }

    /// Label shown on the selector
    pub fn label(&self) -> &'static str {
        match self {
            Waveform::Sine => "Sine",
            Waveform::Square => "Square",
            Waveform::Sawtooth => "Sawtooth",
        }
    }

    /// Evaluates the unit-amplitude waveform at phase angle `theta` (radians).
    pub fn evaluate(&self, theta: f64) -> f64 {
        match self {
            Waveform::Sine => theta.sin(),
            Waveform::Square => {
                if theta.rem_euclid(TAU) < PI {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => theta.rem_euclid(TAU) / PI - 1.0,
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_from_label_falls_back_to_square() {
        assert_eq!(Waveform::from_label("Sine"), Waveform::Sine);
        assert_eq!(Waveform::from_label("sawtooth"), Waveform::Sawtooth);
        assert_eq!(Waveform::from_label("Square"), Waveform::Square);
        assert_eq!(Waveform::from_label("Triangle"), Waveform::Square);
        assert_eq!(Waveform::from_label(""), Waveform::Square);
    }

    #[test]
    fn test_label_round_trip() {
        for waveform in [Waveform::Sine, Waveform::Square, Waveform::Sawtooth] {
            assert_eq!(Waveform::from_label(waveform.label()), waveform);
        }
    }

    #[test]
    fn test_sine_values() {
        assert_eq!(Waveform::Sine.evaluate(0.0), 0.0);
        assert_relative_eq!(Waveform::Sine.evaluate(FRAC_PI_2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_square_duty_cycle() {
        assert_eq!(Waveform::Square.evaluate(0.0), 1.0);
        assert_eq!(Waveform::Square.evaluate(PI - 1e-9), 1.0);
        assert_eq!(Waveform::Square.evaluate(PI), -1.0);
        assert_eq!(Waveform::Square.evaluate(TAU - 1e-9), -1.0);
        assert_eq!(Waveform::Square.evaluate(TAU), 1.0);
        // Negative angles wrap into the same period
        assert_eq!(Waveform::Square.evaluate(-0.5), -1.0);
    }

    #[test]
    fn test_sawtooth_ramp() {
        assert_relative_eq!(Waveform::Sawtooth.evaluate(0.0), -1.0, epsilon = 1e-12);
        assert_relative_eq!(Waveform::Sawtooth.evaluate(PI), 0.0, epsilon = 1e-12);
        assert_relative_eq!(Waveform::Sawtooth.evaluate(1.5 * PI), 0.5, epsilon = 1e-12);
        assert_relative_eq!(Waveform::Sawtooth.evaluate(TAU + FRAC_PI_2), -0.5, epsilon = 1e-12);
        assert!(Waveform::Sawtooth.evaluate(TAU - 1e-9) < 1.0);
    }
}
