// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Time base construction and waveform evaluation

use std::f64::consts::TAU;

use log::debug;

use super::Waveform;
use crate::error::{ensure_all_finite, ensure_finite, DomainError, Result, SignalError};
use crate::parameters::ParameterSet;
use crate::utility::linspace;

/// Builds the time base: `sample_count` points evenly spaced over
/// `[0, duration]`, both ends included.
///
/// # Errors
///
/// Returns a domain error for fewer than two samples or a duration that is
/// not strictly positive and finite.
pub fn time_base(duration: f64, sample_count: usize) -> Result<Vec<f64>> {
    let duration = ensure_finite("duration", duration)?;
    if sample_count < 2 {
        return Err(DomainError::TooFewSamples {
            count: sample_count,
        }
        .into());
    }
    if duration <= 0.0 {
        return Err(DomainError::NonPositiveDuration { duration }.into());
    }
    Ok(linspace(0.0, duration, sample_count))
}

/// Evaluates one waveform family with fixed amplitude, frequency and phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformSynthesizer {
    waveform: Waveform,
    amplitude: f64,
    frequency: f64,
    phase: f64,
}

impl WaveformSynthesizer {
    pub fn new(waveform: Waveform, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            waveform,
            amplitude,
            frequency,
            phase,
        }
    }

    /// Takes waveform, amplitude, frequency and phase from a parameter set
    pub fn from_parameters(params: &ParameterSet) -> Self {
        Self::new(
            params.waveform,
            params.amplitude,
            params.frequency,
            params.phase,
        )
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Samples `amplitude * waveform(2π·frequency·t + phase)` at every point
    /// of `time_base`, then adds `noise` element-wise when supplied.
    ///
    /// # Errors
    ///
    /// * Domain error if amplitude, frequency or phase is not finite
    /// * Shape mismatch if the noise trace length differs from the time base
    /// * [`DomainError::NonFiniteResult`] if a sample overflows
    pub fn synthesize(&self, time_base: &[f64], noise: Option<&[f64]>) -> Result<Vec<f64>> {
        ensure_finite("amplitude", self.amplitude)?;
        ensure_finite("frequency", self.frequency)?;
        ensure_finite("phase", self.phase)?;

        if let Some(noise) = noise {
            if noise.len() != time_base.len() {
                return Err(SignalError::ShapeMismatch {
                    what: "Noise trace",
                    expected: time_base.len(),
                    actual: noise.len(),
                });
            }
        }

        debug!(
            "Synthesizing {} {} samples (A={}, f={}, phi={}, noise={})",
            time_base.len(),
            self.waveform,
            self.amplitude,
            self.frequency,
            self.phase,
            noise.is_some()
        );

        let mut signal: Vec<f64> = time_base
            .iter()
            .map(|&t| {
                self.amplitude * self.waveform.evaluate(TAU * self.frequency * t + self.phase)
            })
            .collect();

        if let Some(noise) = noise {
            for (sample, n) in signal.iter_mut().zip(noise) {
                *sample += n;
            }
        }

        ensure_all_finite("Signal", &signal)?;
        Ok(signal)
    }
}

/// Free-function form of [`WaveformSynthesizer::synthesize`].
pub fn synthesize(
    waveform: Waveform,
    amplitude: f64,
    frequency: f64,
    time_base: &[f64],
    phase: f64,
    noise: Option<&[f64]>,
) -> Result<Vec<f64>> {
    WaveformSynthesizer::new(waveform, amplitude, frequency, phase).synthesize(time_base, noise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_base_shape() {
        let t = time_base(2.0, 5).unwrap();
        assert_eq!(t, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_time_base_rejects_bad_inputs() {
        assert_eq!(
            time_base(1.0, 1),
            Err(SignalError::Domain(DomainError::TooFewSamples { count: 1 }))
        );
        assert!(time_base(0.0, 10).is_err());
        assert!(time_base(-1.0, 10).is_err());
        assert!(time_base(f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_sine_quarter_period_reaches_amplitude() {
        // 2π·2·0.125 = π/2
        let t = time_base(1.0, 9).unwrap();
        let signal = synthesize(Waveform::Sine, 3.0, 2.0, &t, 0.0, None).unwrap();
        assert_eq!(signal.len(), 9);
        assert_eq!(signal[0], 0.0);
        assert_relative_eq!(signal[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_phase_shifts_waveform() {
        let t = [0.0];
        let signal = synthesize(
            Waveform::Sine,
            1.0,
            1.0,
            &t,
            std::f64::consts::FRAC_PI_2,
            None,
        )
        .unwrap();
        assert_relative_eq!(signal[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_square_only_takes_amplitude_values() {
        let t = time_base(1.0, 257).unwrap();
        let signal = synthesize(Waveform::Square, 2.5, 3.0, &t, 0.3, None).unwrap();
        assert!(signal.iter().all(|&v| v == 2.5 || v == -2.5));
        assert!(signal.contains(&2.5));
        assert!(signal.contains(&-2.5));
    }

    #[test]
    fn test_sawtooth_bounded_by_amplitude() {
        let t = time_base(1.0, 200).unwrap();
        let signal = synthesize(Waveform::Sawtooth, 2.0, 4.0, &t, 0.0, None).unwrap();
        assert!(signal.iter().all(|&v| (-2.0..2.0).contains(&v)));
        assert_relative_eq!(signal[0], -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noise_is_added_elementwise() {
        let t = time_base(1.0, 4).unwrap();
        let noise = [0.1, -0.2, 0.3, -0.4];
        let clean = synthesize(Waveform::Square, 1.0, 1.0, &t, 0.0, None).unwrap();
        let noisy = synthesize(Waveform::Square, 1.0, 1.0, &t, 0.0, Some(&noise)).unwrap();
        for ((c, n), v) in clean.iter().zip(noise).zip(&noisy) {
            assert_relative_eq!(c + n, *v);
        }
    }

    #[test]
    fn test_noise_length_mismatch() {
        let t = time_base(1.0, 10).unwrap();
        let noise = vec![0.0; 9];
        let err = synthesize(Waveform::Sine, 1.0, 1.0, &t, 0.0, Some(&noise)).unwrap_err();
        assert_eq!(
            err,
            SignalError::ShapeMismatch {
                what: "Noise trace",
                expected: 10,
                actual: 9,
            }
        );
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let params = ParameterSet {
            waveform: Waveform::Sawtooth,
            frequency: 7.0,
            phase: 1.2,
            ..Default::default()
        };
        let t = time_base(params.duration, params.sample_count).unwrap();
        let synthesizer = WaveformSynthesizer::from_parameters(&params);
        assert_eq!(
            synthesizer.synthesize(&t, None).unwrap(),
            synthesizer.synthesize(&t, None).unwrap()
        );
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let t = time_base(1.0, 10).unwrap();
        assert!(synthesize(Waveform::Sine, 1.0, f64::NAN, &t, 0.0, None).is_err());
    }

    #[test]
    fn test_overflowing_phase_is_reported() {
        // 2π·f·t overflows to infinity for the later samples
        let t = time_base(1.0, 10).unwrap();
        let err = synthesize(Waveform::Sine, 1.0, 1e308, &t, 0.0, None).unwrap_err();
        assert!(matches!(
            err,
            SignalError::Domain(DomainError::NonFiniteResult { what: "Signal", .. })
        ));
    }
}
