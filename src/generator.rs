// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Headless signal generator session
//!
//! [`SignalGenerator`] owns the current [`ParameterSet`] and plays the part of
//! the front panel: each setter mirrors one control (slider or selector),
//! validates the new state before committing it, and [`SignalGenerator::frame`]
//! recomputes everything that is displayed in one synchronous pass.
//!
//! ```
//! use signal_generator::generator::SignalGenerator;
//! use signal_generator::parameters::ParameterSet;
//! use signal_generator::synthesis::Waveform;
//!
//! let mut generator = SignalGenerator::new(ParameterSet::default()).unwrap();
//! generator.set_waveform(Waveform::Square);
//! generator.set_frequency(4.0).unwrap();
//!
//! let frame = generator.frame().unwrap();
//! assert_eq!(frame.signal.len(), 100);
//! assert_eq!(frame.window_label, "Window from 0.0 to 1.0.");
//! ```

use log::{debug, warn};
use serde::Serialize;

use crate::error::{DomainError, Result};
use crate::parameters::ParameterSet;
use crate::spectral::{
    SpectralAnalyzer, WindowFunction, WindowedSpectrum, WindowedSpectrumAnalyzer,
};
use crate::synthesis::{time_base, Waveform, WaveformSynthesizer};
use crate::utility::NoiseGenerator;

/// Everything needed to draw the two plots for one parameter state
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub time_base: Vec<f64>,
    pub signal: Vec<f64>,
    pub spectrum: WindowedSpectrum,
    /// "Window from <start> to <end>." with bounds rounded to two decimals
    pub window_label: String,
    /// Upper limit of the time axis, the signal duration
    pub time_limit: f64,
    /// Upper limit of the frequency axis, `sample_count / (2 * duration)`
    pub frequency_limit: f64,
}

/// Mutable generator state behind the front panel
pub struct SignalGenerator {
    params: ParameterSet,
    noise: NoiseGenerator,
    noise_trace: Option<Vec<f64>>,
    analyzer: WindowedSpectrumAnalyzer,
}

impl SignalGenerator {
    /// Create a session with an unseeded noise source
    pub fn new(params: ParameterSet) -> Result<Self> {
        Self::with_noise_generator(params, NoiseGenerator::new_from_entropy())
    }

    /// Create a session drawing its noise traces from `noise`
    pub fn with_noise_generator(params: ParameterSet, mut noise: NoiseGenerator) -> Result<Self> {
        params.validate()?;
        let noise_trace = draw_trace(&mut noise, params.noise_intensity, params.sample_count)?;
        Ok(Self {
            params,
            noise,
            noise_trace,
            analyzer: WindowedSpectrumAnalyzer::new(),
        })
    }

    /// Taper applied to the window before the transform
    pub fn with_window_function(mut self, window_function: WindowFunction) -> Self {
        self.analyzer = WindowedSpectrumAnalyzer::new().with_window_function(window_function);
        self
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Current noise trace, `None` while the noise control is at zero
    pub fn noise_trace(&self) -> Option<&[f64]> {
        self.noise_trace.as_deref()
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        self.update(|p| p.frequency = frequency)
    }

    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<()> {
        self.update(|p| p.amplitude = amplitude)
    }

    pub fn set_phase(&mut self, phase: f64) -> Result<()> {
        self.update(|p| p.phase = phase)
    }

    pub fn set_waveform(&mut self, waveform: Waveform) {
        debug!("Waveform set to {}", waveform);
        self.params.waveform = waveform;
    }

    /// Changes the time span.
    ///
    /// The analysis window keeps its position relative to the signal, so a
    /// window covering the whole signal still does after the change.
    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        let old = self.params.duration;
        self.update(|p| {
            p.duration = duration;
            if duration.is_finite() && duration > 0.0 {
                let scale = duration / old;
                p.window_start = (p.window_start * scale).min(duration);
                p.window_width = (p.window_width * scale).min(duration - p.window_start);
            }
        })
    }

    /// Changes the number of samples; an active noise trace is redrawn to
    /// match the new length.
    pub fn set_sample_count(&mut self, sample_count: usize) -> Result<()> {
        self.update(|p| p.sample_count = sample_count)?;
        if self.noise_trace.is_some() {
            self.redraw_noise()?;
        }
        Ok(())
    }

    /// Changes the noise level and draws a fresh trace.
    pub fn set_noise_intensity(&mut self, intensity: f64) -> Result<()> {
        self.update(|p| p.noise_intensity = intensity)?;
        self.redraw_noise()
    }

    /// Window start slider: `window_start = fraction * duration`.
    ///
    /// The width shrinks if needed so the window still ends inside the signal.
    pub fn set_window_start_fraction(&mut self, fraction: f64) -> Result<()> {
        check_fraction("window_start", fraction)?;
        self.update(|p| {
            p.window_start = fraction * p.duration;
            p.window_width = p.window_width.min(p.duration - p.window_start);
        })
    }

    /// Window width slider: `window_width = fraction * (duration - window_start)`.
    pub fn set_window_width_fraction(&mut self, fraction: f64) -> Result<()> {
        check_fraction("window_width", fraction)?;
        self.update(|p| p.window_width = fraction * (p.duration - p.window_start))
    }

    /// Recomputes the time base, the signal and the windowed spectrum.
    pub fn frame(&self) -> Result<Frame> {
        let p = &self.params;
        let t = time_base(p.duration, p.sample_count)?;
        let signal =
            WaveformSynthesizer::from_parameters(p).synthesize(&t, self.noise_trace.as_deref())?;
        let spectrum = self
            .analyzer
            .analyze(&signal, &t, p.window_start, p.window_width)?;

        Ok(Frame {
            window_label: format!(
                "Window from {} to {}.",
                round_label(p.window_start),
                round_label(p.window_end())
            ),
            time_limit: p.duration,
            frequency_limit: p.sample_count as f64 / (2.0 * p.duration),
            time_base: t,
            signal,
            spectrum,
        })
    }

    /// Applies `change` to a copy of the parameters and commits it only if
    /// the result is valid.
    fn update<F: FnOnce(&mut ParameterSet)>(&mut self, change: F) -> Result<()> {
        let mut candidate = self.params.clone();
        change(&mut candidate);
        if let Err(err) = candidate.validate() {
            warn!("Ignoring parameter change: {}", err);
            return Err(err);
        }
        debug!("Parameters updated: {:?}", candidate);
        self.params = candidate;
        Ok(())
    }

    fn redraw_noise(&mut self) -> Result<()> {
        self.noise_trace = draw_trace(
            &mut self.noise,
            self.params.noise_intensity,
            self.params.sample_count,
        )?;
        Ok(())
    }
}

fn draw_trace(
    noise: &mut NoiseGenerator,
    intensity: f64,
    length: usize,
) -> Result<Option<Vec<f64>>> {
    if intensity == 0.0 {
        return Ok(None);
    }
    noise.generate_trace(intensity, length).map(Some)
}

/// Rounds to two decimals without padding zeros: `0.5` stays "0.5", `1` is "1.0"
fn round_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        rounded.to_string()
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::FractionOutOfRange { name, value }.into())
    }
}
