// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

use approx::assert_abs_diff_eq;
use signal_generator::spectral::{analyze, SpectralAnalyzer, WindowedSpectrumAnalyzer};
use signal_generator::synthesis::{synthesize, time_base, Waveform, WaveformSynthesizer};
use signal_generator::utility::{generate_noise_trace, linspace, NoiseGenerator};
use signal_generator::{DomainError, ParameterSet, SignalError, SignalGenerator};

/// Default power-on parameters: unit 1 Hz sine, one second, 100 samples
fn power_on() -> ParameterSet {
    ParameterSet {
        amplitude: 1.0,
        frequency: 1.0,
        duration: 1.0,
        sample_count: 100,
        phase: 0.0,
        waveform: Waveform::Sine,
        noise_intensity: 0.0,
        window_start: 0.0,
        window_width: 1.0,
    }
}

#[test]
fn test_power_on_scenario() {
    let p = power_on();
    let t = time_base(p.duration, p.sample_count).unwrap();
    assert_eq!(t, linspace(0.0, 1.0, 100));

    let signal = WaveformSynthesizer::from_parameters(&p)
        .synthesize(&t, None)
        .unwrap();
    assert_eq!(signal.len(), 100);
    assert_eq!(signal[0], 0.0);
    // t[25] = 25/99 is the sample closest to a quarter period
    assert_abs_diff_eq!(signal[25], 1.0, epsilon = 2e-3);

    let spectrum = analyze(&signal, &t, p.window_start, p.window_width).unwrap();
    assert_eq!(spectrum.in_trans_count, 100);
    assert_eq!(spectrum.power.len(), 100);
    assert!(spectrum.power.iter().all(|&x| x >= 0.0 && x.is_finite()));
}

#[test]
fn test_generator_session_matches_engine_calls() {
    let generator = SignalGenerator::new(power_on()).unwrap();
    let frame = generator.frame().unwrap();

    let t = time_base(1.0, 100).unwrap();
    let signal = synthesize(Waveform::Sine, 1.0, 1.0, &t, 0.0, None).unwrap();
    let spectrum = WindowedSpectrumAnalyzer::new()
        .analyze(&signal, &t, 0.0, 1.0)
        .unwrap();

    assert_eq!(frame.time_base, t);
    assert_eq!(frame.signal, signal);
    assert_eq!(frame.spectrum, spectrum);
    assert_eq!(frame.window_label, "Window from 0.0 to 1.0.");
}

#[test]
fn test_noisy_signal_stays_within_noise_band() {
    let t = time_base(1.0, 500).unwrap();
    let clean = synthesize(Waveform::Square, 1.0, 3.0, &t, 0.0, None).unwrap();

    let noise = NoiseGenerator::new(77).generate_trace(0.3, t.len()).unwrap();
    let noisy = synthesize(Waveform::Square, 1.0, 3.0, &t, 0.0, Some(&noise)).unwrap();

    for (c, n) in clean.iter().zip(&noisy) {
        assert!((n - c).abs() <= 0.3 + 1e-12);
    }

    let unseeded = generate_noise_trace(0.0, t.len()).unwrap();
    assert!(unseeded.iter().all(|&v| v == 0.0));
}

#[test]
fn test_noise_trace_of_wrong_length_is_rejected() {
    let t = time_base(1.0, 100).unwrap();
    let noise = generate_noise_trace(0.5, 99).unwrap();
    assert!(matches!(
        synthesize(Waveform::Sine, 1.0, 1.0, &t, 0.0, Some(&noise)),
        Err(SignalError::ShapeMismatch {
            expected: 100,
            actual: 99,
            ..
        })
    ));
}

#[test]
fn test_zero_width_window_off_grid() {
    let t = time_base(1.0, 100).unwrap();
    let signal = synthesize(Waveform::Sawtooth, 1.0, 2.0, &t, 0.0, None).unwrap();

    // 0.5 falls between 49/99 and 50/99
    let err = analyze(&signal, &t, 0.5, 0.0).unwrap_err();
    assert_eq!(
        err,
        SignalError::Domain(DomainError::EmptyWindow {
            start: 0.5,
            end: 0.5
        })
    );
    assert_eq!(err.exit_code(), 2);
}
