// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Tests for the uniform noise generator
//!
//! Covers the bounds of the generated trace, reproducibility with a fixed seed,
//! the zero-intensity case and rejection of out-of-range intensities.

use super::noise_generator::{generate_noise_trace, NoiseGenerator};
use crate::error::{DomainError, SignalError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_float_range() {
        let mut generator = NoiseGenerator::new(12345);
        for _ in 0..10_000 {
            let value = generator.random_float();
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_trace_respects_intensity_bounds() {
        let mut generator = NoiseGenerator::new(42);
        let trace = generator.generate_trace(0.35, 5000).unwrap();

        assert_eq!(trace.len(), 5000);
        assert!(trace.iter().all(|v| (-0.35..=0.35).contains(v)));

        // A uniform draw over 5000 samples covers both signs
        assert!(trace.iter().any(|&v| v > 0.0));
        assert!(trace.iter().any(|&v| v < 0.0));
    }

    #[test]
    fn test_zero_intensity_yields_zeros() {
        let mut generator = NoiseGenerator::new(1);
        let trace = generator.generate_trace(0.0, 100).unwrap();
        assert_eq!(trace.len(), 100);
        assert!(trace.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_deterministic_output_with_same_seed() {
        let mut gen1 = NoiseGenerator::new(999);
        let mut gen2 = NoiseGenerator::new(999);

        let trace1 = gen1.generate_trace(0.5, 256).unwrap();
        let trace2 = gen2.generate_trace(0.5, 256).unwrap();

        assert_eq!(trace1, trace2, "Same seed should produce identical output");
    }

    #[test]
    fn test_different_output_with_different_seeds() {
        let mut gen1 = NoiseGenerator::new(111);
        let mut gen2 = NoiseGenerator::new(222);

        let trace1 = gen1.generate_trace(0.5, 256).unwrap();
        let trace2 = gen2.generate_trace(0.5, 256).unwrap();

        assert_ne!(trace1, trace2);
    }

    #[test]
    fn test_unseeded_traces_differ() {
        let trace1 = generate_noise_trace(1.0, 128).unwrap();
        let trace2 = generate_noise_trace(1.0, 128).unwrap();
        assert_ne!(trace1, trace2);
    }

    #[test]
    fn test_out_of_range_intensity_rejected() {
        let mut generator = NoiseGenerator::new(3);

        let err = generator.generate_trace(1.5, 10).unwrap_err();
        assert_eq!(
            err,
            SignalError::Domain(DomainError::NoiseIntensityOutOfRange { intensity: 1.5 })
        );

        assert!(generator.generate_trace(-0.1, 10).is_err());
        assert!(generator.generate_trace(f64::NAN, 10).is_err());
    }

    #[test]
    fn test_empty_trace() {
        let mut generator = NoiseGenerator::new(5);
        assert!(generator.generate_trace(0.5, 0).unwrap().is_empty());
    }
}
