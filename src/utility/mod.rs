// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Utility module for common utilities used throughout the project

pub mod noise_generator;
#[cfg(test)]
mod noise_generator_test;
pub mod sampling;

// Re-exports for use in other modules
pub use noise_generator::{generate_noise_trace, NoiseGenerator};
pub use sampling::linspace;
