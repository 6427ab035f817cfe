// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).
//!
//! Waveform synthesis module
//!
//! This module builds the time base and evaluates the selected periodic
//! waveform on it, optionally mixing in a noise trace.

mod synthesizer;
mod waveform;

pub use synthesizer::{synthesize, time_base, WaveformSynthesizer};
pub use waveform::Waveform;
