// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Signal generator library
//!
//! This library simulates a laboratory signal generator: it synthesizes a
//! sampled waveform from a set of front panel parameters and computes the
//! power spectrum of a user-selected time window of that waveform.
//!
//! ```
//! use signal_generator::spectral::analyze;
//! use signal_generator::synthesis::{synthesize, time_base, Waveform};
//!
//! let t = time_base(1.0, 100)?;
//! let signal = synthesize(Waveform::Sine, 1.0, 1.0, &t, 0.0, None)?;
//! let spectrum = analyze(&signal, &t, 0.0, 1.0)?;
//! assert_eq!(spectrum.in_trans_count, 100);
//! # Ok::<(), signal_generator::SignalError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod parameters;
pub mod spectral;
pub mod synthesis;
pub mod utility;

pub use error::{DomainError, SignalError};
pub use generator::{Frame, SignalGenerator};
pub use parameters::ParameterSet;
