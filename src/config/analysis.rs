// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration of the spectral analysis

use serde::{Deserialize, Serialize};

use crate::spectral::WindowFunction;

/// Spectral analysis options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Taper applied to the in-window samples: `rectangular` (default),
    /// `hann` or `blackman`
    #[serde(default)]
    pub window_function: WindowFunction,
}
