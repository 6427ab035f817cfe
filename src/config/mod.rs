// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the signal-generator project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! Configuration management for the signal generator
//!
//! This module loads, validates, and applies the configuration of the
//! generator. The configuration is backed by a YAML file and validated
//! against a JSON schema before it is deserialized.
//!
//! ## Configuration Structure
//!
//! - `generator`: the initial [`ParameterSet`] (waveform, amplitude,
//!   frequency, phase, duration, sample count, noise, analysis window)
//! - `analysis`: options of the spectral analysis, currently the taper
//!
//! ## Usage
//!
//! ```no_run
//! use signal_generator::config::Config;
//! use std::path::Path;
//!
//! // Load config from file, creates a default if not found
//! let mut config = Config::from_file(Path::new("generator.yaml")).unwrap();
//!
//! // Apply command line overrides if needed
//! config.apply_args(
//!     Some(50.0), // Frequency
//!     None,       // Amplitude
//!     None,       // Phase
//!     None,       // Duration
//!     Some(256),  // Sample count
//!     None,       // Waveform
//!     Some(0.1),  // Noise intensity
//!     None,       // Window start
//!     None,       // Window width
//!     None,       // Taper
//! );
//!
//! println!("Frequency: {}", config.generator.frequency);
//! ```

pub mod analysis;
pub mod utils;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::parameters::ParameterSet;
use crate::spectral::WindowFunction;
use crate::synthesis::Waveform;

pub use analysis::AnalysisConfig;
pub use utils::{output_config_schema, validate_specific_rules};

/// JSON schema the YAML configuration is checked against
pub(crate) const CONFIG_SCHEMA: &str = include_str!("../../resources/config.schema.json");

/// Root configuration structure for the signal generator.
///
/// Both sections fall back to their defaults when missing, so an empty file
/// is a valid configuration describing the power-on state of the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial front panel settings.
    ///
    /// If not specified in the configuration file, default values are used.
    #[serde(default)]
    pub generator: ParameterSet,

    /// Spectral analysis options.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Helper method to create a sample config file when validation fails
    fn create_sample_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let sample_path = path.with_extension("sample.yaml");
        debug!("Original path: {:?}, Sample path: {:?}", path, sample_path);

        // Create parent directories if they don't exist
        if let Some(parent) = sample_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directory: {:?}", parent);
                fs::create_dir_all(parent).with_context(|| {
                    format!(
                        "Failed to create parent directory for sample config at {:?}",
                        parent
                    )
                })?;
            }
        }

        Self::default()
            .save_to_file(&sample_path)
            .with_context(|| format!("Failed to save sample config to {:?}", sample_path))?;

        error!(
            "Sample configuration file created at {:?}\nPlease edit and rename it",
            sample_path
        );
        Ok(())
    }

    /// Load configuration from a file
    ///
    /// A missing file is created with the default configuration. A file that
    /// fails schema validation, deserialization or the additional rules of
    /// [`validate_specific_rules`] leaves a `*.sample.yaml` next to it and
    /// returns the error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(
                "Configuration file not found at {:?}, creating default",
                path
            );
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        debug!("Loading configuration from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file at {:?}", path))?;

        // First step: convert YAML to a generic Value
        let yaml_value: serde_yml::Value = serde_yml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML configuration from {:?}", path))?;

        // An empty document is a null value, treat it as an empty mapping
        let json_value = match serde_json::to_value(&yaml_value).with_context(|| {
            format!("Failed to convert YAML to JSON for validation: {:?}", path)
        })? {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            value => value,
        };

        let schema: serde_json::Value =
            serde_json::from_str(CONFIG_SCHEMA).context("Failed to parse JSON schema")?;
        let validator = jsonschema::draft202012::options()
            .should_validate_formats(true)
            .build(&schema)?;

        debug!("Validating {} configuration against schema", path.display());
        if let Err(error) = validator.validate(&json_value) {
            error!("Configuration validation error before deserialization");
            Self::create_sample_config(path)?;
            anyhow::bail!("Configuration validation failed: {}", error);
        }

        debug!("Schema validation passed, deserializing into Config structure");
        let config: Config = match serde_json::from_value(json_value) {
            Ok(config) => config,
            Err(err) => {
                error!("Configuration deserialization error: {}", err);
                if let Err(e) = Self::create_sample_config(path) {
                    error!("Failed to create sample config: {}", e);
                }
                return Err(anyhow::anyhow!(
                    "Failed to deserialize configuration from {}: {}",
                    path.display(),
                    err
                ));
            }
        };

        if let Err(err) = validate_specific_rules(&config) {
            error!("Configuration specific validation error: {}", err);
            Self::create_sample_config(path)?;
            return Err(err);
        }

        Ok(config)
    }

    /// Save the configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml =
            serde_yml::to_string(self).context("Failed to serialize configuration to YAML")?;

        let mut file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create config file at {:?}", path.as_ref()))?;

        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Validate the configuration: the parameter set must describe a
    /// computable state.
    pub fn validate(&self) -> Result<()> {
        validate_specific_rules(self)
    }

    /// Apply command line arguments to override configuration values.
    ///
    /// Only values that are explicitly provided override the existing
    /// configuration. The result is not validated here; call
    /// [`Config::validate`] afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_args(
        &mut self,
        frequency: Option<f64>,
        amplitude: Option<f64>,
        phase: Option<f64>,
        duration: Option<f64>,
        sample_count: Option<usize>,
        waveform: Option<Waveform>,
        noise_intensity: Option<f64>,
        window_start: Option<f64>,
        window_width: Option<f64>,
        window_function: Option<WindowFunction>,
    ) {
        let g = &mut self.generator;
        if let Some(frequency) = frequency {
            debug!("Overriding frequency from command line: {}", frequency);
            g.frequency = frequency;
        }
        if let Some(amplitude) = amplitude {
            debug!("Overriding amplitude from command line: {}", amplitude);
            g.amplitude = amplitude;
        }
        if let Some(phase) = phase {
            debug!("Overriding phase from command line: {}", phase);
            g.phase = phase;
        }
        if let Some(duration) = duration {
            debug!("Overriding duration from command line: {}", duration);
            g.duration = duration;
        }
        if let Some(count) = sample_count {
            debug!("Overriding sample count from command line: {}", count);
            g.sample_count = count;
        }
        if let Some(waveform) = waveform {
            debug!("Overriding waveform from command line: {}", waveform);
            g.waveform = waveform;
        }
        if let Some(noise) = noise_intensity {
            debug!("Overriding noise intensity from command line: {}", noise);
            g.noise_intensity = noise;
        }
        if let Some(start) = window_start {
            debug!("Overriding window start from command line: {}", start);
            g.window_start = start;
        }
        if let Some(width) = window_width {
            debug!("Overriding window width from command line: {}", width);
            g.window_width = width;
        }
        if let Some(window_function) = window_function {
            debug!(
                "Overriding window function from command line: {:?}",
                window_function
            );
            self.analysis.window_function = window_function;
        }
    }
}
