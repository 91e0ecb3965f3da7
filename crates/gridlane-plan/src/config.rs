//! YAML-configurable plan describing the sweep and its launch layout.

use std::collections::BTreeSet;

use gridlane_core::errors::{ErrorInfo, GridlaneError};
use serde::{Deserialize, Serialize};

use crate::grid::Axis;

/// Complete configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Sweep axes, first axis varying slowest during enumeration.
    ///
    /// An empty list is the empty cartesian product: exactly one job is
    /// generated, rendered from the template verbatim.
    pub axes: Vec<Axis>,
    /// Number of parallel execution lanes to split the batch into.
    #[serde(default = "default_lane_count")]
    pub lane_count: usize,
    /// Job file naming scheme.
    #[serde(default)]
    pub naming: JobNaming,
    /// Interpreter prefixes baked into emitted commands and scripts.
    #[serde(default)]
    pub interpreters: InterpreterConfig,
    /// Master seed policy for the lane shuffle.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_lane_count() -> usize {
    40
}

/// Naming scheme for rendered job files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobNaming {
    /// Zero-padding width for the sequential job number.
    #[serde(default = "default_width")]
    pub width: usize,
    /// File extension matching the downstream engine's input language.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_width() -> usize {
    3
}

fn default_extension() -> String {
    "jl".to_string()
}

impl Default for JobNaming {
    fn default() -> Self {
        Self {
            width: default_width(),
            extension: default_extension(),
        }
    }
}

/// Fixed interpreter invocation prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Prefix prepended to each job file name to form its invocation command.
    #[serde(default = "default_job_prefix")]
    pub job_prefix: String,
    /// Shell used for lane script shebangs and for backgrounding lanes.
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_job_prefix() -> String {
    "julia".to_string()
}

fn default_shell() -> String {
    "/bin/bash".to_string()
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            job_prefix: default_job_prefix(),
            shell: default_shell(),
        }
    }
}

/// Master seed policy. A fixed seed makes the lane shuffle reproducible;
/// without one the seed is drawn from the operating system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeedPolicy {
    /// Optional master seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PlanConfig {
    /// Parses a plan from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, GridlaneError> {
        serde_yaml::from_str(text).map_err(|err| {
            GridlaneError::Serde(ErrorInfo::new("plan-parse", err.to_string()))
        })
    }

    /// Validates the plan before any output is produced.
    ///
    /// Empty axes, duplicate axis names, unrenderable axis values, a zero
    /// lane count, and degenerate naming are all configuration errors that
    /// must abort the run before the first file is written.
    pub fn validate(&self) -> Result<(), GridlaneError> {
        if self.lane_count == 0 {
            return Err(GridlaneError::Config(
                ErrorInfo::new("lane-count-zero", "lane count must be positive")
                    .with_hint("set lane_count to at least 1"),
            ));
        }
        if self.naming.width == 0 {
            return Err(GridlaneError::Config(ErrorInfo::new(
                "zero-width",
                "job number width must be at least 1",
            )));
        }
        if self.naming.extension.is_empty() {
            return Err(GridlaneError::Config(ErrorInfo::new(
                "empty-extension",
                "job file extension must not be empty",
            )));
        }
        let mut seen = BTreeSet::new();
        for axis in &self.axes {
            if axis.is_empty() {
                return Err(GridlaneError::Config(
                    ErrorInfo::new("empty-axis", format!("axis {} has no values", axis.name))
                        .with_context("axis", axis.name.clone()),
                ));
            }
            if !seen.insert(axis.name.as_str()) {
                return Err(GridlaneError::Config(
                    ErrorInfo::new(
                        "duplicate-axis",
                        format!("axis {} is declared more than once", axis.name),
                    )
                    .with_context("axis", axis.name.clone()),
                ));
            }
            for value in &axis.values {
                value.canonical_text().map_err(|err| {
                    GridlaneError::Config(
                        err.info().clone().with_context("axis", axis.name.clone()),
                    )
                })?;
            }
        }
        Ok(())
    }
}
