//! End-to-end generation: validate, render, shuffle, partition, emit.

use std::fs;
use std::path::Path;

use gridlane_core::errors::{ErrorInfo, GridlaneError};
use gridlane_core::rng::{derive_substream_seed, RngHandle};
use rand::RngCore;
use serde::Serialize;

use crate::config::PlanConfig;
use crate::grid::ParameterGrid;
use crate::hash::stable_hash_string;
use crate::jobs::render_jobs;
use crate::partition::{shuffle_commands, split_into_lanes};
use crate::scripts::emit_launch_plan;
use crate::template::Template;

/// File name of the persisted generation report.
pub const REPORT_FILE_NAME: &str = "generation_report.json";

/// Substream label for the lane shuffle.
const SHUFFLE_SUBSTREAM: u64 = 0;

/// Summary of one generation run, persisted alongside the batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Stable hash of the plan and the resolved seed.
    pub plan_hash: String,
    /// Master seed that drove the lane shuffle.
    pub seed: u64,
    /// Total number of jobs rendered (product of all axis lengths).
    pub total_jobs: usize,
    /// Commands per lane, in lane order.
    pub lane_sizes: Vec<usize>,
    /// Rendered job file names in enumeration order.
    pub job_files: Vec<String>,
}

/// Runs the full pipeline once over `out_dir`.
///
/// Configuration and template errors abort before anything is written. Job
/// files, lane scripts, and the top-level script land directly in `out_dir`;
/// pre-existing scripts are overwritten, so callers should start from a
/// clean directory to avoid mixing stale and fresh job sets.
pub fn generate(
    config: &PlanConfig,
    template_text: &str,
    out_dir: &Path,
) -> Result<GenerationReport, GridlaneError> {
    config.validate()?;
    let grid = ParameterGrid::new(config.axes.clone());
    let template = Template::new(template_text);
    template.validate(&grid)?;

    let seed = match config.seed_policy.seed {
        Some(seed) => seed,
        None => RngHandle::from_entropy().next_u64(),
    };

    fs::create_dir_all(out_dir).map_err(|err| {
        GridlaneError::Io(
            ErrorInfo::new("out-dir-create", err.to_string())
                .with_context("path", out_dir.display().to_string()),
        )
    })?;

    let jobs = render_jobs(
        &grid,
        &template,
        &config.naming,
        &config.interpreters.job_prefix,
        out_dir,
    )?;
    let job_files: Vec<String> = jobs.iter().map(|job| job.file_name.clone()).collect();
    let mut commands: Vec<String> = jobs.into_iter().map(|job| job.command).collect();

    let mut rng = RngHandle::from_seed(derive_substream_seed(seed, SHUFFLE_SUBSTREAM));
    shuffle_commands(&mut commands, &mut rng);
    let lanes = split_into_lanes(commands, config.lane_count)?;
    emit_launch_plan(&lanes, &config.interpreters.shell, out_dir)?;

    let report = GenerationReport {
        plan_hash: stable_hash_string(&(config, seed))?,
        seed,
        total_jobs: job_files.len(),
        lane_sizes: lanes.iter().map(|lane| lane.len()).collect(),
        job_files,
    };
    persist_report(out_dir, &report)?;
    Ok(report)
}

fn persist_report(out_dir: &Path, report: &GenerationReport) -> Result<(), GridlaneError> {
    let json = serde_json::to_string_pretty(report).map_err(|err| {
        GridlaneError::Serde(ErrorInfo::new("report-serialize", err.to_string()))
    })?;
    let path = out_dir.join(REPORT_FILE_NAME);
    fs::write(&path, json).map_err(|err| {
        GridlaneError::Io(
            ErrorInfo::new("report-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
