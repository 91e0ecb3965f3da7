//! Sweep job generation and launch-plan emission.
//!
//! One template plus a multi-dimensional parameter grid becomes a batch of
//! rendered job files, a set of lane scripts that each run their share of the
//! batch sequentially, and one top-level script that starts every lane as a
//! backgrounded process.

mod config;
mod grid;
mod hash;
mod jobs;
mod partition;
mod pipeline;
mod scripts;
mod template;

pub use config::{InterpreterConfig, JobNaming, PlanConfig, SeedPolicy};
pub use grid::{Axis, AxisValue, GridEnumerator, JobId, ParameterGrid, ParameterPoint};
pub use hash::{stable_hash_string, to_canonical_json_bytes};
pub use jobs::{render_jobs, RenderedJob};
pub use partition::{shuffle_commands, split_into_lanes, Lane};
pub use pipeline::{generate, GenerationReport, REPORT_FILE_NAME};
pub use scripts::{emit_launch_plan, lane_script_name, LaunchPlan, TOP_LEVEL_SCRIPT_NAME};
pub use template::Template;
