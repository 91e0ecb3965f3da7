//! Launch-plan emission: lane scripts and the top-level starter script.

use std::fs;
use std::path::{Path, PathBuf};

use gridlane_core::errors::{ErrorInfo, GridlaneError};

use crate::partition::Lane;

/// File name of the top-level script that backgrounds every lane.
pub const TOP_LEVEL_SCRIPT_NAME: &str = "run.sh";

/// Paths of every emitted script.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchPlan {
    /// One script path per lane, in lane order.
    pub lane_scripts: Vec<PathBuf>,
    /// The top-level script that starts all lanes concurrently.
    pub top_level: PathBuf,
}

/// Returns the file name of the 1-based lane script.
pub fn lane_script_name(lane_number: usize) -> String {
    format!("helper_{lane_number}.sh")
}

/// Writes one executable script per lane plus the top-level starter script.
///
/// Each lane script is the shell shebang followed by the lane's commands,
/// one per line, in post-shuffle order; an empty lane yields a script with
/// only the shebang. The top-level script backgrounds each lane through the
/// configured shell so all lanes start concurrently. Existing files at the
/// target paths are overwritten without warning.
pub fn emit_launch_plan(
    lanes: &[Lane],
    shell: &str,
    out_dir: &Path,
) -> Result<LaunchPlan, GridlaneError> {
    let mut lane_scripts = Vec::with_capacity(lanes.len());
    let mut top_level_body = format!("#!{shell}\n");
    for (idx, lane) in lanes.iter().enumerate() {
        let name = lane_script_name(idx + 1);
        let mut body = format!("#!{shell}\n");
        for command in lane.commands() {
            body.push_str(command);
            body.push('\n');
        }
        let path = out_dir.join(&name);
        write_script(&path, &body)?;
        top_level_body.push_str(&format!("{shell} {name} &\n"));
        lane_scripts.push(path);
    }
    let top_level = out_dir.join(TOP_LEVEL_SCRIPT_NAME);
    write_script(&top_level, &top_level_body)?;
    Ok(LaunchPlan {
        lane_scripts,
        top_level,
    })
}

fn write_script(path: &Path, body: &str) -> Result<(), GridlaneError> {
    fs::write(path, body).map_err(|err| {
        GridlaneError::Io(
            ErrorInfo::new("script-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    mark_executable(path)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), GridlaneError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|err| {
        GridlaneError::Io(
            ErrorInfo::new("script-chmod", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), GridlaneError> {
    Ok(())
}
