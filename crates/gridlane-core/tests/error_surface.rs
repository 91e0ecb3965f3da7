use gridlane_core::errors::{ErrorInfo, GridlaneError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("axis", "t_max")
        .with_context("reason", "example")
}

#[test]
fn config_error_surface() {
    let err = GridlaneError::Config(sample_info("empty-axis", "axis has no values"));
    assert_eq!(err.info().code, "empty-axis");
    assert!(err.info().context.contains_key("axis"));
}

#[test]
fn template_error_surface() {
    let err = GridlaneError::Template(sample_info("unknown-marker", "marker has no axis"));
    assert_eq!(err.info().code, "unknown-marker");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn io_error_surface() {
    let err = GridlaneError::Io(sample_info("job-write", "permission denied"));
    assert_eq!(err.info().code, "job-write");
}

#[test]
fn rng_error_surface() {
    let err = GridlaneError::Rng(sample_info("bad-seed", "invalid seed"));
    assert_eq!(err.info().code, "bad-seed");
}

#[test]
fn serde_error_surface() {
    let err = GridlaneError::Serde(sample_info("report-serialize", "schema mismatch"));
    assert_eq!(err.info().code, "report-serialize");
}

#[test]
fn error_display_includes_context_and_hint() {
    let err = GridlaneError::Config(
        ErrorInfo::new("lane-count-zero", "lane count must be positive")
            .with_context("lane_count", "0")
            .with_hint("set lane_count to at least 1"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("config error"));
    assert!(rendered.contains("lane-count-zero"));
    assert!(rendered.contains("lane_count=0"));
    assert!(rendered.contains("set lane_count to at least 1"));
}

#[test]
fn error_round_trips_through_json() {
    let err = GridlaneError::Template(sample_info("unknown-marker", "##QX## has no axis"));
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: GridlaneError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
