use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/slider_scenarios")
        .join(name)
}

#[test]
fn check_passes_on_recorded_scenario() {
    let output = Command::new(env!("CARGO_BIN_EXE_slider_trace_tool"))
        .arg("check")
        .arg("--input")
        .arg(fixture("wrap_swipe_resize.json"))
        .output()
        .expect("trace tool runs");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("wrap_swipe_resize: 13 steps ok"));
}

#[test]
fn replay_emits_a_snapshot_per_step() {
    let output = Command::new(env!("CARGO_BIN_EXE_slider_trace_tool"))
        .arg("replay")
        .arg("--input")
        .arg(fixture("wrap_swipe_resize.json"))
        .output()
        .expect("trace tool runs");
    assert!(output.status.success());

    let trace: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("replay prints json");
    let steps = trace["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 13);
    assert_eq!(trace["initial"]["schema_version"], 1);
    assert_eq!(trace["initial"]["snapshot"]["current_index"], 0);
    assert_eq!(steps[4]["state"]["schema_version"], 1);
    assert_eq!(steps[4]["state"]["snapshot"]["current_index"], 2);
    assert_eq!(steps[11]["fired_timers"], 1);
    assert_eq!(trace["mismatches"].as_array().map(Vec::len), Some(0));
}

fn record_trace(file_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}_{file_name}", std::process::id()));
    let status = Command::new(env!("CARGO_BIN_EXE_slider_trace_tool"))
        .arg("replay")
        .arg("--input")
        .arg(fixture("wrap_swipe_resize.json"))
        .arg("--output")
        .arg(&path)
        .status()
        .expect("trace tool runs");
    assert!(status.success());
    path
}

fn check_against(baseline: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_slider_trace_tool"))
        .arg("check")
        .arg("--input")
        .arg(fixture("wrap_swipe_resize.json"))
        .arg("--baseline")
        .arg(baseline)
        .output()
        .expect("trace tool runs")
}

#[test]
fn check_accepts_its_own_recorded_trace_as_baseline() {
    let baseline = record_trace("baseline_ok.json");
    let output = check_against(&baseline);
    let _ = std::fs::remove_file(&baseline);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn check_reports_drift_from_baseline() {
    let baseline = record_trace("baseline_drift.json");
    let raw = std::fs::read_to_string(&baseline).expect("baseline written");
    let mut trace: serde_json::Value = serde_json::from_str(&raw).expect("baseline json");
    // Still a consistent state, just not the one the scenario produces.
    trace["steps"][4]["state"]["snapshot"]["is_transitioning"] = serde_json::Value::Bool(false);
    std::fs::write(&baseline, trace.to_string()).expect("baseline rewritten");

    let output = check_against(&baseline);
    let _ = std::fs::remove_file(&baseline);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("baseline step 4: state differs"), "stderr: {stderr}");
}

#[test]
fn baseline_with_unknown_schema_is_rejected() {
    let baseline = record_trace("baseline_schema.json");
    let raw = std::fs::read_to_string(&baseline).expect("baseline written");
    let mut trace: serde_json::Value = serde_json::from_str(&raw).expect("baseline json");
    trace["initial"]["schema_version"] = serde_json::Value::from(7);
    std::fs::write(&baseline, trace.to_string()).expect("baseline rewritten");

    let output = check_against(&baseline);
    let _ = std::fs::remove_file(&baseline);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schema 7 is not supported"), "stderr: {stderr}");
}

#[test]
fn missing_input_flag_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_slider_trace_tool"))
        .arg("check")
        .output()
        .expect("trace tool runs");
    assert!(!output.status.success());
}
