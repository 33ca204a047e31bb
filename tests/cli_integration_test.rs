// Integration tests for the carecompare binary

use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FACILITY_A: &str = indoc! {r#"
    {
        "id": "fac-1",
        "name": "Mercy General",
        "average_rating": 4.5,
        "total_reviews": 100,
        "services_list": ["Emergency", "Radiology", "Maternity"],
        "specialists": ["Cardiologist"],
        "inventory": {"infrastructure": {"inpatient_beds": 20}}
    }
"#};

const FACILITY_B: &str = indoc! {r#"
    {
        "id": "fac-2",
        "name": "Valley Clinic",
        "average_rating": 3.0,
        "total_reviews": 10,
        "services_list": ["Emergency"]
    }
"#};

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("a.json"), FACILITY_A).unwrap();
    fs::write(dir.join("b.json"), FACILITY_B).unwrap();
    fs::write(dir.join("route_a.json"), r#"{"duration": 600, "distance": 4200}"#).unwrap();
    fs::write(dir.join("route_b.json"), "null").unwrap();
}

fn carecompare(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_carecompare"));
    cmd.current_dir(dir).env_remove("CARECOMPARE_CONFIG");
    cmd
}

#[test]
fn test_compare_json_output() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = carecompare(temp.path())
        .args([
            "compare",
            "a.json",
            "b.json",
            "--route-a",
            "route_a.json",
            "--route-b",
            "route_b.json",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["facilityA"], "Mercy General");
    assert_eq!(value["detailedResults"][1]["key"], "travel_time");
    assert_eq!(value["detailedResults"][1]["winner"], "A");
    assert_eq!(value["rows"][1]["cellB"]["kind"], "enable_location");
    assert!(value["reasonsB"].as_array().unwrap().is_empty());
}

#[test]
fn test_compare_respects_config_file() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());
    fs::write(
        temp.path().join(".carecompare.toml"),
        "[thresholds]\nrating = 2.0\n",
    )
    .unwrap();

    let output = carecompare(temp.path())
        .args(["compare", "a.json", "b.json", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["detailedResults"][0]["winner"], "TIE");
}

#[test]
fn test_compare_terminal_output_to_file() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    carecompare(temp.path())
        .args(["compare", "a.json", "b.json", "--pending-routes", "-o", "report.txt"])
        .assert()
        .success();

    let report = fs::read_to_string(temp.path().join("report.txt")).unwrap();
    assert!(report.contains("Mercy General vs Valley Clinic"));
    assert!(report.contains("Loading..."));
    assert!(!report.contains('\u{1b}'));
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_report_write_fails_command() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = carecompare(temp.path())
        .args(["compare", "a.json", "b.json", "-f", "json", "-o", "/dev/full"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write comparison report"));
}

#[test]
fn test_missing_facility_file_fails() {
    let temp = TempDir::new().unwrap();

    let output = carecompare(temp.path())
        .args(["compare", "missing.json", "b.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let temp = TempDir::new().unwrap();

    carecompare(temp.path()).arg("init").assert().success();
    assert!(temp.path().join(".carecompare.toml").exists());

    carecompare(temp.path()).arg("init").assert().failure();
    carecompare(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_show_config_prints_defaults() {
    let temp = TempDir::new().unwrap();

    let output = carecompare(temp.path()).arg("show-config").output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("[thresholds]"));
    assert!(text.contains("[weights]"));
}
