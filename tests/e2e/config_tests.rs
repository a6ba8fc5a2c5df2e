use super::helpers::{stderr, stdout, TestProject};

#[test]
fn test_init_then_validate() {
    let project = TestProject::new();

    let init_output = project.run_auditor(&["init"]);
    assert!(init_output.status.success(), "stderr: {}", stderr(&init_output));
    assert!(project.path().join("mapping.json").exists());
    assert!(project.path().join("ignore.json").exists());

    let validate_output = project.run_auditor(&["config", "--validate"]);
    assert!(validate_output.status.success());
    assert!(stdout(&validate_output).contains("Configuration is valid"));
}

#[test]
fn test_init_does_not_overwrite() {
    let project = TestProject::new();
    assert!(project.run_auditor(&["init"]).status.success());

    let again = project.run_auditor(&["init"]);
    assert!(!again.status.success());
    assert!(stderr(&again).contains("--force"));

    let forced = project.run_auditor(&["--quiet", "init", "--force"]);
    assert!(forced.status.success());
    assert!(stdout(&forced).is_empty());
}

#[test]
fn test_config_show_defaults() {
    let project = TestProject::new();

    let output = project.run_auditor(&["config", "--show"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["format"], "table");
    assert_eq!(value["nesting"], "one-level");
}

#[test]
fn test_validate_without_mapping_fails() {
    let project = TestProject::new();

    let output = project.run_auditor(&["config", "--validate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("validation failed"));
}

#[test]
fn test_config_requires_a_flag() {
    let project = TestProject::new();

    let output = project.run_auditor(&["config"]);
    assert!(!output.status.success());
}
