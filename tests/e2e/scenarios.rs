use super::helpers::{stderr, stdout, TestProject, GO_MIT_MAPPING};
use std::fs;

#[test]
fn test_mixed_tree_table_output() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["a.go", "b.txt"]);

    let output = project.run_auditor(&["check", "repo", "--license", "MIT"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Project: repo"));
    assert!(out.contains("License: MIT"));
    assert!(out.contains("a.go: ✅"));
    assert!(out.contains("b.txt: ❌"));
    assert!(out.contains("Total files: 2"));
    assert!(out.contains("Compliant files: 1"));
    assert!(out.contains("Non-compliant files: 1"));
    assert!(out.contains("Score: 50.00%"));
}

#[test]
fn test_license_outside_mapping() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["a.go"]);

    let output = project.run_auditor(&["check", "repo", "--license", "GPL-3.0"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("a.go: ❌"));
    assert!(out.contains("Score: 0.00%"));
}

#[test]
fn test_ignore_file_prunes_vendor() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.write("ignore.json", r#"{ "patterns": ["vendor/*"] }"#);
    project.repo_files(&["vendor/lib.go", "main.go"]);

    let output = project.run_auditor(&["check", "repo", "-l", "MIT", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let files = value["files"].as_object().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files["main.go"], true);
    assert_eq!(value["summary"]["score"], 100.0);
}

#[test]
fn test_nested_paths_are_sorted_in_json() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["z.go", "docs/guide.md", "cmd/tool/main.go"]);

    let output = project.run_auditor(&[
        "check", "repo", "-l", "MIT", "-l", "CC-BY-4.0", "--format", "json",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let keys: Vec<&String> = value["files"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["cmd/tool/main.go", "docs/guide.md", "z.go"]);
    assert_eq!(value["licenses"], serde_json::json!(["CC-BY-4.0", "MIT"]));
    assert_eq!(value["summary"]["compliant_files"], 3);
}

#[test]
fn test_missing_mapping_is_fatal() {
    let project = TestProject::new();
    project.repo_files(&["a.go"]);

    let output = project.run_auditor(&["check", "repo", "--license", "MIT"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("mapping file not found"));
}

#[test]
fn test_explicit_missing_ignore_file_is_fatal() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["a.go"]);

    let output = project.run_auditor(&["check", "repo", "-l", "MIT", "--ignore", "nope.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("ignore file not found"));
}

#[test]
fn test_missing_detector_is_fatal() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["a.go"]);

    let output = project.run_auditor(&["check", "repo", "--detector", "no-such-detector-program"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("License detection failed"));
}

#[cfg(unix)]
#[test]
fn test_external_detector_output_is_used() {
    use std::os::unix::fs::PermissionsExt;

    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["a.go", "LICENSE"]);
    project.write(
        "fake-detector.sh",
        concat!(
            "#!/bin/sh\n",
            "echo '[{\"project\":\"repo\",\"matches\":",
            "[{\"license\":\"MIT\",\"confidence\":0.99,\"file\":\"LICENSE\"}]}]'\n",
        ),
    );
    let script = project.path().join("fake-detector.sh");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let output = project.run_auditor(&["check", "repo", "--detector", script.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("License: MIT"));
    assert!(out.contains("a.go: ✅"));
    assert!(out.contains("LICENSE: ❌"));
}

#[test]
fn test_fail_under_threshold() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["a.go", "b.txt"]);

    let output = project.run_auditor(&["check", "repo", "-l", "MIT", "--fail-under", "75"]);
    assert_eq!(output.status.code(), Some(1));
    // the report is still printed
    assert!(stdout(&output).contains("Score: 50.00%"));
    assert!(stderr(&output).contains("below the required 75.00%"));

    let output = project.run_auditor(&["check", "repo", "-l", "MIT", "--fail-under", "50"]);
    assert!(output.status.success());
}

#[test]
fn test_skip_root_files_and_hidden_dirs() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.repo_files(&["LICENSE", "README.md", ".github/ci.yml", "src/main.go"]);

    let output = project.run_auditor(&[
        "check",
        "repo",
        "-l",
        "MIT",
        "--skip-root-files",
        "--skip-hidden-dirs",
        "--format",
        "json",
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let keys: Vec<&String> = value["files"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["src/main.go"]);
}

#[test]
fn test_malformed_pattern_warns_and_continues() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);
    project.write("ignore.json", r#"{ "patterns": ["[broken", "*.txt"] }"#);
    project.repo_files(&["a.go", "b.txt"]);

    let output = project.run_auditor(&["check", "repo", "-l", "MIT"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("Invalid ignore pattern '[broken'"));
    let out = stdout(&output);
    assert!(out.contains("a.go: ✅"));
    assert!(!out.contains("b.txt"));
}

#[test]
fn test_output_file_and_tool_config() {
    let project = TestProject::new();
    project.write("policy/mapping.json", GO_MIT_MAPPING);
    project.write(
        "license-audit.toml",
        "format = \"json\"\nmapping = \"policy/mapping.json\"\n",
    );
    project.repo_files(&["a.go"]);

    let output = project.run_auditor(&["check", "repo", "-l", "MIT", "--output", "report.json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());

    let written = fs::read_to_string(project.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["files"]["a.go"], true);
}

#[test]
fn test_target_must_be_a_directory() {
    let project = TestProject::new().with_mapping(GO_MIT_MAPPING);

    let output = project.run_auditor(&["check", "does-not-exist", "-l", "MIT"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("is not a directory"));
}
