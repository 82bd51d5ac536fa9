use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn eyemark_cmd() -> Command {
    Command::cargo_bin("eyemark").expect("binary exists")
}

const SCRIPT: &str = r#"{
    "version": 1,
    "ops": [
        { "op": "set_tool", "tool": "rectangle" },
        { "op": "begin_stroke", "at": { "x": 10.0, "y": 10.0 } },
        { "op": "commit_stroke", "at": { "x": 50.0, "y": 50.0 } }
    ]
}"#;

#[test]
fn help_prints_usage() {
    eyemark_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Headless renderer for eye-diagram annotation sessions",
        ));
}

#[test]
fn script_argument_is_required() {
    eyemark_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replays_a_session_to_png() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("session.json");
    let output_path = temp.path().join("out.png");
    std::fs::write(&script_path, SCRIPT).unwrap();

    eyemark_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 3 ops"));

    let png = std::fs::read(&output_path).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn honors_an_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("session.json");
    let config_path = temp.path().join("config.toml");
    let output_path = temp.path().join("out.png");
    std::fs::write(&script_path, SCRIPT).unwrap();
    std::fs::write(
        &config_path,
        "[surface]\nwidth = 64\nheight = 64\npixel_scale = 1\n",
    )
    .unwrap();

    eyemark_cmd()
        .args(["--script", script_path.to_str().unwrap()])
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--output", output_path.to_str().unwrap()])
        .assert()
        .success();

    let png = std::fs::read(&output_path).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn malformed_script_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let script_path = temp.path().join("broken.json");
    std::fs::write(&script_path, "{ not json").unwrap();

    eyemark_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--script", script_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("annotation script"));
}

#[test]
fn missing_script_file_fails_with_path() {
    eyemark_cmd()
        .args(["--script", "/nonexistent/session.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/session.json"));
}
