//! End-to-end tests for the `show` and `completions` commands

mod common;
use common::prelude::*;

#[test]
fn test_show_manifest_prints_module() {
    let fixture = TestFixture::new().with_file("src/view/Widget.js", "export class Widget\n");

    fixture
        .command()
        .arg("show")
        .arg("manifest")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "import { Widget } from \"/src/view/Widget\";",
        ))
        .stdout(predicate::str::contains("export { packages };"));

    assert!(!fixture.manifest_path().exists());
}

#[test]
fn test_show_config_without_fragments() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("show")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"routing\": {}"))
        .stdout(predicate::str::contains("\"stage\": {}"));

    assert!(!fixture.config_module_path().exists());
}

#[test]
fn test_show_rejects_unknown_module() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("show")
        .arg("index")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = cargo_bin_cmd!("autoloader");

    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("autoloader"));
}

#[test]
fn test_completions_output_file() {
    let fixture = TestFixture::new();
    let script = fixture.child("completions/autoloader.bash");

    fixture
        .command()
        .arg("completions")
        .arg("bash")
        .arg("--output")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(script.path()).unwrap();
    assert!(content.contains("autoloader"));
}
