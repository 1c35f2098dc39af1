use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn missing_package_json_fails_and_writes_nothing() {
    let ctx = TestContext::universal_project();
    fs::remove_file(ctx.project_dir().join("package.json")).unwrap();
    let before = ctx.snapshot();

    ctx.add("aws")
        .arg("--disable-telemetry")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: File not found: app/package.json"));

    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn unknown_client_project_fails() {
    let ctx = TestContext::universal_project();

    ctx.cli()
        .args(["add", "--directory", "app", "--client-project", "admin", "--provider", "aws"])
        .args(["--skip-install", "--disable-telemetry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project 'admin' not found in angular.json"));

    assert!(!ctx.exists("serverless.yml"));
}

#[test]
fn malformed_package_json_fails() {
    let ctx = TestContext::universal_project();
    fs::write(ctx.project_dir().join("package.json"), "{ not json").unwrap();

    ctx.add("gcloud")
        .arg("--disable-telemetry")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed JSON in app/package.json"));

    assert!(!ctx.exists("index.js"));
}
