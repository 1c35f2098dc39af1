use crate::harness::TestContext;
use predicates::prelude::*;

#[cfg(unix)]
#[test]
fn install_runs_in_the_project_directory() {
    let ctx = TestContext::universal_project();

    ctx.cli()
        .env("SLSGEN_NPM", "true")
        .args(["add", "--directory", "app", "--project", "app", "--provider", "aws"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Installed dependencies in app"));
}

#[cfg(unix)]
#[test]
fn failed_install_keeps_generated_files() {
    let ctx = TestContext::universal_project();

    ctx.cli()
        .env("SLSGEN_NPM", "false")
        .args(["add", "--directory", "app", "--project", "app", "--provider", "aws"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dependency install in app failed"));

    assert!(ctx.exists("serverless.yml"));
}
