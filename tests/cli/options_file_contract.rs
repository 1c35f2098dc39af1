use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn options_file_drives_the_run() {
    let ctx = TestContext::universal_project();
    fs::write(
        ctx.root().join("slsgen.toml"),
        r#"directory = "app"
project = "app"
provider = "gcloud"
skipInstall = true

[serverless.gcloud]
filename = "functions.yml"
"#,
    )
    .unwrap();

    ctx.cli().args(["add", "--options", "slsgen.toml"]).assert().success();

    assert!(ctx.exists("functions.yml"));
    assert!(ctx.exists("index.js"));
    assert_eq!(
        ctx.script("build:browser:serverless").as_deref(),
        Some("ng build --prod --base-href /http/")
    );
}

#[test]
fn flags_override_the_options_file() {
    let ctx = TestContext::universal_project();
    fs::write(
        ctx.root().join("slsgen.toml"),
        "directory = \"app\"\nproject = \"app\"\nprovider = \"gcloud\"\nskipInstall = true\n",
    )
    .unwrap();

    ctx.cli().args(["add", "--options", "slsgen.toml", "--provider", "aws"]).assert().success();

    assert!(ctx.exists("lambda.js"));
    assert!(!ctx.exists("index.js"));
}

#[test]
fn malformed_options_file_is_rejected() {
    let ctx = TestContext::universal_project();
    fs::write(ctx.root().join("slsgen.toml"), "provider = [").unwrap();

    ctx.cli()
        .args(["add", "--options", "slsgen.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed options file"));
}
