use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn status_reports_a_fresh_project() {
    let ctx = TestContext::universal_project();

    ctx.cli()
        .args(["status", "--directory", "app", "--client-project", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("serverless recorded: no"))
        .stdout(predicate::str::contains("server rendering:    yes"))
        .stdout(predicate::str::contains("provider:            none recorded"));
}

#[test]
fn status_reports_the_configured_provider() {
    let ctx = TestContext::universal_project();
    ctx.add("aws").assert().success();

    ctx.cli()
        .args(["status", "--directory", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("provider:            aws"))
        .stdout(predicate::str::contains("descriptor:          app/serverless.yml (service: app)"))
        .stdout(predicate::str::contains("✅ Serverless scaffolding is set up"));
}
