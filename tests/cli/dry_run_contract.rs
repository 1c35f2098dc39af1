use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_lists_changes_without_writing() {
    let ctx = TestContext::universal_project();
    let before = ctx.snapshot();

    ctx.add("aws")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run:"))
        .stdout(predicate::str::contains("create   app/lambda.js"))
        .stdout(predicate::str::contains("update   app/package.json"))
        .stdout(predicate::str::contains("Added serverless scaffolding").not());

    assert_eq!(ctx.snapshot(), before);
}
