use crate::harness::TestContext;

#[test]
fn switching_provider_removes_previous_artifacts() {
    let ctx = TestContext::universal_project();

    ctx.add("aws").assert().success();
    assert!(ctx.exists("lambda.js"));

    ctx.add("gcloud").assert().success();

    assert!(!ctx.exists("lambda.js"));
    assert!(ctx.exists("index.js"));
    assert!(ctx.read("serverless.yml").contains("serverless-google-cloudfunctions"));
    assert_eq!(ctx.read_json("ng-toolkit.json")["serverless"]["provider"], "gcloud");
    assert!(
        ctx.read("src/environments/environment.serverless.ts").contains("baseHref: '/http/'")
    );
}

#[test]
fn switching_away_from_an_overridden_descriptor_removes_it() {
    let ctx = TestContext::universal_project();

    ctx.add("aws").args(["--aws-filename", "lambda.yml"]).assert().success();
    ctx.add("firebase").assert().success();

    assert!(!ctx.exists("lambda.yml"));
    assert!(!ctx.exists("lambda.js"));
    assert!(ctx.exists("functions/index.js"));
}
