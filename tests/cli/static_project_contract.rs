use crate::harness::TestContext;

#[test]
fn static_project_skips_environment_and_app_entry_patches() {
    let ctx = TestContext::static_project();
    let component = ctx.read("src/app/app.component.ts");

    ctx.add("aws").assert().success();

    assert!(!ctx.exists("src/environments/environment.serverless.ts"));
    assert_eq!(ctx.read("src/app/app.component.ts"), component);
    assert_eq!(
        ctx.script("build:server:prod").as_deref(),
        Some("webpack --config webpack.server.config.js --progress --colors")
    );

    let server = ctx.read("server.ts");
    assert!(server.contains("dist/app"));
    assert!(!server.contains("__distBrowserFolder__"));
}

#[test]
fn unknown_provider_runs_no_provider_branch() {
    let ctx = TestContext::static_project();

    ctx.add("azure").assert().success();

    assert!(!ctx.exists("serverless.yml"));
    assert!(!ctx.exists("lambda.js"));
    assert!(ctx.exists("local.js"));
    assert_eq!(ctx.script("deploy").as_deref(), Some("serverless deploy"));
}
