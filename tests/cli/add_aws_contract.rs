use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_aws_scaffolds_a_universal_project() {
    let ctx = TestContext::universal_project();

    ctx.add("aws")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Added serverless scaffolding (aws) to app"))
        .stdout(predicate::str::contains("create   app/serverless.yml"));

    assert_eq!(ctx.script("deploy").as_deref(), Some("serverless deploy"));
    assert_eq!(
        ctx.script("build:serverless").as_deref(),
        Some("npm run build:browser:serverless && npm run build:server:serverless")
    );
    assert_eq!(
        ctx.script("build:browser:serverless").as_deref(),
        Some("ng build --prod --base-href /production/")
    );

    let descriptor = ctx.read("serverless.yml");
    assert!(descriptor.starts_with("service: app"));
    assert!(!descriptor.contains("__appName__"));
    assert!(ctx.exists("lambda.js"));
    assert!(!ctx.exists("serverless-aws.yml"));

    let server = ctx.read("server.ts");
    assert!(!server.contains("__distBrowserFolder__"));
    assert!(!server.contains("__distServerFolder__"));
    assert!(ctx.exists("local.js"));
    assert!(!ctx.read("webpack.server.config.js").contains("__distFolder__"));
}

#[test]
fn add_aws_patches_environment_and_app_entry() {
    let ctx = TestContext::universal_project();

    ctx.add("aws").assert().success();

    let serverless_env = ctx.read("src/environments/environment.serverless.ts");
    assert!(serverless_env.contains("production: true"));
    assert!(serverless_env.contains("baseHref: '/production/'"));
    assert!(ctx.read("src/environments/environment.ts").contains("baseHref: '/'"));

    let component = ctx.read("src/app/app.component.ts");
    assert!(component.contains("implements OnInit"));
    assert!(component.contains("@Inject(PLATFORM_ID)"));
    assert!(component.contains("environment.baseHref"));
    assert!(component.contains("from '../environments/environment'"));

    let settings = ctx.read_json("ng-toolkit.json");
    assert_eq!(settings["serverless"]["provider"], "aws");
    assert_eq!(settings["serverless"]["clientProject"], "app");
}

#[test]
fn add_aws_honors_descriptor_filename_override() {
    let ctx = TestContext::universal_project();

    ctx.add("aws").args(["--aws-filename", "lambda.yml"]).assert().success();

    assert!(ctx.exists("lambda.yml"));
    assert!(!ctx.exists("serverless.yml"));
}
