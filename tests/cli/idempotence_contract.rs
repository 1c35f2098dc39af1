use crate::harness::TestContext;
use std::fs;

#[test]
fn second_run_with_the_same_provider_is_stable() {
    let ctx = TestContext::universal_project();

    ctx.add("aws").assert().success();
    let scripts = ctx.read_json("package.json")["scripts"].clone();
    let descriptor = ctx.read("serverless.yml");

    ctx.add("aws").assert().success();

    assert_eq!(ctx.read_json("package.json")["scripts"], scripts);
    assert_eq!(ctx.read("serverless.yml"), descriptor);
    let component = ctx.read("src/app/app.component.ts");
    assert_eq!(component.matches("environment.baseHref").count(), 1);
    assert_eq!(component.matches("implements OnInit").count(), 1);
}

#[test]
fn recorded_universal_setup_skips_the_overlay() {
    let ctx = TestContext::universal_project();
    fs::write(ctx.project_dir().join("ng-toolkit.json"), r#"{ "universal": true }"#).unwrap();
    fs::write(ctx.project_dir().join("webpack.server.config.js"), "// __distFolder__\n").unwrap();

    ctx.add("aws").assert().success();

    assert!(!ctx.exists("server.ts"));
    assert!(!ctx.exists("server_static.ts"));
    assert_eq!(ctx.read_json("ng-toolkit.json")["universal"], true);
}
