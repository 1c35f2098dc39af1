use crate::harness::TestContext;
use std::fs;

#[test]
fn add_firebase_configures_hosting_and_functions() {
    let ctx = TestContext::universal_project();

    ctx.add("firebase").args(["--firebase-project", "demo-app"]).assert().success();

    let firebase = ctx.read_json("firebase.json");
    assert_eq!(firebase["hosting"]["public"], "functions/dist");
    assert_eq!(firebase["hosting"]["rewrites"][0]["source"], "**");
    assert_eq!(firebase["hosting"]["rewrites"][0]["function"], "http");

    assert_eq!(ctx.read_json(".firebaserc")["projects"]["default"], "demo-app");
    assert!(ctx.exists("functions/index.js"));
    assert!(ctx.read_json("functions/package.json")["dependencies"]["firebase-functions"].is_string());
    assert!(ctx.read(".gitignore").contains("/functions/node_modules/"));

    assert_eq!(
        ctx.script("deploy").as_deref(),
        Some("cp-cli dist/ functions/dist/ && cd functions && npm install && firebase deploy")
    );
    assert!(!ctx.exists("src/environments/environment.serverless.ts"));
    assert!(!ctx.exists("serverless.yml"));
}

#[test]
fn add_firebase_keeps_an_existing_firebaserc() {
    let ctx = TestContext::universal_project();
    let existing = r#"{"projects":{"default":"already-linked"}}"#;
    fs::write(ctx.project_dir().join(".firebaserc"), existing).unwrap();

    ctx.add("firebase").args(["--firebase-project", "other"]).assert().success();

    assert_eq!(ctx.read(".firebaserc"), existing);
}
