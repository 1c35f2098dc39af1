use crate::harness::AngularProject;
use slsgen::{InstallStatus, Provider, ServerlessOptions, add_serverless_at, status_at};
use tempfile::TempDir;

fn options(provider: Provider) -> ServerlessOptions {
    ServerlessOptions {
        directory: "app".into(),
        project: Some("app".into()),
        provider,
        skip_install: true,
        disable_telemetry: true,
        ..ServerlessOptions::default()
    }
}

#[test]
fn public_api_add_then_status_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    AngularProject::universal("app").write_to(&root.join("app"));

    let preview = add_serverless_at(root.clone(), options(Provider::Gcloud), true).unwrap();
    assert!(preview.dry_run);
    assert!(preview.changes.iter().any(|change| change.path == "app/index.js"));
    assert!(!root.join("app/index.js").exists());

    let added = add_serverless_at(root.clone(), options(Provider::Gcloud), false).unwrap();
    assert_eq!(added.install, InstallStatus::NotRun);
    assert!(added.outcome.universal);
    assert_eq!(added.outcome.dist_folder, "dist");
    assert!(root.join("app/index.js").exists());
    assert!(root.join("app/ng-toolkit.json").exists());

    let report = status_at(root.clone(), "app", None).unwrap();
    assert!(report.serverless_recorded);
    assert_eq!(report.provider(), Some(Provider::Gcloud));
    assert_eq!(report.universal_build, Some(true));
}

#[test]
fn public_api_failure_leaves_the_project_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    AngularProject::universal("app").write_to(&root.join("app"));
    std::fs::remove_file(root.join("app/src/app/app.component.ts")).unwrap();

    let err = add_serverless_at(root.clone(), options(Provider::Aws), false).unwrap_err();
    assert!(err.to_string().contains("app.component.ts"));
    assert!(!root.join("app/serverless.yml").exists());
    assert!(!root.join("app/server.ts").exists());
}

#[test]
#[serial_test::serial]
fn public_api_misconfigured_telemetry_does_not_block_the_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    AngularProject::universal("app").write_to(&root.join("app"));

    // SAFETY: tests touching the environment are serialized.
    unsafe {
        std::env::set_var("SLSGEN_TELEMETRY_API_KEY", "key");
        std::env::set_var("SLSGEN_TELEMETRY_ENDPOINT", "not a url");
    }
    let mut telemetry_on = options(Provider::Aws);
    telemetry_on.disable_telemetry = false;
    let result = add_serverless_at(root.clone(), telemetry_on, false);
    unsafe {
        std::env::remove_var("SLSGEN_TELEMETRY_API_KEY");
        std::env::remove_var("SLSGEN_TELEMETRY_ENDPOINT");
    }

    let added = result.unwrap();
    assert_eq!(added.outcome.provider, Provider::Aws);
    assert!(root.join("app/serverless.yml").exists());
}
