//! Status command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_status(
    root: Option<PathBuf>,
    directory: &str,
    client_project: Option<&str>,
) -> Result<(), AppError> {
    let root = super::resolve_root(root)?;
    let report = crate::app::api::status_at(root, directory, client_project)?;

    println!("Project directory: {}", report.directory);
    println!("  universal recorded:  {}", yes_no(report.universal_recorded));
    println!("  serverless recorded: {}", yes_no(report.serverless_recorded));
    match report.universal_build {
        Some(universal) => println!("  server rendering:    {}", yes_no(universal)),
        None => println!("  server rendering:    unknown"),
    }
    match report.provider() {
        Some(provider) => println!("  provider:            {}", provider.as_str()),
        None => println!("  provider:            none recorded"),
    }
    if let Some(descriptor) = &report.descriptor {
        println!(
            "  descriptor:          {} (service: {})",
            descriptor.path,
            descriptor.service.as_deref().unwrap_or("?")
        );
    }

    if report.serverless_recorded {
        println!("✅ Serverless scaffolding is set up");
    } else {
        println!("Serverless scaffolding has not been added yet");
    }
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
