//! Provider-specific scaffolding, one handler per provider.

use super::project_state::ProjectState;
use super::{dependencies, firebase, template_overlay};
use crate::domain::template_set::placeholders;
use crate::domain::{AppError, MergeStrategy, Provider, ServerlessOptions, TreeOp};
use crate::ports::{ProjectTree, TemplateStore};

/// Remove artifacts of earlier runs, then scaffold the selected provider.
///
/// Without a provider nothing is removed, so an earlier setup stays usable.
pub fn apply(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    state: &ProjectState,
    options: &ServerlessOptions,
) -> Result<(), AppError> {
    if options.provider != Provider::None && state.was_serverless_configured() {
        let ops = stale_artifacts(state, options);
        tracing::info!(files = ops.len(), "removing artifacts of the previous serverless setup");
        tree.apply_all(&ops)?;
    }

    match options.provider {
        Provider::Firebase => firebase::apply(tree, templates, state, options),
        Provider::Aws | Provider::Gcloud => {
            serverless_framework(tree, templates, state, options, options.provider)
        }
        Provider::None => {
            tracing::info!("no provider selected, skipping provider scaffolding");
            Ok(())
        }
    }
}

/// Deletions for the provider recorded by the previous run and for the
/// current provider. Deleting a missing file is a no-op.
pub fn stale_artifacts(state: &ProjectState, options: &ServerlessOptions) -> Vec<TreeOp> {
    let mut targets: Vec<(Provider, &ServerlessOptions)> = Vec::new();
    let previous = state.settings.previous_serverless();
    if let Some(previous) = previous.as_ref() {
        targets.push((previous.provider, previous));
    }
    targets.push((options.provider, options));

    let mut ops: Vec<TreeOp> = Vec::new();
    for (provider, recorded) in targets {
        let mut files = Vec::new();
        if let Some(entry) = provider.entry_artifact() {
            files.push(entry.to_string());
        }
        if provider.uses_serverless_framework() {
            files.push(recorded.descriptor_filename(provider).to_string());
        }
        for file in files {
            let op = TreeOp::delete(state.paths.join(&file));
            if !ops.contains(&op) {
                ops.push(op);
            }
        }
    }
    ops
}

fn serverless_framework(
    tree: &mut dyn ProjectTree,
    templates: &dyn TemplateStore,
    state: &ProjectState,
    options: &ServerlessOptions,
    provider: Provider,
) -> Result<(), AppError> {
    let Some(set) = provider.template_set() else { return Ok(()) };
    let paths = &state.paths;
    template_overlay::merge(tree, templates, set, paths, MergeStrategy::Error)?;

    if let Some(template) = provider.descriptor_template() {
        let descriptor = paths.join(options.descriptor_filename(provider));
        let source = paths.join(template);
        if source != descriptor {
            tree.apply(&TreeOp::rename(source, descriptor.clone()))?;
        }
        template_overlay::substitute(
            tree,
            &descriptor,
            placeholders::APP_NAME,
            &state.client_project.to_lowercase(),
        )?;
    }

    dependencies::add(tree, paths, &provider.dependencies())?;
    tracing::info!(provider = provider.as_str(), "scaffolded serverless framework provider");
    Ok(())
}
