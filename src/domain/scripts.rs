//! Build and deploy scripts written into the package manifest.

use super::Provider;

const WEBPACK_SERVER_BUILD: &str = "webpack --config webpack.server.config.js --progress --colors";

/// Script entries for the given provider and rendering mode, in write order.
///
/// Pure: the same inputs always produce the same table.
pub fn build_scripts(
    provider: Provider,
    universal: bool,
    client_project: &str,
) -> Vec<(&'static str, String)> {
    let base_href = provider.serverless_base_path();

    let deploy = match provider {
        Provider::Firebase => {
            "cp-cli dist/ functions/dist/ && cd functions && npm install && firebase deploy"
        }
        Provider::Aws | Provider::Gcloud | Provider::None => "serverless deploy",
    };

    let (server_prod, server_serverless) = if universal {
        let serverless_target = match provider {
            Provider::Firebase => "server",
            Provider::Aws | Provider::Gcloud | Provider::None => "server:serverless",
        };
        (
            format!("ng run {}:server && {}", client_project, WEBPACK_SERVER_BUILD),
            format!("ng run {}:{} && {}", client_project, serverless_target, WEBPACK_SERVER_BUILD),
        )
    } else {
        (WEBPACK_SERVER_BUILD.to_string(), WEBPACK_SERVER_BUILD.to_string())
    };

    vec![
        ("build:browser:prod", "ng build --prod".to_string()),
        ("build:browser:serverless", format!("ng build --prod --base-href {}", base_href)),
        (
            "build:serverless",
            "npm run build:browser:serverless && npm run build:server:serverless".to_string(),
        ),
        ("build:prod", "npm run build:browser:prod && npm run build:server:prod".to_string()),
        ("server", "node local.js".to_string()),
        ("build:prod:deploy", "npm run build:prod && npm run deploy".to_string()),
        ("build:serverless:deploy", "npm run build:serverless && npm run deploy".to_string()),
        ("deploy", deploy.to_string()),
        ("build:server:prod", server_prod),
        ("build:server:serverless", server_serverless),
    ]
}

/// Transitional deploy script the Firebase branch installs before the script table is applied.
pub const FIREBASE_PROD_DEPLOY: &str =
    "npm run build:prod && cd functions && npm install && cd .. && firebase deploy";
