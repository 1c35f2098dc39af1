use serde_json::{Map, Value};

use super::{AppError, Provider, ServerlessOptions};

/// Tool settings record file name, inside the project directory.
pub const TOOL_SETTINGS_FILE: &str = "ng-toolkit.json";

const UNIVERSAL_KEY: &str = "universal";
const SERVERLESS_KEY: &str = "serverless";

/// Persisted record of which generators already ran against a project.
///
/// Entries written by other generators are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolSettings {
    entries: Map<String, Value>,
}

impl ToolSettings {
    pub fn parse(path: &str, content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value =
            serde_json::from_str(content).map_err(|err| AppError::malformed_json(path, err))?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(AppError::malformed_json(path, "expected a JSON object at the root")),
        }
    }

    /// Whether server-side rendering setup has already been applied.
    pub fn universal_done(&self) -> bool {
        self.entries.get(UNIVERSAL_KEY).is_some_and(is_truthy)
    }

    /// Whether serverless scaffolding was set up by a previous run.
    pub fn serverless_done(&self) -> bool {
        self.entries.get(SERVERLESS_KEY).is_some_and(is_truthy)
    }

    /// Options recorded by the previous serverless run, if they can be read back.
    pub fn previous_serverless(&self) -> Option<ServerlessOptions> {
        let value = self.entries.get(SERVERLESS_KEY).filter(|value| value.is_object())?;
        serde_json::from_value(value.clone()).ok()
    }

    /// Provider used by the previous serverless run.
    pub fn previous_provider(&self) -> Option<Provider> {
        self.previous_serverless().map(|options| options.provider)
    }

    /// Merge this invocation's options into the record.
    pub fn record_serverless(&mut self, options: &ServerlessOptions) -> Result<(), AppError> {
        let value = serde_json::to_value(options)
            .map_err(|err| AppError::malformed_json(TOOL_SETTINGS_FILE, err))?;
        self.entries.insert(SERVERLESS_KEY.to_string(), value);
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String, AppError> {
        let mut out = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| AppError::malformed_json(TOOL_SETTINGS_FILE, err))?;
        out.push('\n');
        Ok(out)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
