//! Manifest document validation.
//!
//! Validation runs in two phases. The structural phase inspects the raw
//! JSON value so a missing top-level key is reported by name instead of as
//! a deserialization failure. The semantic phase runs over the typed model:
//! identifier formats, format-version compatibility, locator URLs, the
//! runtime extension, env var uniqueness, and well-formedness of the
//! embedded contract schemas against the JSON Schema meta-schema.
//!
//! Every failure is fatal; the manifest is static, so retrying would
//! reproduce the identical error.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::{AgentManifest, DeploymentOption, DeploymentSpec, EnvVarSpec, Locator};

/// Top-level keys every manifest document must carry.
pub const REQUIRED_KEYS: [&str; 4] = ["name", "skills", "locators", "extensions"];

/// Locator types with defined deployer semantics. Other types are accepted
/// but logged, since locators are an open set.
pub const KNOWN_LOCATOR_TYPES: &[&str] = &[Locator::DOCKER_IMAGE, Locator::SOURCE_CODE];

/// Check that the raw document is an object carrying every required
/// top-level key.
pub(crate) fn check_required_keys(value: &Value) -> Result<()> {
    let Some(object) = value.as_object() else {
        return Err(Error::NotAnObject {
            found: json_type_name(value),
        });
    };
    for key in REQUIRED_KEYS {
        if !object.contains_key(key) {
            return Err(Error::MissingField { field: key });
        }
    }
    Ok(())
}

/// Run the full semantic validation pass.
pub(crate) fn validate_manifest(manifest: &AgentManifest) -> Result<()> {
    validate_name(&manifest.name)?;

    if manifest.version.is_empty() {
        return Err(Error::InvalidValue {
            location: "version".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    validate_schema_version(&manifest.schema_version)?;
    validate_locators(&manifest.locators)?;

    for (index, ext) in manifest.extensions.iter().enumerate() {
        if ext.name.is_empty() {
            return Err(Error::InvalidValue {
                location: format!("extensions[{index}].name"),
                reason: "must not be empty".to_string(),
            });
        }
    }

    let runtime_count = manifest
        .extensions
        .iter()
        .filter(|ext| ext.name == crate::RUNTIME_EXTENSION)
        .count();
    if runtime_count > 1 {
        return Err(Error::InvalidValue {
            location: "extensions".to_string(),
            reason: format!(
                "runtime extension '{}' declared {runtime_count} times",
                crate::RUNTIME_EXTENSION
            ),
        });
    }

    // Raises MissingExtension when runtime_count == 0.
    let runtime = manifest.runtime()?;

    validate_deployment(&runtime.deployment)?;
    validate_env_vars(&runtime.deployment.env_vars)?;

    check_contract_schema(&runtime.acp.input, "acp.input")?;
    check_contract_schema(&runtime.acp.output, "acp.output")?;
    check_contract_schema(&runtime.acp.config, "acp.config")?;

    Ok(())
}

/// Validate the agent name format: non-empty, lowercase alphanumerics plus
/// `.`, `-`, `_`, with no leading or trailing separator.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "agent name must not be empty".to_string(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_'))
    {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "agent name must contain only lowercase alphanumeric characters, '.', '-', or '_'"
                .to_string(),
        });
    }
    let first = name.chars().next();
    let last = name.chars().next_back();
    if first.is_some_and(|c| !c.is_ascii_alphanumeric())
        || last.is_some_and(|c| !c.is_ascii_alphanumeric())
    {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "agent name must begin and end with an alphanumeric character".to_string(),
        });
    }
    Ok(())
}

/// Validate that `schema_version` parses as semver and denotes a format
/// revision this library understands (same major, and same minor while the
/// major version is 0).
fn validate_schema_version(version: &str) -> Result<()> {
    let parsed = semver::Version::parse(version).map_err(|source| Error::InvalidVersion {
        version: version.to_string(),
        source,
    })?;

    let compatible = if crate::SCHEMA_VERSION_MAJOR == 0 {
        parsed.major == 0 && parsed.minor == crate::SCHEMA_VERSION_MINOR
    } else {
        parsed.major == crate::SCHEMA_VERSION_MAJOR
    };
    if !compatible {
        return Err(Error::UnsupportedSchemaVersion {
            version: version.to_string(),
            supported: crate::SCHEMA_VERSION.to_string(),
        });
    }
    Ok(())
}

fn validate_locators(locators: &[Locator]) -> Result<()> {
    for (index, locator) in locators.iter().enumerate() {
        if locator.locator_type.is_empty() {
            return Err(Error::InvalidValue {
                location: format!("locators[{index}].type"),
                reason: "must not be empty".to_string(),
            });
        }
        if locator.url.is_empty() || locator.url.chars().any(char::is_whitespace) {
            return Err(Error::InvalidValue {
                location: format!("locators[{index}].url"),
                reason: format!("'{}' is not a usable URL", locator.url),
            });
        }
        if !KNOWN_LOCATOR_TYPES.contains(&locator.locator_type.as_str()) {
            tracing::warn!(
                "unknown locator type '{}' at locators[{}]",
                locator.locator_type,
                index
            );
        }
    }
    Ok(())
}

fn validate_deployment(spec: &DeploymentSpec) -> Result<()> {
    if spec.deployment_options.is_empty() {
        return Err(Error::InvalidValue {
            location: "deployment.deployment_options".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    for (index, option) in spec.deployment_options.iter().enumerate() {
        let location = format!("deployment.deployment_options[{index}]");
        match option {
            DeploymentOption::SourceCode {
                path,
                framework_config,
                ..
            } => {
                if path.is_empty() {
                    return Err(Error::InvalidValue {
                        location: format!("{location}.path"),
                        reason: "must not be empty".to_string(),
                    });
                }
                if framework_config.framework_type.is_empty() {
                    return Err(Error::InvalidValue {
                        location: format!("{location}.framework_config.framework_type"),
                        reason: "must not be empty".to_string(),
                    });
                }
                validate_graph_ref(
                    &framework_config.graph,
                    &format!("{location}.framework_config.graph"),
                )?;
            }
            DeploymentOption::Docker { image, .. } => {
                if image.is_empty() {
                    return Err(Error::InvalidValue {
                        location: format!("{location}.image"),
                        reason: "must not be empty".to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Entry points have the form `module:attribute`, e.g.
/// `agent_argocd.graph:graph`.
fn validate_graph_ref(graph: &str, location: &str) -> Result<()> {
    let mut parts = graph.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(module), Some(attribute), None) if !module.is_empty() && !attribute.is_empty() => {
            Ok(())
        }
        _ => Err(Error::InvalidValue {
            location: location.to_string(),
            reason: format!("entry point '{graph}' must have the form 'module:attribute'"),
        }),
    }
}

fn validate_env_vars(vars: &[EnvVarSpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, var) in vars.iter().enumerate() {
        if var.name.is_empty() {
            return Err(Error::InvalidValue {
                location: format!("deployment.env_vars[{index}].name"),
                reason: "must not be empty".to_string(),
            });
        }
        if var.name.chars().any(|c| c == '=' || c.is_whitespace()) {
            return Err(Error::InvalidValue {
                location: format!("deployment.env_vars[{index}].name"),
                reason: format!("'{}' is not a valid environment variable name", var.name),
            });
        }
        if !seen.insert(var.name.as_str()) {
            return Err(Error::DuplicateEnvVar {
                name: var.name.clone(),
            });
        }
    }
    Ok(())
}

/// Check that an embedded contract schema is itself well-formed JSON Schema
/// by validating it against the meta-schema.
fn check_contract_schema(schema: &Value, location: &str) -> Result<()> {
    jsonschema::meta::validate(schema).map_err(|e| Error::InvalidSchema {
        location: location.to_string(),
        reason: e.to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
