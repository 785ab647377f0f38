//! Top-level agent manifest document.
//!
//! The manifest describes an externally-implemented agent: where a deployer
//! can obtain it (locators), how it can be run (deployment options), which
//! environment variables it needs, and the JSON Schema contract for its
//! input and output messages. It carries no behavior of its own; it is
//! authored once and read-only at runtime.
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "agent_argocd",
//!   "version": "0.1.0",
//!   "schema_version": "0.1.0",
//!   "description": "Conversational agent for ArgoCD operations",
//!   "authors": ["CNOE Contributors"],
//!   "created_at": "2025-05-06T12:00:00Z",
//!   "skills": [
//!     { "category_uid": 1, "class_uid": 10201 }
//!   ],
//!   "locators": [
//!     { "type": "docker-image", "url": "ghcr.io/cnoe-io/agent-argocd:latest" }
//!   ],
//!   "extensions": [
//!     {
//!       "name": "oasf.agntcy.org/features/runtime/manifest",
//!       "version": "v0.0.0",
//!       "data": { "deployment": { "...": "..." }, "acp": { "...": "..." } }
//!     }
//!   ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::acp::{AcpSpec, Capabilities};
use crate::schema::deployment::{DeploymentOption, DeploymentSpec, EnvVarSpec};
use crate::validation;

/// Complete agent manifest document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentManifest {
    /// Agent identifier (lowercase alphanumerics plus `.`, `-`, `_`).
    pub name: String,
    /// Agent version string.
    pub version: String,
    /// Version of the manifest format itself; must be valid semver and
    /// compatible with [`crate::SCHEMA_VERSION`].
    pub schema_version: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered list of authors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Authoring timestamp (RFC 3339, UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Classification identifiers for discovery.
    pub skills: Vec<Skill>,
    /// Where a deployer can obtain the agent.
    pub locators: Vec<Locator>,
    /// Named extension blocks; one of them is the runtime block holding the
    /// deployment and ACP sections.
    pub extensions: Vec<Extension>,
}

/// A skill classification identifier.
///
/// The numeric uids are the stable keys; names are optional display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name of the skill category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Numeric category identifier.
    pub category_uid: u64,
    /// Display name of the skill class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Numeric class identifier.
    pub class_uid: u64,
}

/// A reference telling a deployer where to obtain the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    /// Locator kind, e.g. `docker-image` or `source-code`.
    #[serde(rename = "type")]
    pub locator_type: String,
    /// Plain URL string (image reference or repository URL).
    pub url: String,
}

impl Locator {
    /// Docker image locator type.
    pub const DOCKER_IMAGE: &'static str = "docker-image";
    /// Source repository locator type.
    pub const SOURCE_CODE: &'static str = "source-code";
}

/// A named extension block with open JSON payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    /// Extension identifier.
    pub name: String,
    /// Extension revision.
    pub version: String,
    /// Extension-specific payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Typed view of the runtime extension payload: the deployment section plus
/// the ACP contract section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Deployment options and environment variable requirements.
    pub deployment: DeploymentSpec,
    /// Capabilities and input/output/config schema contract.
    pub acp: AcpSpec,
}

impl AgentManifest {
    /// Parse and validate a manifest from a JSON string.
    ///
    /// Parsing is deterministic: the same document always produces the same
    /// structure. Validation covers the required top-level keys, the name
    /// and version formats, locator URLs, the runtime extension, env var
    /// uniqueness, and well-formedness of the embedded contract schemas.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parse and validate a manifest from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        validation::check_required_keys(&value)?;
        let manifest: Self = serde_json::from_value(value)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serialize the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }

    /// Run the full semantic validation pass over this manifest.
    pub fn validate(&self) -> Result<()> {
        validation::validate_manifest(self)
    }

    /// Look up an extension block by name.
    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.iter().find(|ext| ext.name == name)
    }

    /// Extract the typed runtime extension payload.
    ///
    /// Fails if the runtime extension is absent or its payload does not
    /// deserialize into [`RuntimeSpec`].
    pub fn runtime(&self) -> Result<RuntimeSpec> {
        let ext = self
            .extension(crate::RUNTIME_EXTENSION)
            .ok_or(Error::MissingExtension {
                name: crate::RUNTIME_EXTENSION,
            })?;
        serde_json::from_value(ext.data.clone()).map_err(|e| Error::InvalidValue {
            location: format!("extensions['{}'].data", crate::RUNTIME_EXTENSION),
            reason: e.to_string(),
        })
    }

    /// All environment variable specs declared by the runtime extension.
    pub fn env_vars(&self) -> Result<Vec<EnvVarSpec>> {
        Ok(self.runtime()?.deployment.env_vars)
    }

    /// The subset of environment variable specs with `required = true`.
    pub fn required_env_vars(&self) -> Result<Vec<EnvVarSpec>> {
        let mut vars = self.env_vars()?;
        vars.retain(|v| v.required);
        Ok(vars)
    }

    /// Deployment options declared by the runtime extension.
    pub fn deployment_options(&self) -> Result<Vec<DeploymentOption>> {
        Ok(self.runtime()?.deployment.deployment_options)
    }

    /// Declared execution-mode capabilities.
    pub fn capabilities(&self) -> Result<Capabilities> {
        Ok(self.runtime()?.acp.capabilities)
    }
}
