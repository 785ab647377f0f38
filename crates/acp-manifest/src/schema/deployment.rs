//! Deployment section of the runtime extension.
//!
//! Describes how the agent can be run (from source via a framework entry
//! point, or from a container image) and which environment variables the
//! process needs.

use serde::{Deserialize, Serialize};

/// The `deployment` block of the runtime extension payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentSpec {
    /// Ways the agent can be deployed. Must not be empty.
    pub deployment_options: Vec<DeploymentOption>,
    /// Environment variables the agent process reads. Names are unique
    /// within a manifest.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_vars: Vec<EnvVarSpec>,
}

/// One way of deploying the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeploymentOption {
    /// Run from a source checkout through a framework entry point.
    SourceCode {
        /// Optional label distinguishing multiple options.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Path to the agent package, relative to the repository root.
        path: String,
        /// Framework-specific launch configuration.
        framework_config: FrameworkConfig,
    },
    /// Run a pre-built container image.
    Docker {
        /// Optional label distinguishing multiple options.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Container image reference.
        image: String,
    },
}

impl DeploymentOption {
    /// The optional label of this option, regardless of variant.
    pub fn name(&self) -> Option<&str> {
        match self {
            DeploymentOption::SourceCode { name, .. } | DeploymentOption::Docker { name, .. } => {
                name.as_deref()
            }
        }
    }

    /// The tag this option serializes under.
    pub fn kind(&self) -> &'static str {
        match self {
            DeploymentOption::SourceCode { .. } => "source_code",
            DeploymentOption::Docker { .. } => "docker",
        }
    }
}

/// Launch configuration for a source-code deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Orchestration framework identifier (e.g. `langgraph`).
    pub framework_type: String,
    /// Entry point as a `module:attribute` reference.
    pub graph: String,
}

/// Declaration of one environment variable the agent reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvVarSpec {
    /// Variable name as it appears in the process environment.
    pub name: String,
    /// What the variable configures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether startup must fail when the variable is unset.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl EnvVarSpec {
    /// Shorthand for building a spec, mostly useful in tests and builders.
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            required,
        }
    }
}
