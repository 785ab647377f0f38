//! Agent manifest document model and validation.
//!
//! An agent manifest is a static UTF-8 JSON document describing an
//! externally-implemented conversational agent: locators for obtaining it,
//! deployment options, environment variable requirements, declared
//! capabilities, and the JSON Schema contract for its input and output
//! messages. This crate models the document as typed data, validates it,
//! and ships the canonical ArgoCD agent manifest as a compiled-in document.

pub mod builtin;
pub mod contract;
pub mod error;
pub mod schema;
pub mod validation;

/// Canonical filename for agent manifest documents.
pub const MANIFEST_FILENAME: &str = "agent.json";

/// Version of the manifest format this library implements.
pub const SCHEMA_VERSION: &str = "0.1.0";

pub(crate) const SCHEMA_VERSION_MAJOR: u64 = 0;
pub(crate) const SCHEMA_VERSION_MINOR: u64 = 1;

/// Name of the extension block carrying the deployment and ACP sections.
pub const RUNTIME_EXTENSION: &str = "oasf.agntcy.org/features/runtime/manifest";

pub use contract::{
    ContractValidator, InputState, Message, MessageKind, OutputState, Transcript,
};
pub use error::{Error, Result};
pub use schema::{
    AcpSpec, AgentManifest, Capabilities, DeploymentOption, DeploymentSpec, EnvVarSpec,
    Extension, FrameworkConfig, Locator, RuntimeSpec, Skill,
};
