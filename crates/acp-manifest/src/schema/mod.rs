//! Schema definitions for agent manifest documents.
//!
//! A manifest is a single UTF-8 JSON object with a fixed top-level key set
//! (`name`, `version`, `schema_version`, `description`, `authors`,
//! `created_at`, `skills`, `locators`, `extensions`). Deployment and
//! protocol data live inside the well-known runtime extension block; see
//! [`crate::RUNTIME_EXTENSION`].

pub mod acp;
pub mod deployment;
pub mod manifest;

pub use acp::{AcpSpec, Capabilities};
pub use deployment::{DeploymentOption, DeploymentSpec, EnvVarSpec, FrameworkConfig};
pub use manifest::{AgentManifest, Extension, Locator, RuntimeSpec, Skill};
