//! The canonical ArgoCD agent manifest, compiled into the library.
//!
//! Embedding the document keeps the library usable without any file system
//! access and gives `init` scaffolding a validated starting point. The
//! on-disk source of truth is `manifests/agent_argocd.json`.

use crate::error::Result;
use crate::schema::AgentManifest;

/// Raw JSON of the canonical ArgoCD agent manifest.
pub const AGENT_ARGOCD_JSON: &str = include_str!("../manifests/agent_argocd.json");

/// Parse and validate the canonical ArgoCD agent manifest.
pub fn agent_argocd() -> Result<AgentManifest> {
    AgentManifest::from_json(AGENT_ARGOCD_JSON)
}
