//! ACP section of the runtime extension: declared capabilities plus the
//! input/output/config schema contract.

use serde::{Deserialize, Serialize};

/// The `acp` block of the runtime extension payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcpSpec {
    /// Protocol revision tag (e.g. `v0`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Execution modes the agent runtime supports.
    #[serde(default)]
    pub capabilities: Capabilities,
    /// JSON Schema for request payloads.
    pub input: serde_json::Value,
    /// JSON Schema for response payloads.
    pub output: serde_json::Value,
    /// JSON Schema for runtime configuration. Defaults to the empty schema,
    /// i.e. no configuration accepted.
    #[serde(default = "empty_schema")]
    pub config: serde_json::Value,
}

fn empty_schema() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Execution-mode flags. Every flag defaults to false; an all-false block
/// means the runtime supports none of these modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Multi-turn thread state held by the runtime.
    pub threads: bool,
    /// Mid-run interrupt and resume.
    pub interrupts: bool,
    /// Completion callbacks to external endpoints.
    pub callbacks: bool,
}
