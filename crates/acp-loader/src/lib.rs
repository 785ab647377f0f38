//! Manifest loading and environment resolution for ACP agents
//!
//! Brings an [`acp_manifest::AgentManifest`] from disk into memory with
//! size and existence checks, writes manifests back atomically, and
//! resolves the environment variables a manifest declares against a
//! snapshot of the process environment (optionally merged with a dotenv
//! file).

pub mod env;
pub mod error;
pub mod loader;

pub use env::{EnvReport, EnvSnapshot, check_manifest_env};
pub use error::{Error, Result};
pub use loader::{MAX_MANIFEST_SIZE, load_manifest, write_manifest};
