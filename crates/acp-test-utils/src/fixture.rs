//! [`ManifestFixture`] builder for manifest test scenarios.
//!
//! A fixture starts from a known-good document and is broken (or extended)
//! through its mutators, so each test states only the deviation it cares
//! about.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A manifest document under construction.
///
/// # Example
///
/// ```rust,no_run
/// use acp_test_utils::{ManifestDir, ManifestFixture};
///
/// let dir = ManifestDir::new();
/// let path = dir.write_manifest(
///     "agent.json",
///     &ManifestFixture::minimal().without_key("locators"),
/// );
/// assert!(path.exists());
/// ```
pub struct ManifestFixture {
    value: Value,
}

impl ManifestFixture {
    /// A minimal document that passes validation.
    ///
    /// Declares one docker deployment option, one required and one optional
    /// environment variable, and permissive object schemas for the contract
    /// blocks.
    pub fn minimal() -> Self {
        Self {
            value: json!({
                "name": "agent_demo",
                "version": "1.0.0",
                "schema_version": "0.1.0",
                "skills": [
                    { "category_uid": 1, "class_uid": 10201 }
                ],
                "locators": [
                    { "type": "docker-image", "url": "ghcr.io/example/agent-demo:latest" }
                ],
                "extensions": [
                    {
                        "name": "oasf.agntcy.org/features/runtime/manifest",
                        "version": "v0.0.0",
                        "data": {
                            "deployment": {
                                "deployment_options": [
                                    { "type": "docker", "image": "ghcr.io/example/agent-demo:latest" }
                                ],
                                "env_vars": [
                                    { "name": "DEMO_API_TOKEN", "description": "Service token", "required": true },
                                    { "name": "DEMO_LOG_LEVEL", "description": "Log verbosity" }
                                ]
                            },
                            "acp": {
                                "version": "v0",
                                "capabilities": { "threads": false, "interrupts": false, "callbacks": false },
                                "input": { "type": "object" },
                                "output": { "type": "object" },
                                "config": { "type": "object", "properties": {} }
                            }
                        }
                    }
                ]
            }),
        }
    }

    /// The complete shipped ArgoCD agent document.
    pub fn argocd() -> Self {
        let value = serde_json::from_str(acp_manifest::builtin::AGENT_ARGOCD_JSON)
            .expect("shipped manifest is valid JSON");
        Self { value }
    }

    /// Remove a top-level key.
    pub fn without_key(mut self, key: &str) -> Self {
        if let Some(map) = self.value.as_object_mut() {
            map.remove(key);
        }
        self
    }

    /// Set or replace a top-level key.
    pub fn with_key(mut self, key: &str, value: Value) -> Self {
        self.value[key] = value;
        self
    }

    /// Replace the `env_vars` array of the runtime extension.
    pub fn with_env_vars(mut self, vars: Value) -> Self {
        self.runtime_data()["deployment"]["env_vars"] = vars;
        self
    }

    /// Replace the `deployment_options` array of the runtime extension.
    pub fn with_deployment_options(mut self, options: Value) -> Self {
        self.runtime_data()["deployment"]["deployment_options"] = options;
        self
    }

    /// Replace the input schema of the ACP contract block.
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.runtime_data()["acp"]["input"] = schema;
        self
    }

    /// Replace the output schema of the ACP contract block.
    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.runtime_data()["acp"]["output"] = schema;
        self
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        let mut rendered = serde_json::to_string_pretty(&self.value)
            .expect("fixture document serializes");
        rendered.push('\n');
        rendered
    }

    /// The raw document.
    pub fn value(&self) -> &Value {
        &self.value
    }

    fn runtime_data(&mut self) -> &mut Value {
        &mut self.value["extensions"][0]["data"]
    }
}

/// A temporary directory with helper methods for writing manifest and env
/// files.
pub struct ManifestDir {
    temp_dir: TempDir,
}

impl Default for ManifestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a fixture under `name` (relative to the root) and return the
    /// full path.
    pub fn write_manifest(&self, name: &str, fixture: &ManifestFixture) -> PathBuf {
        self.write_raw(name, &fixture.to_json())
    }

    /// Write arbitrary file content under `name` and return the full path.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent dir");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Write a dotenv-style file from key/value pairs.
    pub fn write_env_file(&self, name: &str, vars: &[(&str, &str)]) -> PathBuf {
        let content = vars
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect::<String>();
        self.write_raw(name, &content)
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
