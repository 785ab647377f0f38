//! Environment resolution against manifest env var declarations.
//!
//! Checks run over an [`EnvSnapshot`] rather than the live process
//! environment, so results are stable for the duration of a check and
//! tests never have to mutate global state.

use std::collections::BTreeMap;
use std::path::Path;

use acp_manifest::{AgentManifest, EnvVarSpec};

use crate::{Error, Result};

/// An immutable capture of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Merge variables from a dotenv-style file into the snapshot.
    ///
    /// Variables already in the snapshot win; the file only fills gaps.
    /// The process environment is left untouched.
    pub fn merge_env_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path).map_err(|e| Error::EnvFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut merged = 0usize;
        for item in iter {
            let (key, value) = item.map_err(|e| Error::EnvFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                merged += 1;
            }
        }
        tracing::debug!(path = %path.display(), merged, "merged env file");
        Ok(self)
    }

    /// Look up a variable. Empty values count as set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// `true` when the variable is set, even to an empty string.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Check the snapshot against a list of declared variables.
    pub fn check(&self, specs: &[EnvVarSpec]) -> EnvReport {
        let mut report = EnvReport::default();
        for spec in specs {
            if self.contains(&spec.name) {
                report.present.push(spec.name.clone());
            } else if spec.required {
                report.missing_required.push(spec.name.clone());
            } else {
                report.missing_optional.push(spec.name.clone());
            }
        }
        report
    }
}

/// Outcome of checking a snapshot against a manifest's declared variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    /// Declared variables found in the snapshot.
    pub present: Vec<String>,
    /// Required variables absent from the snapshot.
    pub missing_required: Vec<String>,
    /// Optional variables absent from the snapshot.
    pub missing_optional: Vec<String>,
}

impl EnvReport {
    /// `true` when every required variable is set.
    pub fn is_satisfied(&self) -> bool {
        self.missing_required.is_empty()
    }

    /// Fail with [`Error::MissingEnvVars`] naming every absent required
    /// variable, or `Ok(())` when the environment is complete.
    pub fn ensure_required(&self) -> Result<()> {
        if self.missing_required.is_empty() {
            return Ok(());
        }
        Err(Error::MissingEnvVars {
            names: self.missing_required.clone(),
        })
    }
}

/// Check a snapshot against everything the manifest declares.
///
/// Fails if the manifest has no usable runtime extension; otherwise the
/// report carries the outcome for required and optional variables alike.
pub fn check_manifest_env(manifest: &AgentManifest, snapshot: &EnvSnapshot) -> Result<EnvReport> {
    let specs = manifest.env_vars()?;
    let report = snapshot.check(&specs);
    if !report.is_satisfied() {
        tracing::warn!(
            agent = %manifest.name,
            missing = report.missing_required.len(),
            "required environment variables are not set"
        );
    }
    Ok(report)
}
