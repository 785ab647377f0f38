//! Fixture-driven tests using test-fixtures/manifests/
//!
//! Valid documents must load and validate; each invalid document must be
//! rejected with the failure it was written to provoke.

use std::fs;
use std::path::PathBuf;

use acp_loader::{Error, load_manifest};
use acp_manifest::builtin;
use pretty_assertions::assert_eq;

/// Path to the manifest fixtures (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures/manifests")
}

// ==========================================================================
// Valid Fixture Tests
// ==========================================================================

#[test]
fn test_every_valid_fixture_loads() {
    let dir = fixtures_dir().join("valid");
    let mut seen = 0;
    for entry in fs::read_dir(&dir).unwrap() {
        let path = entry.unwrap().path();
        let manifest = load_manifest(&path)
            .unwrap_or_else(|e| panic!("{} should load: {}", path.display(), e));
        manifest.validate().unwrap();
        seen += 1;
    }
    assert!(seen >= 2, "expected at least two valid fixtures, saw {seen}");
}

#[test]
fn test_argocd_fixture_matches_shipped_document() {
    let fixture_path = fixtures_dir().join("valid/agent_argocd.json");
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&fixture_path).unwrap()).unwrap();
    let shipped: serde_json::Value = serde_json::from_str(builtin::AGENT_ARGOCD_JSON).unwrap();
    assert_eq!(on_disk, shipped);
}

#[test]
fn test_minimal_fixture_fills_defaults() {
    let manifest = load_manifest(fixtures_dir().join("valid/agent_minimal.json")).unwrap();

    assert!(manifest.env_vars().unwrap().is_empty());

    let runtime = manifest.runtime().unwrap();
    assert_eq!(runtime.acp.config, serde_json::json!({}));

    let caps = manifest.capabilities().unwrap();
    assert!(!caps.threads);
    assert!(!caps.interrupts);
    assert!(!caps.callbacks);
}

// ==========================================================================
// Invalid Fixture Tests
// ==========================================================================

fn load_invalid(name: &str) -> Error {
    let path = fixtures_dir().join("invalid").join(name);
    match load_manifest(&path) {
        Ok(_) => panic!("{name} should be rejected"),
        Err(e) => e,
    }
}

#[test]
fn test_missing_locators_rejected() {
    let err = load_invalid("missing_locators.json");
    assert!(
        matches!(
            err,
            Error::Manifest(acp_manifest::Error::MissingField { field: "locators" })
        ),
        "got {err:?}"
    );
}

#[test]
fn test_duplicate_env_var_rejected() {
    let err = load_invalid("duplicate_env_var.json");
    assert!(err.to_string().contains("ARGOCD_TOKEN"), "got {err}");
    assert!(matches!(
        err,
        Error::Manifest(acp_manifest::Error::DuplicateEnvVar { .. })
    ));
}

#[test]
fn test_bad_input_schema_rejected() {
    let err = load_invalid("bad_input_schema.json");
    assert!(err.to_string().contains("acp.input"), "got {err}");
}

#[test]
fn test_unknown_deployment_type_rejected() {
    let err = load_invalid("unknown_deployment_type.json");
    assert!(matches!(
        err,
        Error::Manifest(acp_manifest::Error::InvalidValue { .. })
    ));
}

#[test]
fn test_empty_deployment_options_rejected() {
    let err = load_invalid("empty_deployment_options.json");
    assert!(err.to_string().contains("deployment_options"), "got {err}");
}

#[test]
fn test_unsupported_schema_version_rejected() {
    let err = load_invalid("unsupported_schema_version.json");
    assert!(matches!(
        err,
        Error::Manifest(acp_manifest::Error::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn test_truncated_document_rejected() {
    let err = load_invalid("truncated.json");
    assert!(matches!(err, Error::Manifest(acp_manifest::Error::Parse(_))));
}

#[test]
fn test_non_object_document_rejected() {
    let err = load_invalid("not_an_object.json");
    assert!(matches!(
        err,
        Error::Manifest(acp_manifest::Error::NotAnObject { .. })
    ));
}

#[test]
fn test_every_invalid_fixture_is_rejected() {
    let dir = fixtures_dir().join("invalid");
    for entry in fs::read_dir(&dir).unwrap() {
        let path = entry.unwrap().path();
        assert!(
            load_manifest(&path).is_err(),
            "{} should be rejected",
            path.display()
        );
    }
}
