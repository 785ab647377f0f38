//! End-to-end tests across the workspace crates
//!
//! These exercise the complete flow: author a document, write it to disk,
//! load it back, resolve the runtime extension, gate on the environment,
//! and validate conversation payloads against the embedded contract.

use acp_loader::{EnvSnapshot, check_manifest_env, load_manifest, write_manifest};
use acp_manifest::{ContractValidator, InputState, Message, OutputState};
use acp_test_utils::{ManifestDir, ManifestFixture};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_full_document_round_trip() {
    let dir = ManifestDir::new();
    let path = dir.write_manifest("agent.json", &ManifestFixture::argocd());

    let manifest = load_manifest(&path).unwrap();
    assert_eq!(manifest.name, "agent_argocd");

    // Write it back out and reload; the documents must agree
    let copy_path = dir.root().join("copy.json");
    write_manifest(&copy_path, &manifest).unwrap();
    let reloaded = load_manifest(&copy_path).unwrap();
    assert_eq!(reloaded, manifest);
}

#[test]
fn test_load_is_deterministic_across_reads() {
    let dir = ManifestDir::new();
    let path = dir.write_manifest("agent.json", &ManifestFixture::argocd());

    let first = load_manifest(&path).unwrap();
    let second = load_manifest(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_loaded_manifest_exposes_runtime_sections() {
    let dir = ManifestDir::new();
    let path = dir.write_manifest("agent.json", &ManifestFixture::argocd());
    let manifest = load_manifest(&path).unwrap();

    let options = manifest.deployment_options().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].kind(), "source_code");
    assert_eq!(options[1].kind(), "docker");

    let caps = manifest.capabilities().unwrap();
    assert!(!caps.threads);
    assert!(!caps.interrupts);
    assert!(!caps.callbacks);
}

#[test]
fn test_environment_gate_end_to_end() {
    let dir = ManifestDir::new();
    let path = dir.write_manifest("agent.json", &ManifestFixture::argocd());
    let manifest = load_manifest(&path).unwrap();

    // Nothing set: the failure names every required variable
    let report = check_manifest_env(&manifest, &EnvSnapshot::default()).unwrap();
    let err = report.ensure_required().unwrap_err();
    for name in [
        "LLM_PROVIDER",
        "ARGOCD_TOKEN",
        "ARGOCD_API_URL",
        "ARGOCD_VERIFY_SSL",
    ] {
        assert!(err.to_string().contains(name), "error should name {name}");
    }

    // A dotenv file can fill the gaps
    let env_file = dir.write_env_file(
        ".env",
        &[
            ("LLM_PROVIDER", "azure-openai"),
            ("AZURE_OPENAI_ENDPOINT", "https://example.openai.azure.com"),
            ("AZURE_OPENAI_API_KEY", "key"),
            ("AZURE_OPENAI_DEPLOYMENT", "gpt-4o"),
            ("AZURE_OPENAI_API_VERSION", "2025-03-01"),
            ("ARGOCD_TOKEN", "token"),
            ("ARGOCD_API_URL", "https://argocd.example.com/api/v1"),
            ("ARGOCD_VERIFY_SSL", "true"),
        ],
    );
    let snapshot = EnvSnapshot::default().merge_env_file(&env_file).unwrap();
    let report = check_manifest_env(&manifest, &snapshot).unwrap();
    assert!(report.ensure_required().is_ok());
    assert_eq!(report.missing_optional, vec!["GOOGLE_API_KEY"]);
}

#[test]
fn test_contract_validation_of_conversation_payloads() {
    let dir = ManifestDir::new();
    let path = dir.write_manifest("agent.json", &ManifestFixture::argocd());
    let manifest = load_manifest(&path).unwrap();

    let validator = ContractValidator::from_manifest(&manifest).unwrap();

    // A typed request round-trips through serde and satisfies the schema
    let input = InputState::new(vec![
        Message::human("Which applications are out of sync?"),
        Message::ai("Two applications are out of sync."),
        Message::human("Sync the first one."),
    ]);
    validator
        .validate_input(&serde_json::to_value(&input).unwrap())
        .unwrap();

    // Responses may carry messages or null
    let output = OutputState::new(vec![Message::ai("Sync started.")]);
    validator
        .validate_output(&serde_json::to_value(&output).unwrap())
        .unwrap();
    validator.validate_output(&json!({ "messages": null })).unwrap();

    // Unknown message originators are rejected
    let err = validator
        .validate_input(&json!({
            "input": { "messages": [{ "type": "robot", "content": "hi" }] }
        }))
        .unwrap_err();
    assert!(err.to_string().contains("input"));
}

#[test]
fn test_broken_documents_fail_loading_with_named_cause() {
    let dir = ManifestDir::new();

    let missing_field = dir.write_manifest(
        "missing.json",
        &ManifestFixture::minimal().without_key("extensions"),
    );
    let err = load_manifest(&missing_field).unwrap_err();
    assert!(err.to_string().contains("extensions"));

    let duplicate = dir.write_manifest(
        "duplicate.json",
        &ManifestFixture::minimal().with_env_vars(json!([
            { "name": "API_TOKEN", "required": true },
            { "name": "API_TOKEN" }
        ])),
    );
    let err = load_manifest(&duplicate).unwrap_err();
    assert!(err.to_string().contains("API_TOKEN"));

    let bad_schema = dir.write_manifest(
        "bad_schema.json",
        &ManifestFixture::minimal().with_output_schema(json!({ "required": "messages" })),
    );
    let err = load_manifest(&bad_schema).unwrap_err();
    assert!(err.to_string().contains("acp.output"));
}

#[test]
fn test_edited_fixture_survives_modification() {
    let dir = ManifestDir::new();

    // Renaming the agent and adding a variable keeps the document valid
    let path = dir.write_manifest(
        "agent.json",
        &ManifestFixture::argocd()
            .with_key("name", json!("agent_argocd_staging"))
            .with_env_vars(json!([
                { "name": "LLM_PROVIDER", "required": true },
                { "name": "ARGOCD_TOKEN", "required": true },
                { "name": "ARGOCD_API_URL", "required": true },
                { "name": "ARGOCD_VERIFY_SSL", "required": true },
                { "name": "HTTP_PROXY", "description": "Egress proxy" }
            ])),
    );

    let manifest = load_manifest(&path).unwrap();
    assert_eq!(manifest.name, "agent_argocd_staging");
    assert_eq!(manifest.env_vars().unwrap().len(), 5);
}
