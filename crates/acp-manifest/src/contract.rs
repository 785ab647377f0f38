//! The agent's message contract: typed mirrors of the wire types plus the
//! canonical JSON Schema fragments embedded in manifests.
//!
//! The wire shapes are fixed:
//!
//! - `Message = {type: enum(human|assistant|ai), content: string}`
//! - `InputState = {input: {messages: array<Message> | null}}`
//! - `OutputState = {messages: array<Message> | null}`
//! - config is the empty schema (no configuration accepted)
//!
//! [`ContractValidator`] compiles the schemas carried by a manifest and
//! checks request/response payloads against them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::schema::AcpSpec;
use crate::schema::AgentManifest;

// ===========================================================================
// Typed wire types
// ===========================================================================

/// One conversational message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Message text.
    pub content: String,
}

impl Message {
    /// Build a message originating from the human user.
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Human,
            content: content.into(),
        }
    }

    /// Build a message originating from the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Assistant,
            content: content.into(),
        }
    }

    /// Build a message originating from the model (`ai` on the wire).
    pub fn ai(content: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Ai,
            content: content.into(),
        }
    }
}

/// Message originator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Human,
    Assistant,
    Ai,
}

/// Request payload wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// The conversational window handed to the agent.
    pub input: Transcript,
}

impl InputState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            input: Transcript {
                messages: Some(messages),
            },
        }
    }
}

/// An optional ordered sequence of messages.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// `None` serializes as `null`, matching the nullable wire field.
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

/// Response payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputState {
    /// `None` serializes as `null`, matching the nullable wire field.
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

impl OutputState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Some(messages),
        }
    }
}

// ===========================================================================
// Canonical schema fragments
// ===========================================================================

/// JSON Schema for a single [`Message`].
pub fn message_schema() -> Value {
    json!({
        "title": "Message",
        "type": "object",
        "properties": {
            "type": {
                "title": "Type",
                "description": "indicates the originator of the message, a human or an assistant",
                "enum": ["human", "assistant", "ai"]
            },
            "content": {
                "title": "Content",
                "description": "the content of the message",
                "type": "string"
            }
        },
        "required": ["type", "content"]
    })
}

fn nullable_messages() -> Value {
    json!({
        "title": "Messages",
        "anyOf": [
            { "type": "array", "items": { "$ref": "#/$defs/Message" } },
            { "type": "null" }
        ],
        "default": null
    })
}

/// JSON Schema for [`InputState`].
pub fn input_schema() -> Value {
    json!({
        "$defs": { "Message": message_schema() },
        "title": "InputState",
        "type": "object",
        "properties": {
            "input": {
                "title": "Input",
                "type": "object",
                "properties": {
                    "messages": nullable_messages()
                }
            }
        },
        "required": ["input"]
    })
}

/// JSON Schema for [`OutputState`].
pub fn output_schema() -> Value {
    json!({
        "$defs": { "Message": message_schema() },
        "title": "OutputState",
        "type": "object",
        "properties": {
            "messages": nullable_messages()
        }
    })
}

/// JSON Schema for runtime configuration: an object declaring no
/// properties.
pub fn config_schema() -> Value {
    json!({
        "title": "ConfigSchema",
        "type": "object",
        "properties": {}
    })
}

/// Compile a validator for the standalone [`message_schema`].
pub fn message_validator() -> Result<jsonschema::Validator> {
    compile(&message_schema(), "contract.Message")
}

// ===========================================================================
// Instance validation
// ===========================================================================

/// Compiled validators for the three schemas a manifest embeds.
#[derive(Debug)]
pub struct ContractValidator {
    input: jsonschema::Validator,
    output: jsonschema::Validator,
    config: jsonschema::Validator,
}

impl ContractValidator {
    /// Compile the schemas carried by an ACP block.
    pub fn from_acp(acp: &AcpSpec) -> Result<Self> {
        Ok(Self {
            input: compile(&acp.input, "acp.input")?,
            output: compile(&acp.output, "acp.output")?,
            config: compile(&acp.config, "acp.config")?,
        })
    }

    /// Compile the schemas carried by a manifest's runtime extension.
    pub fn from_manifest(manifest: &AgentManifest) -> Result<Self> {
        Self::from_acp(&manifest.runtime()?.acp)
    }

    /// Check a request payload against the input schema.
    pub fn validate_input(&self, instance: &Value) -> Result<()> {
        check(&self.input, instance, "input")
    }

    /// Check a response payload against the output schema.
    pub fn validate_output(&self, instance: &Value) -> Result<()> {
        check(&self.output, instance, "output")
    }

    /// Check a configuration payload against the config schema.
    pub fn validate_config(&self, instance: &Value) -> Result<()> {
        check(&self.config, instance, "config")
    }
}

fn compile(schema: &Value, location: &str) -> Result<jsonschema::Validator> {
    jsonschema::validator_for(schema).map_err(|e| Error::InvalidSchema {
        location: location.to_string(),
        reason: e.to_string(),
    })
}

fn check(validator: &jsonschema::Validator, instance: &Value, state: &'static str) -> Result<()> {
    let reasons: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| e.to_string())
        .collect();
    if reasons.is_empty() {
        Ok(())
    } else {
        Err(Error::ContractViolation {
            state,
            reason: reasons.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn demo_validator() -> ContractValidator {
        let acp = AcpSpec {
            version: Some("v0".to_string()),
            capabilities: Default::default(),
            input: input_schema(),
            output: output_schema(),
            config: config_schema(),
        };
        ContractValidator::from_acp(&acp).unwrap()
    }

    #[test]
    fn test_schemas_are_well_formed() {
        for schema in [
            message_schema(),
            input_schema(),
            output_schema(),
            config_schema(),
        ] {
            assert!(jsonschema::meta::is_valid(&schema), "{schema}");
        }
    }

    #[test]
    fn test_example_input_validates() {
        let validator = demo_validator();
        let instance = json!({
            "input": {
                "messages": [
                    { "type": "human", "content": "list argocd apps" }
                ]
            }
        });
        validator.validate_input(&instance).unwrap();
    }

    #[test]
    fn test_example_output_validates() {
        let validator = demo_validator();
        let instance = json!({
            "messages": [
                { "type": "ai", "content": "3 apps found" }
            ]
        });
        validator.validate_output(&instance).unwrap();
    }

    #[test]
    fn test_output_with_null_messages_validates() {
        let validator = demo_validator();
        validator.validate_output(&json!({ "messages": null })).unwrap();
        validator.validate_output(&json!({})).unwrap();
    }

    #[test]
    fn test_message_missing_fields_rejected() {
        let validator = message_validator().unwrap();
        assert!(!validator.is_valid(&json!({ "content": "hi" })));
        assert!(!validator.is_valid(&json!({ "type": "human" })));
        assert!(validator.is_valid(&json!({ "type": "human", "content": "hi" })));
    }

    #[test]
    fn test_message_with_unknown_type_rejected() {
        let validator = message_validator().unwrap();
        assert!(!validator.is_valid(&json!({ "type": "robot", "content": "beep" })));
    }

    #[test]
    fn test_input_with_bad_message_rejected() {
        let validator = demo_validator();
        let instance = json!({
            "input": {
                "messages": [ { "type": "human" } ]
            }
        });
        let err = validator.validate_input(&instance).unwrap_err();
        match err {
            Error::ContractViolation { state, .. } => assert_eq!(state, "input"),
            other => panic!("expected ContractViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_input_without_wrapper_rejected() {
        let validator = demo_validator();
        let instance = json!({ "messages": [] });
        assert!(validator.validate_input(&instance).is_err());
    }

    #[test]
    fn test_empty_config_validates() {
        let validator = demo_validator();
        validator.validate_config(&json!({})).unwrap();
    }

    #[test]
    fn test_typed_mirrors_conform_to_schemas() {
        let validator = demo_validator();

        let input = InputState::new(vec![Message::human("list argocd apps")]);
        validator
            .validate_input(&serde_json::to_value(&input).unwrap())
            .unwrap();

        let output = OutputState::new(vec![Message::ai("3 apps found")]);
        validator
            .validate_output(&serde_json::to_value(&output).unwrap())
            .unwrap();

        let empty = OutputState::default();
        validator
            .validate_output(&serde_json::to_value(&empty).unwrap())
            .unwrap();
    }

    #[test]
    fn test_message_kind_wire_names() {
        assert_eq!(
            serde_json::to_value(Message::ai("x")).unwrap()["type"],
            "ai"
        );
        assert_eq!(
            serde_json::to_value(Message::human("x")).unwrap()["type"],
            "human"
        );
        assert_eq!(
            serde_json::to_value(Message::assistant("x")).unwrap()["type"],
            "assistant"
        );
    }

    #[test]
    fn test_message_round_trip() {
        let message = Message::assistant("Sync completed successfully");
        let value = serde_json::to_value(&message).unwrap();
        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(message, back);
    }
}
