/// Errors raised while parsing or validating an agent manifest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not well-formed JSON.
    #[error("failed to parse agent manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required top-level key is absent from the document.
    #[error("agent manifest is missing required field '{field}'")]
    MissingField { field: &'static str },

    /// The manifest document is not a JSON object.
    #[error("agent manifest must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// Invalid agent name.
    #[error("invalid agent name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// `schema_version` is not a valid semver string.
    #[error("invalid schema_version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    /// `schema_version` is valid semver but not a format revision this
    /// library understands.
    #[error("unsupported schema_version '{version}' (supported: {supported})")]
    UnsupportedSchemaVersion { version: String, supported: String },

    /// No extension block with the given name exists in the manifest.
    #[error("agent manifest has no '{name}' extension")]
    MissingExtension { name: &'static str },

    /// Two environment variable specs share a name.
    #[error("duplicate environment variable '{name}' in manifest")]
    DuplicateEnvVar { name: String },

    /// A field value fails a semantic check.
    #[error("invalid value at {location}: {reason}")]
    InvalidValue { location: String, reason: String },

    /// An embedded contract schema is not well-formed JSON Schema.
    #[error("invalid JSON Schema at {location}: {reason}")]
    InvalidSchema { location: String, reason: String },

    /// A payload does not conform to the agent's message contract.
    #[error("{state} payload does not conform to the agent contract: {reason}")]
    ContractViolation { state: &'static str, reason: String },

    /// Failed to serialize a manifest back to JSON.
    #[error("failed to serialize agent manifest: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
