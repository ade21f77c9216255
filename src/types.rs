use serde::Serialize;
use std::fmt;

/// Capability flag authorizing creation of named IAM resources, required by
/// the warehouse template's uploader group and policy.
pub const CAPABILITY_NAMED_IAM: &str = "CAPABILITY_NAMED_IAM";

/// Whether the change set creates a new stack or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeSetType {
    Create,
    Update,
}

impl ChangeSetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeSetType::Create => "CREATE",
            ChangeSetType::Update => "UPDATE",
        }
    }
}

impl fmt::Display for ChangeSetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A template parameter value, either a literal or the service-side
/// "keep whatever the live stack currently has" sentinel. The sentinel is
/// only valid on an UPDATE change set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Literal(String),
    UsePrevious,
}

/// A key/value pair submitted with the change set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: String,
    pub value: ParameterValue,
}

impl Parameter {
    pub fn literal(key: impl Into<String>, value: impl Into<String>) -> Self {
        Parameter {
            key: key.into(),
            value: ParameterValue::Literal(value.into()),
        }
    }

    pub fn use_previous(key: impl Into<String>) -> Self {
        Parameter {
            key: key.into(),
            value: ParameterValue::UsePrevious,
        }
    }
}

/// Everything the stack-management service needs to create one change set
#[derive(Debug, Clone)]
pub struct ChangeSetRequest {
    pub stack_name: String,
    pub template_body: String,
    pub changeset_name: String,
    pub changeset_type: ChangeSetType,
    pub capabilities: Vec<String>,
    pub parameters: Vec<Parameter>,
}

// JSON output structure for --format json
#[derive(Debug, Serialize)]
pub struct DeployOutcome {
    pub stack_name: String,
    pub changeset_name: String,
    pub changeset_type: ChangeSetType,
    pub changeset_id: String,
}
