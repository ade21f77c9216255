use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DeployError {
    Io(io::Error),
    TemplateNotFound(String),
    ParseError(String),
    AwsError(String),
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeployError::Io(e) => write!(f, "IO error: {}", e),
            DeployError::TemplateNotFound(path) => write!(f, "Template not found: {}", path),
            DeployError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DeployError::AwsError(msg) => write!(f, "AWS error: {}", msg),
        }
    }
}

impl Error for DeployError {}

impl From<io::Error> for DeployError {
    fn from(error: io::Error) -> Self {
        DeployError::Io(error)
    }
}

impl From<serde_json::Error> for DeployError {
    fn from(error: serde_json::Error) -> Self {
        DeployError::ParseError(format!("JSON serialization error: {}", error))
    }
}
