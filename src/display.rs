use crate::error::DeployError;

pub fn print_success(message: &str) {
    tracing::info!("✓ {}", message);
}

pub fn print_info(message: &str) {
    tracing::info!("{}", message);
}

pub fn format_json_output<T: serde::Serialize>(data: &T) -> Result<String, DeployError> {
    serde_json::to_string_pretty(data)
        .map_err(|e| DeployError::ParseError(format!("JSON serialization error: {}", e)))
}
