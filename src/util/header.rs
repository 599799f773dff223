use crate::model::error::ConfigError;

/// Splits a `Name: value` header argument. Surrounding whitespace is trimmed
/// from both halves; the value may be empty.
pub fn parse_header(header: &str) -> Result<(String, String), ConfigError> {
    let (name, value) = header
        .split_once(':')
        .ok_or_else(|| ConfigError::MalformedHeader(header.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::MalformedHeader(header.to_string()));
    }

    Ok((name.to_string(), value.trim().to_string()))
}

pub fn bearer(key: &str) -> String {
    format!("Bearer {}", key)
}
