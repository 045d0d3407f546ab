use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ConfigError`], stable across variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input value has the wrong shape (e.g. a number where a string is expected).
    Type,
    /// A required key is absent.
    Schema,
    /// A value is present but empty or otherwise invalid, or the JSON text is malformed.
    Value,
    /// A referenced file does not exist.
    NotFound,
    /// A directory sits where a file was expected.
    IsADirectory,
    /// Any other filesystem failure.
    Io,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Type error at '{field}': expected {expected}, got {actual_type} ({actual_value})")]
    Type {
        field: String,
        expected: &'static str,
        actual_type: &'static str,
        actual_value: Value,
    },

    #[error("Schema error at '{field}': missing required key '{key}' in {actual_value}")]
    Schema {
        field: String,
        key: &'static str,
        actual_value: Value,
    },

    #[error("Value error at '{field}': {actual_value}")]
    Value { field: String, actual_value: Value },

    #[error("Value error at '{field}': invalid item {actual_value}")]
    Nested {
        field: String,
        actual_value: Value,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("Value error at '{field}': malformed JSON text")]
    Json {
        field: String,
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown recipe '{name}'")]
    UnknownRecipe { name: String, available: Vec<String> },

    #[error("File not found: {}", file.display())]
    NotFound { file: PathBuf },

    #[error("Is a directory: {}", file.display())]
    IsADirectory { file: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Schema { .. } => ErrorKind::Schema,
            Self::Value { .. }
            | Self::Nested { .. }
            | Self::Json { .. }
            | Self::UnknownRecipe { .. }
            | Self::SerializationError(_) => ErrorKind::Value,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::IsADirectory { .. } => ErrorKind::IsADirectory,
            Self::IoError(_) | Self::HttpClient(_) => ErrorKind::Io,
        }
    }

    /// Field path the failure is tied to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Type { field, .. }
            | Self::Schema { field, .. }
            | Self::Value { field, .. }
            | Self::Nested { field, .. }
            | Self::Json { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Offending raw value, if any.
    pub fn actual_value(&self) -> Option<&Value> {
        match self {
            Self::Type { actual_value, .. }
            | Self::Schema { actual_value, .. }
            | Self::Value { actual_value, .. }
            | Self::Nested { actual_value, .. } => Some(actual_value),
            _ => None,
        }
    }

    /// Wrapped child error of a nested validation failure.
    pub fn child(&self) -> Option<&ConfigError> {
        match self {
            Self::Nested { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Innermost error of a chain of nested validation failures.
    pub fn root_cause(&self) -> &ConfigError {
        let mut current = self;
        while let Some(inner) = current.child() {
            current = inner;
        }
        current
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NotFound { file } => format!("Configuration file not found: {}", file.display()),
            Self::IsADirectory { file } => {
                format!("Expected a file but found a directory: {}", file.display())
            }
            Self::UnknownRecipe { name, available } => format!(
                "No recipe named '{}' (available: {})",
                name,
                available.join(", ")
            ),
            Self::IoError(e) => format!("File system error: {}", e),
            Self::HttpClient(e) => format!("Could not set up the HTTP client: {}", e),
            Self::Nested { field, .. } => {
                let root = self.root_cause();
                match root.field() {
                    Some(inner) => format!(
                        "Invalid configuration entry '{}' (field '{}'): {}",
                        field, inner, root
                    ),
                    None => format!("Invalid configuration entry '{}': {}", field, root),
                }
            }
            _ => format!("Invalid configuration data: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Type | ErrorKind::Schema | ErrorKind::Value => {
                "Fix the JSON data file (see --files for its location) or delete it to restore the defaults"
            }
            ErrorKind::NotFound => "Check that the path exists",
            ErrorKind::IsADirectory => "Remove or rename the directory that occupies the file path",
            ErrorKind::Io => match self {
                Self::HttpClient(_) => "Check the system TLS configuration",
                _ => "Check file permissions and available disk space",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_error_exposes_root_cause() {
        let inner = ConfigError::Value {
            field: "name".to_string(),
            actual_value: json!("  "),
        };
        let outer = ConfigError::Nested {
            field: "recipes[3]".to_string(),
            actual_value: json!({"name": "  ", "templates": ["x"]}),
            source: Box::new(inner),
        };

        assert_eq!(outer.kind(), ErrorKind::Value);
        assert_eq!(outer.field(), Some("recipes[3]"));
        assert_eq!(outer.root_cause().field(), Some("name"));
        assert!(std::error::Error::source(&outer).is_some());
        assert!(outer.user_friendly_message().contains("recipes[3]"));
    }

    #[test]
    fn test_io_error_kind() {
        let err: ConfigError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.field().is_none());
    }

    #[test]
    fn test_unknown_recipe_lists_available_names() {
        let err = ConfigError::UnknownRecipe {
            name: "rust".to_string(),
            available: vec!["java".to_string(), "python".to_string()],
        };
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(
            err.user_friendly_message(),
            "No recipe named 'rust' (available: java, python)"
        );
    }

    #[test]
    fn test_http_client_error_is_reported_friendly() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = ConfigError::from(source);

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err
            .user_friendly_message()
            .starts_with("Could not set up the HTTP client"));
        assert_eq!(err.recovery_suggestion(), "Check the system TLS configuration");
    }
}
