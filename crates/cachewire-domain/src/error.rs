//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Cachewire
#[derive(Error, Debug)]
pub enum Error {
    /// A required key is absent from a cache configuration
    #[error("Missing \"{key}\" config key")]
    MissingConfigKey {
        /// Name of the missing key
        key: String,
    },

    /// A cache type can neither be taken from the container nor constructed
    #[error("Unresolvable cache type \"{class}\": {reason}")]
    UnresolvableType {
        /// The configured type identifier
        class: String,
        /// Why resolution failed
        reason: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Factory error creation methods
impl Error {
    /// Create a missing config key error
    pub fn missing_config_key<S: Into<String>>(key: S) -> Self {
        Self::MissingConfigKey { key: key.into() }
    }

    /// Create an unresolvable type error
    pub fn unresolvable_type<C: Into<String>, R: Into<String>>(class: C, reason: R) -> Self {
        Self::UnresolvableType {
            class: class.into(),
            reason: reason.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// True for errors caused by the configuration rather than the runtime
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingConfigKey { .. } | Self::Configuration { .. }
        )
    }
}
