//! Error types for the flag_colors library

use thiserror::Error;

/// Result type alias for flag_colors operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for flag lookup, color analysis and rendering
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No country matched the user query
    #[error("No country matches '{query}'")]
    CountryNotFound { query: String },

    /// Flag image could not be retrieved
    #[error("Failed to fetch flag: {message}")]
    FlagFetchError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image bytes could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Clustering produced no usable result
    #[error("Clustering failed: {reason}")]
    ClusteringError { reason: String },

    /// Geocoding request failed
    #[error("Geocoding failed: {message}")]
    GeocodeError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Geocoder answered but had no location for the query
    #[error("No location found for '{query}'")]
    LocationNotFound { query: String },

    /// Rendering or encoding an artifact failed
    #[error("Render error: {message}")]
    RenderError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration could not be read, written or validated
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem operation failed
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a flag fetch error wrapping a transport failure
    pub fn flag_fetch<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::FlagFetchError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a geocoding error wrapping a transport failure
    pub fn geocode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::GeocodeError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a render error with context
    pub fn render<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RenderError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if the pipeline can still produce output after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::GeocodeError { .. } | AnalysisError::LocationNotFound { .. }
        )
    }

    /// Get user-friendly error description for display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::CountryNotFound { .. }
            | AnalysisError::FlagFetchError { .. }
            | AnalysisError::ImageLoadError { .. } => {
                "Could not find a flag for this country. Please check the spelling.".to_string()
            }
            AnalysisError::GeocodeError { .. } | AnalysisError::LocationNotFound { .. } => {
                "Could not find this country on the map.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, value } => {
                format!("The value '{}' is not valid for {}.", value, parameter)
            }
            AnalysisError::ConfigError { .. } => {
                "The configuration file could not be used. Please check its contents.".to_string()
            }
            _ => "Color analysis failed. Please try again.".to_string(),
        }
    }
}
