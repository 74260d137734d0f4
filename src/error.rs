use thiserror::Error;

/// Registry load failures. Any of these is fatal to startup.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Two records share a name (data integrity violation).
    #[error("duplicate site name: {name}")]
    DuplicateSite { name: String },

    #[error("site {name} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown mineral type: {0}")]
pub struct CategoryParseError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown metric: {0}")]
pub struct MetricParseError(pub String);
