use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("{path}: {message}")]
    Schema { path: String, message: String },

    #[error(
        "socket capacity exceeded: '{label}' requested {requested} socket(s) but only {available} remain"
    )]
    ResourceExhausted {
        label: String,
        requested: u32,
        available: u32,
    },

    #[error("{component} requires {parameter} = {required}, but it is configured as {actual}")]
    ConflictingRequirement {
        component: String,
        parameter: String,
        required: String,
        actual: String,
    },

    #[error("{field}: '{id}' has not been instantiated yet")]
    UnresolvedDependency { field: String, id: String },

    #[error("{slot} has already been attached")]
    AlreadyAttached { slot: String },

    #[error("could not parse config JSON: {0}")]
    Parse(String),
}

impl BuildError {
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        BuildError::Schema {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unresolved(field: impl Into<String>, id: impl Into<String>) -> Self {
        BuildError::UnresolvedDependency {
            field: field.into(),
            id: id.into(),
        }
    }
}

impl From<serde_json::Error> for BuildError {
    fn from(e: serde_json::Error) -> Self {
        BuildError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
