use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{BuildError, Result};

/// Location of a value inside the full configuration, e.g. `hm_rf_bridge[0]->connected->name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPath(Vec<String>);

impl ConfigPath {
    pub fn domain(name: &str) -> Self {
        ConfigPath(vec![name.to_string()])
    }

    pub fn join(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        ConfigPath(segments)
    }

    /// Append a list index to the last segment.
    pub fn index(&self, i: usize) -> Self {
        let mut segments = self.0.clone();
        match segments.last_mut() {
            Some(last) => last.push_str(&format!("[{i}]")),
            None => segments.push(format!("[{i}]")),
        }
        ConfigPath(segments)
    }

    /// Deserialize the value found at this path, reporting failures against it.
    pub fn parse<T: DeserializeOwned>(&self, value: &Value) -> Result<T> {
        serde_json::from_value(value.clone())
            .map_err(|e| BuildError::schema(self.to_string(), e.to_string()))
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("->"))
    }
}
