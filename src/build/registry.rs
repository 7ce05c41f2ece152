//! Registry of ids declared anywhere in the configuration.
//!
//! Every component declares its id here during schema validation. References
//! to other components (`uart_id`, `reset_output`, ...) are checked against the
//! registry, both for existence and for the capability of the target.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::build::path::ConfigPath;
use crate::error::{BuildError, Result};
use crate::helpers::ids::is_valid_id;

/// What a declared id can be used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Uart,
    BinaryOutput,
    BinarySensor,
    TextSensor,
    HmRfBridge,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Uart => "uart::UARTComponent",
            Capability::BinaryOutput => "output::BinaryOutput",
            Capability::BinarySensor => "binary_sensor::BinarySensor",
            Capability::TextSensor => "text_sensor::TextSensor",
            Capability::HmRfBridge => "hm_rf_bridge::HmRFBridge",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default)]
pub struct IdRegistry {
    declared: HashMap<String, Capability>,
    // explicit ids not declared yet; generated ids must not take them
    reserved: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, path: &ConfigPath, id: &str, capability: Capability) -> Result<()> {
        if !is_valid_id(id) {
            return Err(BuildError::schema(
                path.to_string(),
                format!("'{id}' is not a valid id; use letters, digits and underscores only"),
            ));
        }
        if self.declared.contains_key(id) {
            return Err(BuildError::schema(
                path.to_string(),
                format!("ID '{id}' redefined; each id must be unique"),
            ));
        }
        log::debug!("Declared id '{}' as {}", id, capability);
        self.declared.insert(id.to_string(), capability);
        Ok(())
    }

    /// Keep `id` away from [`IdRegistry::generate`] until it is declared by its owner.
    pub fn reserve(&mut self, id: &str) {
        self.reserved.insert(id.to_string());
    }

    fn is_taken(&self, id: &str) -> bool {
        self.declared.contains_key(id) || self.reserved.contains(id)
    }

    /// Produce an id derived from `base` that is neither declared nor reserved.
    pub fn generate(&self, base: &str) -> String {
        if !self.is_taken(base) {
            return base.to_string();
        }
        (2..)
            .map(|n| format!("{base}_{n}"))
            .find(|candidate| !self.is_taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// Check that `id` refers to an already declared component of the given capability.
    pub fn require(&self, path: &ConfigPath, id: &str, capability: Capability) -> Result<()> {
        match self.declared.get(id) {
            None => Err(BuildError::schema(
                path.to_string(),
                format!("Couldn't find ID '{id}'; please check you have defined an ID with that name"),
            )),
            Some(found) if *found != capability => Err(BuildError::schema(
                path.to_string(),
                format!("ID '{id}' of type {found} doesn't inherit from {capability}"),
            )),
            Some(_) => Ok(()),
        }
    }

    pub fn capability(&self, id: &str) -> Option<Capability> {
        self.declared.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
