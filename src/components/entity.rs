use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an entity is shown in a frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Config,
    Diagnostic,
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityCategory::Config => f.write_str("config"),
            EntityCategory::Diagnostic => f.write_str("diagnostic"),
        }
    }
}

/// Semantic classification of a binary sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinarySensorDeviceClass {
    Connectivity,
    Problem,
    Running,
    Power,
    Update,
}

impl fmt::Display for BinarySensorDeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinarySensorDeviceClass::Connectivity => "connectivity",
            BinarySensorDeviceClass::Problem => "problem",
            BinarySensorDeviceClass::Running => "running",
            BinarySensorDeviceClass::Power => "power",
            BinarySensorDeviceClass::Update => "update",
        };
        f.write_str(name)
    }
}
