//! Binary sensor subsystem: sub-schema builder and factory.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::path::ConfigPath;
use crate::build::registry::{Capability, IdRegistry};
use crate::components::entity::{BinarySensorDeviceClass, EntityCategory};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BinarySensorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub internal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_class: Option<BinarySensorDeviceClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
}

/// Sub-schema for a binary sensor embedded in another component.
///
/// `device_class` and `entity_category` are defaults; values set by the user win.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySensorSchema {
    device_class: Option<BinarySensorDeviceClass>,
    entity_category: Option<EntityCategory>,
}

pub fn binary_sensor_schema(
    device_class: Option<BinarySensorDeviceClass>,
    entity_category: Option<EntityCategory>,
) -> BinarySensorSchema {
    BinarySensorSchema {
        device_class,
        entity_category,
    }
}

impl BinarySensorSchema {
    /// Validate `raw` and declare its id, generating one from `default_id` if absent.
    pub fn validate(
        &self,
        path: &ConfigPath,
        raw: &Value,
        ids: &mut IdRegistry,
        default_id: &str,
    ) -> Result<BinarySensorConfig> {
        let mut config: BinarySensorConfig = path.parse(raw)?;

        if config.device_class.is_none() {
            config.device_class = self.device_class;
        }
        if config.entity_category.is_none() {
            config.entity_category = self.entity_category;
        }

        let id = match config.id.take() {
            Some(id) => id,
            None => ids.generate(default_id),
        };
        ids.declare(&path.join("id"), &id, Capability::BinarySensor)?;
        config.id = Some(id);

        Ok(config)
    }
}

#[derive(Debug, PartialEq)]
pub struct BinarySensor {
    pub id: String,
    pub name: String,
    pub internal: bool,
    pub icon: Option<String>,
    pub device_class: Option<BinarySensorDeviceClass>,
    pub entity_category: Option<EntityCategory>,
}

/// Create the sensor object for an already validated config.
pub fn new_binary_sensor(config: &BinarySensorConfig) -> Rc<BinarySensor> {
    let sensor = BinarySensor {
        id: config.id.clone().unwrap_or_default(),
        name: config.name.clone(),
        internal: config.internal,
        icon: config.icon.clone(),
        device_class: config.device_class,
        entity_category: config.entity_category,
    };
    log::debug!("Created binary sensor '{}' ({})", sensor.name, sensor.id);
    Rc::new(sensor)
}
