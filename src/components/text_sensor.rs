//! Text sensor subsystem: sub-schema builder and factory.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::path::ConfigPath;
use crate::build::registry::{Capability, IdRegistry};
use crate::components::entity::EntityCategory;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TextSensorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub internal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_category: Option<EntityCategory>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextSensorSchema {
    entity_category: Option<EntityCategory>,
}

pub fn text_sensor_schema(entity_category: Option<EntityCategory>) -> TextSensorSchema {
    TextSensorSchema { entity_category }
}

impl TextSensorSchema {
    pub fn validate(
        &self,
        path: &ConfigPath,
        raw: &Value,
        ids: &mut IdRegistry,
        default_id: &str,
    ) -> Result<TextSensorConfig> {
        let mut config: TextSensorConfig = path.parse(raw)?;

        if config.entity_category.is_none() {
            config.entity_category = self.entity_category;
        }

        let id = match config.id.take() {
            Some(id) => id,
            None => ids.generate(default_id),
        };
        ids.declare(&path.join("id"), &id, Capability::TextSensor)?;
        config.id = Some(id);

        Ok(config)
    }
}

#[derive(Debug, PartialEq)]
pub struct TextSensor {
    pub id: String,
    pub name: String,
    pub internal: bool,
    pub icon: Option<String>,
    pub entity_category: Option<EntityCategory>,
}

pub fn new_text_sensor(config: &TextSensorConfig) -> Rc<TextSensor> {
    let sensor = TextSensor {
        id: config.id.clone().unwrap_or_default(),
        name: config.name.clone(),
        internal: config.internal,
        icon: config.icon.clone(),
        entity_category: config.entity_category,
    };
    log::debug!("Created text sensor '{}' ({})", sensor.name, sensor.id);
    Rc::new(sensor)
}
