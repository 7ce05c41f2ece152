use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::path::ConfigPath;
use crate::build::registry::{Capability, IdRegistry};
use crate::build::scheduler::{setup_priority, Component};
use crate::error::Result;

/// One `output:` entry describing a GPIO driven as a binary output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub id: String,
    pub pin: u8,
    #[serde(default)]
    pub inverted: bool,
}

pub fn validate(path: &ConfigPath, raw: &Value, ids: &mut IdRegistry) -> Result<OutputConfig> {
    let config: OutputConfig = path.parse(raw)?;
    ids.declare(&path.join("id"), &config.id, Capability::BinaryOutput)?;
    Ok(config)
}

#[derive(Debug, PartialEq)]
pub struct BinaryOutput {
    pub id: String,
    pub pin: u8,
    pub inverted: bool,
}

impl Component for BinaryOutput {
    fn component_id(&self) -> &str {
        &self.id
    }

    fn setup_priority(&self) -> f32 {
        setup_priority::HARDWARE
    }

    fn dump_config(&self) {
        log::info!("GPIO Binary Output '{}':", self.id);
        log::info!("  Pin: GPIO{}", self.pin);
        if self.inverted {
            log::info!("  Inverted: YES");
        }
    }
}

pub fn new_binary_output(config: &OutputConfig) -> Rc<BinaryOutput> {
    Rc::new(BinaryOutput {
        id: config.id.clone(),
        pin: config.pin,
        inverted: config.inverted,
    })
}
