mod build;
mod validate;

pub use build::build;
pub use validate::validate;

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde_json::Value;

fn read_config(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
    Ok(hm_rf_bridge::build::pipeline::parse(&text)?)
}
