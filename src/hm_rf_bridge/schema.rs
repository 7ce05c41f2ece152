//! Configuration schema of the `hm_rf_bridge` component.

use std::time::Duration;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::build::context::BuildContext;
use crate::build::path::ConfigPath;
use crate::build::registry::Capability;
use crate::components::binary_sensor::{binary_sensor_schema, BinarySensorConfig};
use crate::components::entity::{BinarySensorDeviceClass, EntityCategory};
use crate::components::text_sensor::{text_sensor_schema, TextSensorConfig};
use crate::constants::{defaults, keys};
use crate::error::{BuildError, Result};
use crate::helpers::time_period::{format_time_period, parse_time_period};

use super::AUTO_LOAD;

const KNOWN_KEYS: [&str; 12] = [
    keys::ID,
    keys::UART_ID,
    keys::RESET_OUTPUT,
    keys::RED_LED,
    keys::GREEN_LED,
    keys::BLUE_LED,
    keys::CONNECTED,
    keys::RADIO_MODULE_TYPE,
    keys::FIRMWARE_VERSION,
    keys::SERIAL,
    keys::SGTIN,
    keys::UPDATE_INTERVAL,
];

const GENERATED_ID: &str = "hm_rf_bridge_id";

/// Validated configuration of one bridge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeConfig {
    pub id: String,
    pub uart_id: String,
    pub reset_output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_led: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green_led: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue_led: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<BinarySensorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radio_module_type: Option<TextSensorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<TextSensorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<TextSensorConfig>,
    #[serde(rename = "SGTIN", skip_serializing_if = "Option::is_none")]
    pub sgtin: Option<TextSensorConfig>,
    #[serde(serialize_with = "serialize_period")]
    pub update_interval: Duration,
}

fn serialize_period<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&format_time_period(*d))
}

fn string_at(path: &ConfigPath, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| BuildError::schema(path.to_string(), format!("expected an id, got {value}")))
}

/// Resolve a `use_id` style reference to a component of `capability`.
fn use_id(
    ctx: &BuildContext,
    path: &ConfigPath,
    map: &Map<String, Value>,
    key: &str,
    capability: Capability,
) -> Result<Option<String>> {
    let Some(value) = map.get(key) else {
        return Ok(None);
    };
    let key_path = path.join(key);
    let id = string_at(&key_path, value)?;
    ctx.ids.require(&key_path, &id, capability)?;
    Ok(Some(id))
}

fn required(path: &ConfigPath, key: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| BuildError::schema(path.join(key).to_string(), "required key not provided"))
}

fn text_sensor(
    ctx: &mut BuildContext,
    path: &ConfigPath,
    map: &Map<String, Value>,
    key: &str,
) -> Result<Option<TextSensorConfig>> {
    map.get(key)
        .map(|raw| {
            text_sensor_schema(Some(EntityCategory::Diagnostic)).validate(
                &path.join(key),
                raw,
                &mut ctx.ids,
                &format!("{}_sensor_id", key.to_lowercase()),
            )
        })
        .transpose()
}

const SENSOR_KEYS: [&str; 5] = [
    keys::CONNECTED,
    keys::RADIO_MODULE_TYPE,
    keys::FIRMWARE_VERSION,
    keys::SERIAL,
    keys::SGTIN,
];

/// Ids written out in `raw` for the bridge and its inline sensors.
///
/// Malformed entries yield nothing here; [`validate`] reports them.
pub fn explicit_ids(raw: &Value) -> Vec<&str> {
    let Some(map) = raw.as_object() else {
        return Vec::new();
    };
    let sensor_ids = SENSOR_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .filter_map(|sensor| sensor.get(keys::ID));
    map.get(keys::ID)
        .into_iter()
        .chain(sensor_ids)
        .filter_map(Value::as_str)
        .collect()
}

/// Check the shape of `raw` and normalize it into a [`BridgeConfig`].
///
/// Declares the bridge id and the ids of its inline sensors, and loads the
/// domains the bridge needs at runtime whether or not sensors are configured.
pub fn validate(path: &ConfigPath, raw: &Value, ctx: &mut BuildContext) -> Result<BridgeConfig> {
    let map = raw.as_object().ok_or_else(|| {
        BuildError::schema(path.to_string(), format!("expected a dictionary, got {raw}"))
    })?;

    if let Some(unknown) = map.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
        return Err(BuildError::schema(
            path.join(unknown).to_string(),
            "extra keys not allowed",
        ));
    }

    for domain in AUTO_LOAD {
        ctx.load_domain(domain);
    }

    let id = match map.get(keys::ID) {
        Some(value) => string_at(&path.join(keys::ID), value)?,
        None => ctx.ids.generate(GENERATED_ID),
    };
    ctx.ids
        .declare(&path.join(keys::ID), &id, Capability::HmRfBridge)?;

    let uart_id = required(
        path,
        keys::UART_ID,
        use_id(ctx, path, map, keys::UART_ID, Capability::Uart)?,
    )?;
    let reset_output = required(
        path,
        keys::RESET_OUTPUT,
        use_id(ctx, path, map, keys::RESET_OUTPUT, Capability::BinaryOutput)?,
    )?;
    let red_led = use_id(ctx, path, map, keys::RED_LED, Capability::BinaryOutput)?;
    let green_led = use_id(ctx, path, map, keys::GREEN_LED, Capability::BinaryOutput)?;
    let blue_led = use_id(ctx, path, map, keys::BLUE_LED, Capability::BinaryOutput)?;

    let connected = map
        .get(keys::CONNECTED)
        .map(|raw| {
            binary_sensor_schema(
                Some(BinarySensorDeviceClass::Connectivity),
                Some(EntityCategory::Diagnostic),
            )
            .validate(
                &path.join(keys::CONNECTED),
                raw,
                &mut ctx.ids,
                "connected_sensor_id",
            )
        })
        .transpose()?;

    let radio_module_type = text_sensor(ctx, path, map, keys::RADIO_MODULE_TYPE)?;
    let firmware_version = text_sensor(ctx, path, map, keys::FIRMWARE_VERSION)?;
    let serial = text_sensor(ctx, path, map, keys::SERIAL)?;
    let sgtin = text_sensor(ctx, path, map, keys::SGTIN)?;

    let update_interval = match map.get(keys::UPDATE_INTERVAL) {
        Some(value) => {
            let interval_path = path.join(keys::UPDATE_INTERVAL);
            let interval = parse_time_period(value)
                .map_err(|e| BuildError::schema(interval_path.to_string(), e))?;
            if interval.is_zero() {
                return Err(BuildError::schema(
                    interval_path.to_string(),
                    "update_interval must be greater than 0",
                ));
            }
            interval
        }
        None => defaults::UPDATE_INTERVAL,
    };

    Ok(BridgeConfig {
        id,
        uart_id,
        reset_output,
        red_led,
        green_led,
        blue_led,
        connected,
        radio_module_type,
        firmware_version,
        serial,
        sgtin,
        update_interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> BuildContext {
        let mut ctx = BuildContext::default();
        let path = ConfigPath::domain("test");
        ctx.ids.declare(&path, "uart_bus", Capability::Uart).unwrap();
        ctx.ids
            .declare(&path, "reset_line", Capability::BinaryOutput)
            .unwrap();
        ctx.ids
            .declare(&path, "led_red", Capability::BinaryOutput)
            .unwrap();
        ctx
    }

    fn path() -> ConfigPath {
        ConfigPath::domain("hm_rf_bridge").index(0)
    }

    #[test]
    fn test_minimal_config() {
        let mut ctx = context();
        let raw = json!({"uart_id": "uart_bus", "reset_output": "reset_line"});
        let config = validate(&path(), &raw, &mut ctx).unwrap();

        assert_eq!(config.id, "hm_rf_bridge_id");
        assert_eq!(config.update_interval, Duration::from_secs(10));
        assert!(config.red_led.is_none());
        assert!(config.connected.is_none());
        assert!(config.sgtin.is_none());
        for domain in AUTO_LOAD {
            assert!(ctx.is_loaded(domain));
        }
    }

    #[test]
    fn test_missing_required_key() {
        let mut ctx = context();
        let raw = json!({"uart_id": "uart_bus"});
        let err = validate(&path(), &raw, &mut ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "hm_rf_bridge[0]->reset_output: required key not provided"
        );
    }

    #[test]
    fn test_unknown_key() {
        let mut ctx = context();
        let raw = json!({"uart_id": "uart_bus", "reset_output": "reset_line", "baud": 9600});
        let err = validate(&path(), &raw, &mut ctx).unwrap_err();
        assert_eq!(err.to_string(), "hm_rf_bridge[0]->baud: extra keys not allowed");
    }

    #[test]
    fn test_reference_must_have_capability() {
        let mut ctx = context();
        let raw = json!({"uart_id": "reset_line", "reset_output": "reset_line"});
        let err = validate(&path(), &raw, &mut ctx).unwrap_err();
        assert!(err.to_string().starts_with("hm_rf_bridge[0]->uart_id: ID 'reset_line'"));

        let raw = json!({"uart_id": "uart_bus", "reset_output": "reset_line", "green_led": "nope"});
        let err = validate(&path(), &raw, &mut ctx).unwrap_err();
        assert!(err.to_string().starts_with("hm_rf_bridge[0]->green_led: Couldn't find ID"));
    }

    #[test]
    fn test_sensors_and_interval() {
        let mut ctx = context();
        let raw = json!({
            "id": "bridge",
            "uart_id": "uart_bus",
            "reset_output": "reset_line",
            "red_led": "led_red",
            "connected": {"name": "Connected"},
            "SGTIN": {"name": "SGTIN"},
            "update_interval": "30s"
        });
        let config = validate(&path(), &raw, &mut ctx).unwrap();

        assert_eq!(config.red_led.as_deref(), Some("led_red"));
        let connected = config.connected.unwrap();
        assert_eq!(connected.device_class, Some(BinarySensorDeviceClass::Connectivity));
        assert_eq!(connected.entity_category, Some(EntityCategory::Diagnostic));
        let sgtin = config.sgtin.unwrap();
        assert_eq!(sgtin.id.as_deref(), Some("sgtin_sensor_id"));
        assert_eq!(sgtin.entity_category, Some(EntityCategory::Diagnostic));
        assert_eq!(config.update_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_bad_interval() {
        let mut ctx = context();
        let raw = json!({"uart_id": "uart_bus", "reset_output": "reset_line", "update_interval": "0s"});
        let err = validate(&path(), &raw, &mut ctx).unwrap_err();
        assert!(err.to_string().starts_with("hm_rf_bridge[0]->update_interval:"));
    }

    #[test]
    fn test_explicit_ids() {
        let raw = json!({
            "id": "bridge",
            "uart_id": "uart_bus",
            "connected": {"id": "link", "name": "Connected"},
            "serial": {"name": "Serial"},
            "SGTIN": {"id": "sgtin", "name": "SGTIN"}
        });
        assert_eq!(explicit_ids(&raw), vec!["bridge", "link", "sgtin"]);
        assert!(explicit_ids(&json!("bridge")).is_empty());
    }

    #[test]
    fn test_not_a_dictionary() {
        let mut ctx = context();
        assert!(validate(&path(), &json!("bridge"), &mut ctx).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let mut ctx = context();
        let raw = json!({"uart_id": "uart_bus", "reset_output": "reset_line", "SGTIN": {"name": "s"}});
        let config = validate(&path(), &raw, &mut ctx).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["update_interval"], "10s");
        assert_eq!(value["SGTIN"]["entity_category"], "diagnostic");
        assert!(value.get("red_led").is_none());
    }
}
