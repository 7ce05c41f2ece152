//! Instantiation of a validated bridge configuration.

use std::rc::Rc;

use crate::build::scheduler::Scheduler;
use crate::build::variables::{Variable, Variables};
use crate::components::binary_sensor::new_binary_sensor;
use crate::components::text_sensor::{new_text_sensor, TextSensor, TextSensorConfig};
use crate::constants::keys;
use crate::error::Result;

use super::device::HmRfBridge;
use super::schema::BridgeConfig;

fn new_text_sensor_var(variables: &mut Variables, config: &TextSensorConfig) -> Rc<TextSensor> {
    let sensor = new_text_sensor(config);
    variables.add(sensor.id.clone(), Variable::TextSensor(Rc::clone(&sensor)));
    sensor
}

/// Build the bridge, attach its configured peripherals and register it for polling.
///
/// The uart and every referenced output must already be instantiated.
pub fn to_code(
    config: &BridgeConfig,
    variables: &mut Variables,
    scheduler: &mut Scheduler,
) -> Result<Rc<HmRfBridge>> {
    let uart = variables.get_uart(keys::UART_ID, &config.uart_id)?;
    let reset = variables.get_output(keys::RESET_OUTPUT, &config.reset_output)?;
    let bridge = Rc::new(HmRfBridge::new(config.id.clone(), uart, reset));

    if let Some(id) = &config.red_led {
        bridge.set_red_led(variables.get_output(keys::RED_LED, id)?)?;
    }
    if let Some(id) = &config.green_led {
        bridge.set_green_led(variables.get_output(keys::GREEN_LED, id)?)?;
    }
    if let Some(id) = &config.blue_led {
        bridge.set_blue_led(variables.get_output(keys::BLUE_LED, id)?)?;
    }

    if let Some(sensor_config) = &config.connected {
        let sensor = new_binary_sensor(sensor_config);
        variables.add(sensor.id.clone(), Variable::BinarySensor(Rc::clone(&sensor)));
        bridge.set_connected_sensor(sensor)?;
    }
    if let Some(sensor_config) = &config.radio_module_type {
        bridge.set_radio_module_sensor(new_text_sensor_var(variables, sensor_config))?;
    }
    if let Some(sensor_config) = &config.firmware_version {
        bridge.set_firmware_sensor(new_text_sensor_var(variables, sensor_config))?;
    }
    if let Some(sensor_config) = &config.serial {
        bridge.set_serial_sensor(new_text_sensor_var(variables, sensor_config))?;
    }
    if let Some(sensor_config) = &config.sgtin {
        bridge.set_sgtin_sensor(new_text_sensor_var(variables, sensor_config))?;
    }

    variables.add(config.id.clone(), Variable::HmRfBridge(Rc::clone(&bridge)));
    scheduler.register_polling_component(bridge.clone(), config.update_interval);

    log::info!(
        "Instantiated hm_rf_bridge '{}' on uart '{}' with {} optional peripheral(s)",
        config.id,
        config.uart_id,
        bridge.attached_count()
    );
    Ok(bridge)
}
