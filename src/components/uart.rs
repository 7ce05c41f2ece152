//! UART bus subsystem.
//!
//! Besides validating and instantiating `uart:` entries, this module owns the
//! hook other components use during final validation to demand specific link
//! parameters from the bus they talk over.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::path::ConfigPath;
use crate::build::registry::{Capability, IdRegistry};
use crate::build::scheduler::{setup_priority, Component};
use crate::constants::defaults;
use crate::error::{BuildError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Parity {
    None,
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::None => f.write_str("NONE"),
            Parity::Even => f.write_str("EVEN"),
            Parity::Odd => f.write_str("ODD"),
        }
    }
}

fn default_rx_buffer_size() -> usize {
    defaults::UART_RX_BUFFER_SIZE
}

/// One `uart:` entry. Link parameters stay `None` until the user or a device's
/// final validation sets them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UartConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_pin: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rx_pin: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baud_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_bits: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parity: Option<Parity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_bits: Option<u8>,
    #[serde(default = "default_rx_buffer_size")]
    pub rx_buffer_size: usize,
}

pub fn validate(path: &ConfigPath, raw: &Value, ids: &mut IdRegistry) -> Result<UartConfig> {
    let config: UartConfig = path.parse(raw)?;

    if config.baud_rate == Some(0) {
        return Err(BuildError::schema(
            path.join("baud_rate").to_string(),
            "baud_rate must be greater than 0",
        ));
    }
    if let Some(bits) = config.data_bits {
        if !(5..=8).contains(&bits) {
            return Err(BuildError::schema(
                path.join("data_bits").to_string(),
                format!("data_bits must be between 5 and 8, got {bits}"),
            ));
        }
    }
    if let Some(bits) = config.stop_bits {
        if !(1..=2).contains(&bits) {
            return Err(BuildError::schema(
                path.join("stop_bits").to_string(),
                format!("stop_bits must be 1 or 2, got {bits}"),
            ));
        }
    }
    if config.tx_pin.is_none() && config.rx_pin.is_none() {
        return Err(BuildError::schema(
            path.to_string(),
            "at least one of tx_pin or rx_pin is required",
        ));
    }

    ids.declare(&path.join("id"), &config.id, Capability::Uart)?;
    Ok(config)
}

/// Link parameters a device needs from its bus. `None` means "don't care".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UartRequirement {
    pub baud_rate: Option<u32>,
    pub require_tx: bool,
    pub require_rx: bool,
    pub data_bits: Option<u8>,
    pub parity: Option<Parity>,
    pub stop_bits: Option<u8>,
}

fn check<T: PartialEq + fmt::Display>(
    component: &str,
    parameter: &str,
    required: Option<T>,
    actual: Option<T>,
) -> Result<()> {
    match (required, actual) {
        (Some(required), Some(actual)) if required != actual => {
            Err(BuildError::ConflictingRequirement {
                component: component.to_string(),
                parameter: parameter.to_string(),
                required: required.to_string(),
                actual: actual.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn check_pin(component: &str, parameter: &str, required: bool, pin: Option<u8>) -> Result<()> {
    if required && pin.is_none() {
        return Err(BuildError::ConflictingRequirement {
            component: component.to_string(),
            parameter: parameter.to_string(),
            required: "a pin".to_string(),
            actual: "unset".to_string(),
        });
    }
    Ok(())
}

/// Assert `requirement` against `uart`, then fill every parameter the user left unset.
///
/// Nothing is written unless all parameters are compatible, so a failed call
/// leaves `uart` untouched. Applying the same requirement twice is a no-op.
pub fn final_validate_device_schema(
    component: &str,
    requirement: &UartRequirement,
    uart: &mut UartConfig,
) -> Result<()> {
    check_pin(component, "tx_pin", requirement.require_tx, uart.tx_pin)?;
    check_pin(component, "rx_pin", requirement.require_rx, uart.rx_pin)?;
    check(component, "baud_rate", requirement.baud_rate, uart.baud_rate)?;
    check(component, "data_bits", requirement.data_bits, uart.data_bits)?;
    check(component, "parity", requirement.parity, uart.parity)?;
    check(component, "stop_bits", requirement.stop_bits, uart.stop_bits)?;

    uart.baud_rate = uart.baud_rate.or(requirement.baud_rate);
    uart.data_bits = uart.data_bits.or(requirement.data_bits);
    uart.parity = uart.parity.or(requirement.parity);
    uart.stop_bits = uart.stop_bits.or(requirement.stop_bits);

    Ok(())
}

#[derive(Debug, PartialEq)]
pub struct UartComponent {
    pub id: String,
    pub hw_serial_number: u8,
    pub tx_pin: Option<u8>,
    pub rx_pin: Option<u8>,
    pub baud_rate: u32,
    pub data_bits: u8,
    pub parity: Parity,
    pub stop_bits: u8,
    pub rx_buffer_size: usize,
}

impl Component for UartComponent {
    fn component_id(&self) -> &str {
        &self.id
    }

    fn setup_priority(&self) -> f32 {
        setup_priority::BUS
    }

    fn dump_config(&self) {
        log::info!("UART Bus '{}':", self.id);
        log::info!("  Number: {}", self.hw_serial_number);
        if let Some(pin) = self.tx_pin {
            log::info!("  TX Pin: GPIO{}", pin);
        }
        if let Some(pin) = self.rx_pin {
            log::info!("  RX Pin: GPIO{}", pin);
            log::info!("  RX Buffer Size: {}", self.rx_buffer_size);
        }
        log::info!("  Baud Rate: {} baud", self.baud_rate);
        log::info!("  Data Bits: {}", self.data_bits);
        log::info!("  Parity: {}", self.parity);
        log::info!("  Stop bits: {}", self.stop_bits);
    }
}

/// Instantiate a bus from its final configuration.
///
/// The baud rate has no default: it must come from the user or from a device
/// requirement applied during final validation.
pub fn new_uart(
    path: &ConfigPath,
    config: &UartConfig,
    hw_serial_number: u8,
) -> Result<Rc<UartComponent>> {
    let baud_rate = config.baud_rate.ok_or_else(|| {
        BuildError::schema(path.join("baud_rate").to_string(), "required key not provided")
    })?;

    Ok(Rc::new(UartComponent {
        id: config.id.clone(),
        hw_serial_number,
        tx_pin: config.tx_pin,
        rx_pin: config.rx_pin,
        baud_rate,
        data_bits: config.data_bits.unwrap_or(8),
        parity: config.parity.unwrap_or(Parity::None),
        stop_bits: config.stop_bits.unwrap_or(1),
        rx_buffer_size: config.rx_buffer_size,
    }))
}
