//! The runtime object produced for one configured bridge.

use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::build::scheduler::{setup_priority, Component};
use crate::components::binary_sensor::BinarySensor;
use crate::components::output::BinaryOutput;
use crate::components::text_sensor::TextSensor;
use crate::components::uart::UartComponent;
use crate::error::{BuildError, Result};

const TAG: &str = "HmRFBridge";

/// Bridge bound to its uart and reset line.
///
/// Every optional peripheral lives in its own slot that can be filled once;
/// an empty slot means the signal is not reported.
#[derive(Debug)]
pub struct HmRfBridge {
    id: String,
    uart: Rc<UartComponent>,
    reset: Rc<BinaryOutput>,
    red_led: OnceCell<Rc<BinaryOutput>>,
    green_led: OnceCell<Rc<BinaryOutput>>,
    blue_led: OnceCell<Rc<BinaryOutput>>,
    connected_sensor: OnceCell<Rc<BinarySensor>>,
    radio_module_sensor: OnceCell<Rc<TextSensor>>,
    firmware_sensor: OnceCell<Rc<TextSensor>>,
    serial_sensor: OnceCell<Rc<TextSensor>>,
    sgtin_sensor: OnceCell<Rc<TextSensor>>,
}

fn attach<T>(slot: &OnceCell<T>, value: T, name: &str) -> Result<()> {
    slot.set(value).map_err(|_| BuildError::AlreadyAttached {
        slot: name.to_string(),
    })
}

impl HmRfBridge {
    pub fn new(id: impl Into<String>, uart: Rc<UartComponent>, reset: Rc<BinaryOutput>) -> Self {
        HmRfBridge {
            id: id.into(),
            uart,
            reset,
            red_led: OnceCell::new(),
            green_led: OnceCell::new(),
            blue_led: OnceCell::new(),
            connected_sensor: OnceCell::new(),
            radio_module_sensor: OnceCell::new(),
            firmware_sensor: OnceCell::new(),
            serial_sensor: OnceCell::new(),
            sgtin_sensor: OnceCell::new(),
        }
    }

    pub fn set_red_led(&self, led: Rc<BinaryOutput>) -> Result<()> {
        attach(&self.red_led, led, "red_led")
    }

    pub fn set_green_led(&self, led: Rc<BinaryOutput>) -> Result<()> {
        attach(&self.green_led, led, "green_led")
    }

    pub fn set_blue_led(&self, led: Rc<BinaryOutput>) -> Result<()> {
        attach(&self.blue_led, led, "blue_led")
    }

    pub fn set_connected_sensor(&self, sensor: Rc<BinarySensor>) -> Result<()> {
        attach(&self.connected_sensor, sensor, "connected")
    }

    pub fn set_radio_module_sensor(&self, sensor: Rc<TextSensor>) -> Result<()> {
        attach(&self.radio_module_sensor, sensor, "radio_module_type")
    }

    pub fn set_firmware_sensor(&self, sensor: Rc<TextSensor>) -> Result<()> {
        attach(&self.firmware_sensor, sensor, "firmware_version")
    }

    pub fn set_serial_sensor(&self, sensor: Rc<TextSensor>) -> Result<()> {
        attach(&self.serial_sensor, sensor, "serial")
    }

    pub fn set_sgtin_sensor(&self, sensor: Rc<TextSensor>) -> Result<()> {
        attach(&self.sgtin_sensor, sensor, "SGTIN")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn uart(&self) -> &Rc<UartComponent> {
        &self.uart
    }

    pub fn reset_output(&self) -> &Rc<BinaryOutput> {
        &self.reset
    }

    pub fn red_led(&self) -> Option<&Rc<BinaryOutput>> {
        self.red_led.get()
    }

    pub fn green_led(&self) -> Option<&Rc<BinaryOutput>> {
        self.green_led.get()
    }

    pub fn blue_led(&self) -> Option<&Rc<BinaryOutput>> {
        self.blue_led.get()
    }

    pub fn connected_sensor(&self) -> Option<&Rc<BinarySensor>> {
        self.connected_sensor.get()
    }

    pub fn radio_module_sensor(&self) -> Option<&Rc<TextSensor>> {
        self.radio_module_sensor.get()
    }

    pub fn firmware_sensor(&self) -> Option<&Rc<TextSensor>> {
        self.firmware_sensor.get()
    }

    pub fn serial_sensor(&self) -> Option<&Rc<TextSensor>> {
        self.serial_sensor.get()
    }

    pub fn sgtin_sensor(&self) -> Option<&Rc<TextSensor>> {
        self.sgtin_sensor.get()
    }

    /// Number of optional slots that have been filled.
    pub fn attached_count(&self) -> usize {
        [
            self.red_led.get().is_some(),
            self.green_led.get().is_some(),
            self.blue_led.get().is_some(),
            self.connected_sensor.get().is_some(),
            self.radio_module_sensor.get().is_some(),
            self.firmware_sensor.get().is_some(),
            self.serial_sensor.get().is_some(),
            self.sgtin_sensor.get().is_some(),
        ]
        .iter()
        .filter(|attached| **attached)
        .count()
    }
}

impl Component for HmRfBridge {
    fn component_id(&self) -> &str {
        &self.id
    }

    // Needs the network up before the bridge's listener starts.
    fn setup_priority(&self) -> f32 {
        setup_priority::ETHERNET
    }

    fn dump_config(&self) {
        log::info!("{}: hm_rf_bridge Component Configuration:", TAG);
        log::info!("{}:   uart number {}", TAG, self.uart.hw_serial_number);
        log::info!("{}:   Reset Output: {}", TAG, self.reset.id);
        if self.red_led().is_some() {
            log::info!("{}:   Red LED: Configured", TAG);
        }
        if self.green_led().is_some() {
            log::info!("{}:   Green LED: Configured", TAG);
        }
        if self.blue_led().is_some() {
            log::info!("{}:   Blue LED: Configured", TAG);
        }
        if let Some(sensor) = self.connected_sensor() {
            log::info!("{}:   Connected Sensor: '{}'", TAG, sensor.name);
        }
        for (label, sensor) in [
            ("Radio Module Type", self.radio_module_sensor()),
            ("Firmware Version", self.firmware_sensor()),
            ("Serial", self.serial_sensor()),
            ("SGTIN", self.sgtin_sensor()),
        ] {
            if let Some(sensor) = sensor {
                log::info!("{}:   {} Sensor: '{}'", TAG, label, sensor.name);
            }
        }
    }
}
