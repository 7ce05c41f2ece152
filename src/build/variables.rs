//! Objects instantiated so far, looked up by id.

use std::collections::HashMap;
use std::rc::Rc;

use crate::components::binary_sensor::BinarySensor;
use crate::components::output::BinaryOutput;
use crate::components::text_sensor::TextSensor;
use crate::components::uart::UartComponent;
use crate::error::{BuildError, Result};
use crate::hm_rf_bridge::HmRfBridge;

#[derive(Debug, Clone)]
pub enum Variable {
    Uart(Rc<UartComponent>),
    Output(Rc<BinaryOutput>),
    BinarySensor(Rc<BinarySensor>),
    TextSensor(Rc<TextSensor>),
    HmRfBridge(Rc<HmRfBridge>),
}

#[derive(Debug, Default)]
pub struct Variables {
    by_id: HashMap<String, Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: impl Into<String>, variable: Variable) {
        self.by_id.insert(id.into(), variable);
    }

    /// The uart instantiated for `id`; `field` names the config key that referenced it.
    pub fn get_uart(&self, field: &str, id: &str) -> Result<Rc<UartComponent>> {
        match self.by_id.get(id) {
            Some(Variable::Uart(uart)) => Ok(Rc::clone(uart)),
            _ => Err(BuildError::unresolved(field, id)),
        }
    }

    pub fn get_output(&self, field: &str, id: &str) -> Result<Rc<BinaryOutput>> {
        match self.by_id.get(id) {
            Some(Variable::Output(output)) => Ok(Rc::clone(output)),
            _ => Err(BuildError::unresolved(field, id)),
        }
    }

    pub fn get_hm_rf_bridge(&self, id: &str) -> Option<Rc<HmRfBridge>> {
        match self.by_id.get(id) {
            Some(Variable::HmRfBridge(bridge)) => Some(Rc::clone(bridge)),
            _ => None,
        }
    }

    pub fn get_binary_sensor(&self, id: &str) -> Option<Rc<BinarySensor>> {
        match self.by_id.get(id) {
            Some(Variable::BinarySensor(sensor)) => Some(Rc::clone(sensor)),
            _ => None,
        }
    }

    pub fn get_text_sensor(&self, id: &str) -> Option<Rc<TextSensor>> {
        match self.by_id.get(id) {
            Some(Variable::TextSensor(sensor)) => Some(Rc::clone(sensor)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_is_unresolved() {
        let variables = Variables::new();
        let err = variables.get_output("reset_output", "reset_line").unwrap_err();
        assert_eq!(
            err.to_string(),
            "reset_output: 'reset_line' has not been instantiated yet"
        );
    }

    #[test]
    fn test_wrong_kind_is_unresolved() {
        let mut variables = Variables::new();
        variables.add(
            "reset_line",
            Variable::Output(Rc::new(BinaryOutput {
                id: "reset_line".to_string(),
                pin: 4,
                inverted: false,
            })),
        );
        assert!(variables.get_output("reset_output", "reset_line").is_ok());
        assert!(variables.get_uart("uart_id", "reset_line").is_err());
    }
}
