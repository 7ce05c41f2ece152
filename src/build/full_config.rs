use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::components::output::OutputConfig;
use crate::components::uart::UartConfig;
use crate::constants::keys;
use crate::hm_rf_bridge::BridgeConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SocketSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sockets: Option<u32>,
}

/// The whole configuration after every component passed its own schema.
///
/// Final validation works on this tree and may rewrite parts of it that
/// belong to other components.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FullConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uart: Vec<UartConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<OutputConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<SocketSettings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hm_rf_bridge: Vec<BridgeConfig>,
    /// Domains this crate does not validate, kept as written.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl FullConfig {
    pub fn uart(&self, id: &str) -> Option<&UartConfig> {
        self.uart.iter().find(|u| u.id == id)
    }

    pub fn uart_mut(&mut self, id: &str) -> Option<&mut UartConfig> {
        self.uart.iter_mut().find(|u| u.id == id)
    }

    /// Whether `domain` is present. `network` is provided by either WiFi or Ethernet.
    pub fn has_domain(&self, domain: &str) -> bool {
        match domain {
            keys::DOMAIN_UART => !self.uart.is_empty(),
            keys::DOMAIN_OUTPUT => !self.output.is_empty(),
            keys::DOMAIN_WIFI => self.wifi.is_some(),
            keys::DOMAIN_ETHERNET => self.ethernet.is_some(),
            keys::DOMAIN_SOCKET => self.socket.is_some(),
            keys::DOMAIN_HM_RF_BRIDGE => !self.hm_rf_bridge.is_empty(),
            keys::DOMAIN_NETWORK => {
                self.wifi.is_some() || self.ethernet.is_some() || self.other.contains_key(domain)
            }
            other => self.other.contains_key(other),
        }
    }
}
