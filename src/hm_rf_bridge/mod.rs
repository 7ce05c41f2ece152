//! The `hm_rf_bridge` component.
//!
//! A HomeMatic radio module (HM-MOD-RPI-PCB or RPI-RF-MOD) attached over a UART
//! and exposed to the network by the bridge firmware. This module covers the
//! build-time side only:
//!
//! 1. [`schema::validate`] checks the user's entry and resolves references,
//! 2. [`sockets::consume_sockets`] books the sockets the bridge needs,
//! 3. [`final_validate::final_validate`] inspects the full configuration and
//!    pins the uart to the module's link parameters,
//! 4. [`to_code::to_code`] creates the [`HmRfBridge`] and registers it.

pub mod device;
pub mod final_validate;
pub mod schema;
pub mod sockets;
pub mod to_code;

pub use device::HmRfBridge;
pub use final_validate::final_validate;
pub use schema::BridgeConfig;
pub use to_code::to_code;

use serde_json::Value;

use crate::build::context::BuildContext;
use crate::build::path::ConfigPath;
use crate::constants::keys;
use crate::error::Result;

/// Domains that must be part of the configuration for the bridge to work.
pub const DEPENDENCIES: [&str; 2] = [keys::DOMAIN_UART, keys::DOMAIN_NETWORK];

/// Domains pulled into the build whenever a bridge is configured.
pub const AUTO_LOAD: [&str; 3] = [
    keys::DOMAIN_BINARY_SENSOR,
    keys::DOMAIN_TEXT_SENSOR,
    keys::DOMAIN_SOCKET,
];

/// Schema validation followed by the socket reservation.
pub fn validate_config(
    path: &ConfigPath,
    raw: &Value,
    ctx: &mut BuildContext,
) -> Result<BridgeConfig> {
    let config = schema::validate(path, raw, ctx)?;
    sockets::consume_sockets(&config, &mut ctx.sockets)?;
    Ok(config)
}
