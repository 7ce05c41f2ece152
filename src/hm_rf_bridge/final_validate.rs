//! Checks that need the whole configuration tree.

use crate::build::context::BuildContext;
use crate::build::full_config::FullConfig;
use crate::components::uart::{self, Parity, UartRequirement};
use crate::constants::keys;
use crate::error::{BuildError, Result};

use super::schema::BridgeConfig;

/// Link parameters of the radio module's serial interface.
pub const UART_REQUIREMENT: UartRequirement = UartRequirement {
    baud_rate: Some(115200),
    require_tx: true,
    require_rx: true,
    data_bits: Some(8),
    parity: Some(Parity::None),
    stop_bits: Some(1),
};

pub const WIFI_ADVISORY: &str =
    "Because of latency requirements, it is not recommended to use this component with WiFi";

/// Warn about WiFi and pin the referenced uart to 115200 8N1 with TX and RX.
///
/// Must run before the uart is instantiated.
pub fn final_validate(
    config: &BridgeConfig,
    full: &mut FullConfig,
    ctx: &mut BuildContext,
) -> Result<()> {
    if full.wifi.is_some() {
        ctx.advise(&config.id, WIFI_ADVISORY);
    }

    let uart_config = full.uart_mut(&config.uart_id).ok_or_else(|| {
        BuildError::schema(
            format!("{}->{}", config.id, keys::UART_ID),
            format!("uart '{}' is not part of the configuration", config.uart_id),
        )
    })?;

    uart::final_validate_device_schema(keys::DOMAIN_HM_RF_BRIDGE, &UART_REQUIREMENT, uart_config)?;
    log::debug!(
        "{}: uart '{}' pinned to {} baud 8N1",
        config.id,
        config.uart_id,
        uart_config.baud_rate.unwrap_or_default()
    );
    Ok(())
}
