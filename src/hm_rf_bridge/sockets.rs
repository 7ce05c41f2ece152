use crate::components::socket::SocketLedger;
use crate::error::Result;

use super::schema::BridgeConfig;

/// Label the bridge's socket claims are booked under.
pub const SOCKET_LABEL: &str = "HmRFBridge";

/// One listening socket plus one concurrent client connection.
pub const SOCKETS_NEEDED: u32 = 2;

/// Book the bridge's sockets. Independent of which sensors are configured.
pub fn consume_sockets(config: &BridgeConfig, ledger: &mut SocketLedger) -> Result<()> {
    ledger.consume(SOCKETS_NEEDED, SOCKET_LABEL, &config.id)
}
