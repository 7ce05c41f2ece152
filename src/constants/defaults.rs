use std::time::Duration;

pub const LOG_LEVEL: &str = "INFO";

pub const UPDATE_INTERVAL: Duration = Duration::from_secs(10);

/// Sockets available to all components of one build unless `socket.max_sockets` says otherwise.
pub const MAX_SOCKETS: u32 = 8;

pub const UART_RX_BUFFER_SIZE: usize = 256;
