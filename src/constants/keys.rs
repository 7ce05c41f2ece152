// Top-level domains of the full configuration
pub const DOMAIN_UART: &str = "uart";
pub const DOMAIN_OUTPUT: &str = "output";
pub const DOMAIN_WIFI: &str = "wifi";
pub const DOMAIN_ETHERNET: &str = "ethernet";
pub const DOMAIN_NETWORK: &str = "network";
pub const DOMAIN_SOCKET: &str = "socket";
pub const DOMAIN_BINARY_SENSOR: &str = "binary_sensor";
pub const DOMAIN_TEXT_SENSOR: &str = "text_sensor";
pub const DOMAIN_HM_RF_BRIDGE: &str = "hm_rf_bridge";

// Keys shared by every component
pub const ID: &str = "id";
pub const UPDATE_INTERVAL: &str = "update_interval";

// Bridge keys
pub const UART_ID: &str = "uart_id";
pub const RESET_OUTPUT: &str = "reset_output";
pub const RED_LED: &str = "red_led";
pub const GREEN_LED: &str = "green_led";
pub const BLUE_LED: &str = "blue_led";
pub const CONNECTED: &str = "connected";
pub const RADIO_MODULE_TYPE: &str = "radio_module_type";
pub const FIRMWARE_VERSION: &str = "firmware_version";
pub const SERIAL: &str = "serial";
pub const SGTIN: &str = "SGTIN";
