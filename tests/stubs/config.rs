#![allow(dead_code)]
// Not every test binary uses every stub

pub const MINIMAL: &str = r#"
{
    "ethernet": {"type": "LAN8720", "mdc_pin": 23, "mdio_pin": 18},
    "uart": [
      {"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}
    ],
    "output": [
      {"id": "reset_line", "pin": 4}
    ],
    "hm_rf_bridge": [
      {"id": "bridge", "uart_id": "uart_bus", "reset_output": "reset_line"}
    ]
}
"#;

pub const FULL: &str = r#"
{
    "logger": {"level": "DEBUG"},
    "ethernet": {"type": "LAN8720", "mdc_pin": 23, "mdio_pin": 18},
    "uart": [
      {"id": "uart_bus", "tx_pin": 17, "rx_pin": 16, "rx_buffer_size": 1024}
    ],
    "output": [
      {"id": "reset_line", "pin": 4},
      {"id": "led_red", "pin": 32},
      {"id": "led_green", "pin": 33},
      {"id": "led_blue", "pin": 25, "inverted": true}
    ],
    "hm_rf_bridge": [
      {
        "id": "bridge",
        "uart_id": "uart_bus",
        "reset_output": "reset_line",
        "red_led": "led_red",
        "green_led": "led_green",
        "blue_led": "led_blue",
        "connected": {"name": "CCU connected"},
        "radio_module_type": {"name": "Radio module"},
        "firmware_version": {"name": "Radio firmware"},
        "serial": {"name": "Radio serial"},
        "SGTIN": {"name": "Radio SGTIN"},
        "update_interval": "5s"
      }
    ]
}
"#;

pub const CONNECTED_ONLY: &str = r#"
{
    "ethernet": {"type": "LAN8720"},
    "uart": {"id": "uart_bus", "tx_pin": 17, "rx_pin": 16},
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": {
        "uart_id": "uart_bus",
        "reset_output": "reset_line",
        "connected": {"id": "ccu_link", "name": "CCU connected"}
    }
}
"#;

pub const WIFI: &str = r#"
{
    "wifi": {"ssid": "home", "password": "secret-password"},
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [{"uart_id": "uart_bus", "reset_output": "reset_line"}]
}
"#;

pub const INTERVAL_30S: &str = r#"
{
    "ethernet": {"type": "LAN8720"},
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [
      {"id": "bridge", "uart_id": "uart_bus", "reset_output": "reset_line", "update_interval": "30s"}
    ]
}
"#;

pub const CONFLICTING_BAUD_RATE: &str = r#"
{
    "ethernet": {"type": "LAN8720"},
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16, "baud_rate": 9600}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [{"uart_id": "uart_bus", "reset_output": "reset_line"}]
}
"#;

pub const TWO_BRIDGES_FOUR_SOCKETS: &str = r#"
{
    "ethernet": {"type": "LAN8720"},
    "socket": {"max_sockets": 3},
    "uart": [
      {"id": "uart_a", "tx_pin": 17, "rx_pin": 16},
      {"id": "uart_b", "tx_pin": 19, "rx_pin": 18}
    ],
    "output": [{"id": "reset_a", "pin": 4}, {"id": "reset_b", "pin": 5}],
    "hm_rf_bridge": [
      {"uart_id": "uart_a", "reset_output": "reset_a"},
      {"uart_id": "uart_b", "reset_output": "reset_b"}
    ]
}
"#;

pub const NO_NETWORK: &str = r#"
{
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [{"uart_id": "uart_bus", "reset_output": "reset_line"}]
}
"#;

pub const UNKNOWN_UART: &str = r#"
{
    "ethernet": {"type": "LAN8720"},
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [{"uart_id": "uart_missing", "reset_output": "reset_line"}]
}
"#;

pub const INVALID_JSON: &str = "blah";

pub const NO_NETWORK_FOUR_SOCKETS: &str = r#"
{
    "socket": {"max_sockets": 3},
    "uart": [
      {"id": "uart_a", "tx_pin": 17, "rx_pin": 16},
      {"id": "uart_b", "tx_pin": 19, "rx_pin": 18}
    ],
    "output": [{"id": "reset_a", "pin": 4}, {"id": "reset_b", "pin": 5}],
    "hm_rf_bridge": [
      {"uart_id": "uart_a", "reset_output": "reset_a"},
      {"uart_id": "uart_b", "reset_output": "reset_b"}
    ]
}
"#;

pub const EXPLICIT_ID_AFTER_GENERATED: &str = r#"
{
    "ethernet": {"type": "LAN8720"},
    "uart": [
      {"id": "uart_a", "tx_pin": 17, "rx_pin": 16},
      {"id": "uart_b", "tx_pin": 19, "rx_pin": 18}
    ],
    "output": [{"id": "reset_a", "pin": 4}, {"id": "reset_b", "pin": 5}],
    "hm_rf_bridge": [
      {
        "uart_id": "uart_a",
        "reset_output": "reset_a",
        "connected": {"name": "Bridge A connected"}
      },
      {
        "id": "hm_rf_bridge_id",
        "uart_id": "uart_b",
        "reset_output": "reset_b",
        "connected": {"id": "connected_sensor_id", "name": "Bridge B connected"}
      }
    ]
}
"#;

pub const NULL_WIFI: &str = r#"
{
    "wifi": null,
    "ethernet": {"type": "LAN8720"},
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [{"uart_id": "uart_bus", "reset_output": "reset_line"}]
}
"#;

pub const NULL_WIFI_ONLY: &str = r#"
{
    "wifi": null,
    "uart": [{"id": "uart_bus", "tx_pin": 17, "rx_pin": 16}],
    "output": [{"id": "reset_line", "pin": 4}],
    "hm_rf_bridge": [{"uart_id": "uart_bus", "reset_output": "reset_line"}]
}
"#;
