pub const LOGGING_LEVEL: &str = "LOGGING_LEVEL";
pub const MAX_SOCKETS: &str = "HMRFB_MAX_SOCKETS";
pub const CONFIG_DIR: &str = "HMRFB_CONFIG_DIR";
