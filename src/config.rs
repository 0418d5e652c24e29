//! System Configuration
//!
//! Channel capacity and identifier starting points for the resource actors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

pub const ENV_CHANNEL_BUFFER: &str = "RESTAURANT_CHANNEL_BUFFER";
pub const ENV_DISH_ID_START: &str = "RESTAURANT_DISH_ID_START";
pub const ENV_ORDER_ID_START: &str = "RESTAURANT_ORDER_ID_START";

/// Restaurant system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel (default: 32)
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,

    /// First generated dish id (default: 1)
    #[serde(default = "default_id_start")]
    pub dish_id_start: u64,

    /// First generated order id (default: 1)
    #[serde(default = "default_id_start")]
    pub order_id_start: u64,
}

fn default_channel_buffer() -> usize {
    32
}

fn default_id_start() -> u64 {
    1
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
            dish_id_start: default_id_start(),
            order_id_start: default_id_start(),
        }
    }
}

impl SystemConfig {
    /// Create a new config with the specified channel capacity. A capacity of 0
    /// keeps the default.
    pub fn with_channel_buffer(channel_buffer: usize) -> Self {
        let mut config = Self::default();
        if channel_buffer > 0 {
            config.channel_buffer = channel_buffer;
        } else {
            warn!("Ignoring zero channel buffer");
        }
        config
    }

    /// The capacity to open actor channels with. Never 0, even when a
    /// deserialized config says so.
    pub fn channel_capacity(&self) -> usize {
        if self.channel_buffer > 0 {
            self.channel_buffer
        } else {
            warn!(default = default_channel_buffer(), "Zero channel buffer, using default");
            default_channel_buffer()
        }
    }

    /// Defaults, overridden by any `RESTAURANT_*` variable that parses.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let mut channel_buffer = config.channel_buffer;
        override_from(&lookup, ENV_CHANNEL_BUFFER, &mut channel_buffer);
        if channel_buffer > 0 {
            config.channel_buffer = channel_buffer;
        } else {
            warn!(key = ENV_CHANNEL_BUFFER, "Ignoring zero channel buffer");
        }
        override_from(&lookup, ENV_DISH_ID_START, &mut config.dish_id_start);
        override_from(&lookup, ENV_ORDER_ID_START, &mut config.order_id_start);
        config
    }
}

fn override_from<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, field: &mut T) {
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *field = value,
            Err(_) => warn!(key, value = %raw, "Ignoring unparsable setting"),
        }
    }
}
