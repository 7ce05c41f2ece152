//! Socket accounting.
//!
//! Components declare how many sockets they need while they are validated.
//! Nothing is opened here; the ledger only makes sure the sum of all demands
//! fits the number of sockets the network stack will be built with.

use std::collections::BTreeMap;
use std::env;

use itertools::Itertools;

use crate::constants::{defaults, envvars};
use crate::error::{BuildError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketLedger {
    capacity: u32,
    // (label, owner id) -> sockets
    consumers: BTreeMap<(String, String), u32>,
}

impl SocketLedger {
    pub fn new(capacity: u32) -> Self {
        SocketLedger {
            capacity,
            consumers: BTreeMap::new(),
        }
    }

    /// Capacity from the `socket.max_sockets` setting, then `HMRFB_MAX_SOCKETS`,
    /// then the built-in default.
    pub fn from_setting(max_sockets: Option<u32>) -> Self {
        let capacity = max_sockets
            .or_else(|| {
                env::var(envvars::MAX_SOCKETS)
                    .ok()
                    .and_then(|s| s.parse::<u32>().ok())
            })
            .unwrap_or(defaults::MAX_SOCKETS);
        SocketLedger::new(capacity)
    }

    /// Reserve `count` sockets for `owner` under `label`.
    ///
    /// Reserving again for the same (label, owner) replaces the earlier claim.
    pub fn consume(&mut self, count: u32, label: &str, owner: &str) -> Result<()> {
        let key = (label.to_string(), owner.to_string());
        let others: u32 = self
            .consumers
            .iter()
            .filter(|(k, _)| **k != key)
            .map(|(_, n)| n)
            .sum();
        let available = self.capacity.saturating_sub(others);

        if count > available {
            return Err(BuildError::ResourceExhausted {
                label: label.to_string(),
                requested: count,
                available,
            });
        }

        self.consumers.insert(key, count);
        log::debug!(
            "{} reserved {} socket(s) for '{}' ({}/{} in use)",
            label,
            count,
            owner,
            self.total(),
            self.capacity
        );
        Ok(())
    }

    pub fn total(&self) -> u32 {
        self.consumers.values().sum()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn reserved_by(&self, label: &str) -> u32 {
        self.consumers
            .iter()
            .filter(|((l, _), _)| l == label)
            .map(|(_, n)| n)
            .sum()
    }

    /// Human readable per-label breakdown, e.g. `HmRFBridge=4, api=1`.
    pub fn summary(&self) -> String {
        self.consumers
            .iter()
            .into_group_map_by(|((label, _), _)| label.clone())
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .map(|(label, claims)| {
                let sum: u32 = claims.iter().map(|(_, n)| **n).sum();
                format!("{label}={sum}")
            })
            .join(", ")
    }
}

impl Default for SocketLedger {
    fn default() -> Self {
        SocketLedger::new(defaults::MAX_SOCKETS)
    }
}
