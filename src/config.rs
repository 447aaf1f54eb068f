//! Configuration Module
//!
//! Handles the environment-driven gate that decides whether the address
//! cache is installed at process start, and with what capacity.

use std::env;

// == Public Constants ==
/// Environment variable holding the desired address cache capacity.
pub const ADDR_CACHE_ENV_VAR: &str = "STACKS_ADDRESS_CACHE_SIZE";

/// Address cache configuration.
///
/// Loaded once at process start in normal operation. A `None` capacity
/// means the encoder runs uncached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of memoized addresses, or None to disable caching
    pub address_cache_size: Option<usize>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `STACKS_ADDRESS_CACHE_SIZE` - cache capacity; absent, empty,
    ///   non-numeric, or non-positive values all disable the cache
    pub fn from_env() -> Self {
        Self {
            address_cache_size: env::var(ADDR_CACHE_ENV_VAR)
                .ok()
                .and_then(|v| parse_capacity(&v)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address_cache_size: None,
        }
    }
}

// == Capacity Parsing ==
/// Parses a capacity setting. Anything that is not a positive integer
/// (including negative numbers and garbage) disables the cache rather
/// than erroring, so a misconfigured environment never crashes startup.
fn parse_capacity(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n as usize)
}
