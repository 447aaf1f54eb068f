//! c32-addr-cache - bounded LRU memoization for c32check address encoding
//!
//! Encoding a (version, hash160) pair into a checksummed Stacks address
//! costs two SHA256 passes per call. This crate wraps the pure encoder in
//! an optional, bounded, least-recently-used cache that can be installed
//! and removed at runtime without touching any call site: callers always
//! invoke [`c32_address`], which routes through the cache only while one
//! is installed.
//!
//! The cache is off by default. Set the `STACKS_ADDRESS_CACHE_SIZE`
//! environment variable to a positive integer and call
//! [`init_from_env`] at startup to enable it.

pub mod c32;
pub mod cache;
pub mod config;
pub mod error;
pub mod interceptor;

pub use c32::c32_address_decode;
pub use config::{Config, ADDR_CACHE_ENV_VAR};
pub use error::{C32Error, Result};
pub use interceptor::{
    c32_address, current_store, init_from_env, install, is_installed, restore,
};
