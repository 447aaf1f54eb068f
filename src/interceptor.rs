//! Encoder Interceptor Module
//!
//! Holds the process-wide indirection point the shared [`c32_address`]
//! entry point routes through. With no cache installed the entry point is
//! exactly the pure encoder; `install` swaps a bounded LRU store into the
//! slot and `restore` swaps it back out, without touching any call sites.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, trace};

use crate::c32;
use crate::cache::{CacheKey, LruStore};
use crate::config::Config;
use crate::error::Result;

// == Shared Types ==
/// The store type installed behind the encoder entry point.
pub type AddressLruCache = LruStore<CacheKey, String>;

/// Shared introspection handle to an installed store.
pub type SharedAddressCache = Arc<Mutex<AddressLruCache>>;

// == Interceptor State ==
/// Process-wide cache slot. `None` at process start: uncached by default.
static ADDRESS_CACHE: Mutex<Option<SharedAddressCache>> = Mutex::new(None);

/// Locks the slot. Cached values are pure-function results, so the state
/// behind a poisoned lock is still valid and the poison can be absorbed.
fn slot() -> MutexGuard<'static, Option<SharedAddressCache>> {
    ADDRESS_CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

// == Install ==
/// Installs a fresh address cache of the given capacity.
///
/// Re-installing silently replaces the previous store (and discards its
/// contents); the swap is logged so accidental double initialization is
/// visible. Fails on a zero capacity without changing the installed state.
pub fn install(capacity: usize) -> Result<()> {
    // Validate by constructing the store before the slot is touched, so a
    // bad capacity leaves the interceptor exactly as it was
    let store = AddressLruCache::new(capacity)?;
    let mut slot = slot();
    if slot.is_some() {
        debug!(capacity, "replacing previously installed address cache");
    }
    *slot = Some(Arc::new(Mutex::new(store)));
    info!(capacity, "address cache installed");
    Ok(())
}

// == Restore ==
/// Removes the installed cache, returning the entry point to the pure
/// encoder. No-op when nothing is installed.
pub fn restore() {
    if slot().take().is_some() {
        info!("address cache removed, encoder runs uncached");
    }
}

// == Introspection ==
/// Handle to the active store, if one is installed.
pub fn current_store() -> Option<SharedAddressCache> {
    slot().clone()
}

/// True while a cache is installed.
pub fn is_installed() -> bool {
    slot().is_some()
}

// == Configuration Gate ==
/// Evaluates the environment gate: installs a cache when
/// [`ADDR_CACHE_ENV_VAR`](crate::config::ADDR_CACHE_ENV_VAR) holds a
/// positive capacity, leaves the interceptor untouched otherwise.
///
/// Called once at process start in normal operation; exposed so operators
/// and tests can re-evaluate it on demand. Returns the capacity installed,
/// if any.
pub fn init_from_env() -> Result<Option<usize>> {
    let config = Config::from_env();
    match config.address_cache_size {
        Some(capacity) => {
            install(capacity)?;
            Ok(Some(capacity))
        }
        None => {
            debug!("address cache disabled by configuration");
            Ok(None)
        }
    }
}

// == Encoder Entry Point ==
/// Encodes a (version, hash160) pair as a c32 address, memoized through
/// the installed cache when one is present.
///
/// Hit, miss-and-fill and eviction happen under a single store lock, so
/// concurrent callers for the same key never leave the store inconsistent.
/// Encoding errors propagate unchanged and cache nothing.
pub fn c32_address(version: u8, hash160: &[u8]) -> Result<String> {
    // Snapshot the handle so encoding never holds the slot lock
    let cache = current_store();
    match cache {
        None => c32::c32_address(version, hash160),
        Some(cache) => {
            let key = CacheKey::new(version, hash160);
            let mut store = cache.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(address) = store.get(&key) {
                trace!(%key, "address cache hit");
                return Ok(address);
            }
            let address = c32::c32_address(version, hash160)?;
            store.put(key, address.clone());
            Ok(address)
        }
    }
}
