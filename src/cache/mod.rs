//! Cache Module
//!
//! Bounded in-memory memoization with LRU eviction.

mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use key::CacheKey;
pub use lru::RecencyTracker;
pub use stats::CacheStats;
pub use store::LruStore;
