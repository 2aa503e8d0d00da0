//! Cache Module
//!
//! Provides the in-memory key-value store with insertion-ordered listing,
//! shallow-merge updates and collision-safe key generation.

mod keygen;
mod merge;
mod order;
mod store;


// Re-export public types
pub use keygen::KeyGenerator;
pub use merge::shallow_merge;
pub use order::InsertionOrder;
pub use store::{CacheStore, Entry, StoreOptions, Upserted};
