//! PaneOS Storage Layer
//!
//! A minimal durable key-value abstraction used by the desktop core to
//! persist layout snapshots:
//!
//! - **Service**: [`KvStore`] trait for read/write/remove by key
//! - **Memory**: [`MemoryStore`], a non-durable backend for tests and
//!   headless use
//!
//! # Design Principles
//!
//! 1. **Injected, never global**: consumers receive a store as an
//!    explicit dependency so tests can substitute [`MemoryStore`]
//! 2. **Wholesale writes**: values are written atomically per key,
//!    never patched incrementally
//! 3. **Interior mutability**: store methods take `&self` so a single
//!    store can be shared by reference

pub mod error;
pub mod memory;

use std::rc::Rc;

pub use error::StoreError;
pub use memory::MemoryStore;

/// Key-value storage service interface.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key` (create or overwrite).
    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove the entry under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Shared handles delegate to the underlying store, so a test can keep
/// a reference to the same backend it handed to a consumer.
impl<S: KvStore + ?Sized> KvStore for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
