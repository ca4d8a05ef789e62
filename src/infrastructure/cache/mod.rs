//! Cache infrastructure - Cache implementations

mod factory;
mod file_store;
mod in_memory;
mod tiered;

pub use factory::{spawn_sweeper, CacheFactory};
pub use file_store::{FileCacheConfig, FileCacheStore};
pub use in_memory::{InMemoryCache, InMemoryCacheConfig};
pub use tiered::TieredCache;
