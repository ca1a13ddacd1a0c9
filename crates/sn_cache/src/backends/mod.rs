pub mod memory;

#[cfg(feature = "upstash")]
pub mod upstash;

pub use memory::MemoryCache;

#[cfg(feature = "upstash")]
pub use upstash::UpstashCache;
