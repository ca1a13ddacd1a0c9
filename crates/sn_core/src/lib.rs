pub mod cache;
pub mod error;
pub mod filter;
pub mod fingerprint;
pub mod mix;
pub mod placeholders;
pub mod rewrite;
pub mod types;

pub use cache::CacheStore;
pub use error::Error;
pub use fingerprint::article_id;
pub use rewrite::Rewriter;
pub use types::{Article, Category, FetchMode, RewrittenHeadline, SourceDescriptor};

pub type Result<T> = std::result::Result<T, Error>;
