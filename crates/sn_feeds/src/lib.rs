pub mod feed;
pub mod manager;
pub mod pipeline;
pub mod registry;
pub mod scrape;
pub mod source;

#[cfg(test)]
pub(crate) mod testutil;

pub use pipeline::NewsPipeline;
pub use source::{build_sources, NewsSource};

pub mod prelude {
    pub use super::pipeline::NewsPipeline;
    pub use super::source::NewsSource;
    pub use sn_core::{Article, Category, Error, Result};
}
