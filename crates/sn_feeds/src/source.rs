use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use sn_core::{Article, FetchMode, Result, SourceDescriptor};

use crate::feed::fetch_feed;
use crate::scrape::headlines::scrape_headlines;
use crate::scrape::scrape_client;

/// One upstream source. Implementations retrieve their own items; the
/// manager owns fan-out, timeouts and failure isolation.
#[async_trait]
pub trait NewsSource: Send + Sync {
    fn descriptor(&self) -> &SourceDescriptor;

    /// Retrieve the source's current items, newest first or unordered.
    async fn fetch(&self) -> Result<Vec<Article>>;
}

pub struct FeedSource {
    descriptor: SourceDescriptor,
    client: Client,
}

#[async_trait]
impl NewsSource for FeedSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        fetch_feed(&self.client, &self.descriptor).await
    }
}

pub struct ScrapeSource {
    descriptor: SourceDescriptor,
    strategy: String,
    client: Client,
}

#[async_trait]
impl NewsSource for ScrapeSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        scrape_headlines(&self.client, &self.descriptor, &self.strategy).await
    }
}

/// Bind descriptors to their retrieval paths. One shared scraping client;
/// feed fetches reuse it since the browser UA does no harm there.
pub fn build_sources(descriptors: Vec<SourceDescriptor>) -> Result<Vec<Arc<dyn NewsSource>>> {
    let client = scrape_client()?;
    let sources = descriptors
        .into_iter()
        .map(|descriptor| match descriptor.mode.clone() {
            FetchMode::Feed => Arc::new(FeedSource {
                descriptor,
                client: client.clone(),
            }) as Arc<dyn NewsSource>,
            FetchMode::Scrape { strategy } => Arc::new(ScrapeSource {
                descriptor,
                strategy,
                client: client.clone(),
            }) as Arc<dyn NewsSource>,
        })
        .collect();
    Ok(sources)
}
