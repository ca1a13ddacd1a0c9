//! The end-to-end flow: fetch → pre-filter → rewrite (cache-aware) →
//! post-filter → cache → return. Collaborators are injected at
//! construction; the pipeline holds no global state.

use futures::future::join_all;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use sn_cache::NewsCache;
use sn_core::filter::should_filter;
use sn_core::placeholders::is_failure_placeholder;
use sn_core::{article_id, Article, Category, Result, Rewriter};

use crate::manager::{fetch_all, sources_for};
use crate::registry;
use crate::scrape::content::scrape_article;
use crate::scrape::scrape_client;
use crate::source::{build_sources, NewsSource};

/// Cap on concurrent rewrite calls within one fetch cycle.
const REWRITE_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub content: String,
}

pub struct NewsPipeline {
    sources: Vec<Arc<dyn NewsSource>>,
    rewriter: Arc<dyn Rewriter>,
    cache: NewsCache,
    client: Client,
    semaphore: Arc<Semaphore>,
}

impl NewsPipeline {
    pub fn new(
        sources: Vec<Arc<dyn NewsSource>>,
        rewriter: Arc<dyn Rewriter>,
        cache: NewsCache,
    ) -> Result<Self> {
        Ok(Self {
            sources,
            rewriter,
            cache,
            client: scrape_client()?,
            semaphore: Arc::new(Semaphore::new(REWRITE_CONCURRENCY)),
        })
    }

    /// Pipeline over the full configured registry.
    pub fn with_default_sources(rewriter: Arc<dyn Rewriter>, cache: NewsCache) -> Result<Self> {
        Self::new(build_sources(registry::sources())?, rewriter, cache)
    }

    pub fn sources(&self) -> &[Arc<dyn NewsSource>] {
        &self.sources
    }

    /// The externally observable operation: cached-or-freshly-computed
    /// articles for a category, or for all categories.
    pub async fn articles(&self, category: Option<Category>) -> Result<Vec<Article>> {
        if let Some(cached) = self.cache.feed(category).await {
            info!(
                "⚡ feed cache hit for {} ({} articles)",
                category.map(|c| c.to_string()).unwrap_or_else(|| "all".to_string()),
                cached.len()
            );
            return Ok(cached);
        }

        let relevant = sources_for(&self.sources, category);
        let raw = fetch_all(&relevant).await;
        if raw.is_empty() {
            error!("💥 no source produced any articles this cycle");
        }

        // Pre-filter before any rewrite cost is incurred.
        let surviving: Vec<Article> = raw
            .into_iter()
            .filter(|article| !should_filter(&article.title))
            .collect();

        let rewrites = surviving
            .into_iter()
            .map(|article| self.rewrite_one(article));
        let mut articles: Vec<Article> = join_all(rewrites).await;

        // Post-filter: rewriting may fail to remove disqualifying language.
        articles.retain(|article| !should_filter(&article.title));

        self.cache.set_feed(category, &articles).await;
        Ok(articles)
    }

    /// Rewrite one article's headline, consulting the permanent headline
    /// cache keyed by the original title. Failure keeps the original text;
    /// it never aborts the batch.
    async fn rewrite_one(&self, mut article: Article) -> Article {
        article.id = article_id(&article.original_url);
        let original_title = article.title.clone();

        if let Some(cached) = self.cache.headline(&original_title).await {
            article.title = cached.title;
            article.summary = cached.summary;
        } else {
            let _permit = self.semaphore.acquire().await.ok();
            match self
                .rewriter
                .rewrite_headline(&article.title, &article.summary)
                .await
            {
                Ok(rewritten) => {
                    self.cache.set_headline(&original_title, &rewritten).await;
                    article.title = rewritten.title;
                    article.summary = rewritten.summary;
                }
                Err(e) => {
                    warn!("headline rewrite failed for {}: {}", article.original_url, e);
                }
            }
        }

        // Eager metadata write: the detail view must resolve this id even
        // before any content exists.
        self.cache.set_article_meta(&article).await;
        article
    }

    /// Detail view: cached metadata plus the full rewritten body. Content
    /// is produced on demand and cached permanently; an insufficient
    /// scrape falls back to the summary without caching, so a later
    /// request may try again.
    pub async fn article(&self, id: &str) -> Result<Option<ArticleDetail>> {
        let Some(meta) = self.cache.article_meta(id).await else {
            return Ok(None);
        };

        if let Some(content) = self.cache.article_content(id).await {
            return Ok(Some(ArticleDetail {
                article: meta,
                content,
            }));
        }

        if meta.original_url.is_empty() {
            let content = meta.summary.clone();
            return Ok(Some(ArticleDetail {
                article: meta,
                content,
            }));
        }

        let scraped = scrape_article(&self.client, &meta.original_url).await;
        if is_failure_placeholder(&scraped) {
            let content = meta.summary.clone();
            return Ok(Some(ArticleDetail {
                article: meta,
                content,
            }));
        }

        let rewritten = match self.rewriter.rewrite_article(&scraped).await {
            Ok(text) => text,
            Err(e) => {
                warn!("article rewrite failed for {}: {}", id, e);
                scraped
            }
        };
        if is_failure_placeholder(&rewritten) {
            let content = meta.summary.clone();
            return Ok(Some(ArticleDetail {
                article: meta,
                content,
            }));
        }

        self.cache.set_article_content(id, &rewritten).await;
        Ok(Some(ArticleDetail {
            article: meta,
            content: rewritten,
        }))
    }

    /// Standalone rewrite of caller-supplied content.
    pub async fn rewrite_content(&self, content: &str) -> Result<String> {
        self.rewriter.rewrite_article(content).await
    }

    /// Administrative invalidation of the known feed keys.
    pub async fn clear_feed_cache(&self) -> Vec<String> {
        self.cache.clear_feeds().await
    }
}
