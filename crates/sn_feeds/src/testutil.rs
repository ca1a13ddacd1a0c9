//! Shared test doubles for the fetch and pipeline tests.

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sn_core::{
    article_id, Article, Category, Error, Result, Rewriter, RewrittenHeadline, SourceDescriptor,
};

use crate::source::NewsSource;

/// Source serving a fixed article list, optionally failing, counting its
/// fetch invocations.
pub(crate) struct StaticSource {
    descriptor: SourceDescriptor,
    articles: Vec<Article>,
    fail: bool,
    fetch_count: AtomicUsize,
}

impl StaticSource {
    pub(crate) fn new(category: Category, name: &str, titles: &[&str]) -> Self {
        let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
        let articles = titles
            .iter()
            .enumerate()
            .map(|(n, title)| {
                let url = format!("https://{}.ch/{}", name, n);
                Article {
                    id: article_id(&url),
                    title: title.to_string(),
                    summary: format!("Zusammenfassung {}", n),
                    category,
                    source: name.to_string(),
                    published_at: base - ChronoDuration::minutes(n as i64),
                    original_url: url,
                    image_url: None,
                }
            })
            .collect();
        Self {
            descriptor: SourceDescriptor::feed(
                &format!("https://{}.ch/rss.xml", name),
                category,
                name,
            ),
            articles,
            fail: false,
            fetch_count: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(category: Category, name: &str) -> Self {
        let mut source = Self::new(category, name, &[]);
        source.fail = true;
        source
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for StaticSource {
    fn descriptor(&self) -> &SourceDescriptor {
        &self.descriptor
    }

    async fn fetch(&self) -> Result<Vec<Article>> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Feed("kaputt".to_string()));
        }
        Ok(self.articles.clone())
    }
}

/// Uppercases everything it sees; makes rewritten text easy to assert on.
pub(crate) struct UppercaseRewriter;

#[async_trait]
impl Rewriter for UppercaseRewriter {
    fn name(&self) -> &str {
        "Uppercase"
    }

    async fn rewrite_headline(&self, title: &str, summary: &str) -> Result<RewrittenHeadline> {
        Ok(RewrittenHeadline {
            title: title.to_uppercase(),
            summary: summary.to_uppercase(),
        })
    }

    async fn rewrite_article(&self, content: &str) -> Result<String> {
        Ok(content.to_uppercase())
    }
}

/// Always errors; exercises the per-article isolation path.
pub(crate) struct FailingRewriter;

#[async_trait]
impl Rewriter for FailingRewriter {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn rewrite_headline(&self, _title: &str, _summary: &str) -> Result<RewrittenHeadline> {
        Err(Error::Rewrite("quota exceeded".to_string()))
    }

    async fn rewrite_article(&self, _content: &str) -> Result<String> {
        Err(Error::Rewrite("quota exceeded".to_string()))
    }
}

pub(crate) fn as_sources(sources: Vec<Arc<StaticSource>>) -> Vec<Arc<dyn NewsSource>> {
    sources
        .into_iter()
        .map(|source| source as Arc<dyn NewsSource>)
        .collect()
}
