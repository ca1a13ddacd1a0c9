//! Headline scraping for publishers without a usable feed. Each strategy
//! table mirrors the publisher's current markup, broadest selector last.

use chrono::Utc;
use reqwest::Client;

use sn_core::{article_id, Article, Error, Result, SourceDescriptor};

use super::{run_strategies, ExtractionStrategy};
use crate::feed::MAX_ITEMS_PER_SOURCE;

/// A strategy must produce at least this many items to be trusted.
const MIN_ITEMS: usize = 3;

const TWENTYMIN: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        container: "article",
        title: "h2, h3",
        summary: "p",
    },
    ExtractionStrategy {
        container: "a[href*='/story/']",
        title: "h2, h3, span",
        summary: "p",
    },
];

const WELTWOCHE: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        container: "article",
        title: "h2, h3, .title, .article-title",
        summary: ".excerpt, .summary, p",
    },
    ExtractionStrategy {
        container: ".article-item, .post",
        title: "h2, h3, .title, .article-title",
        summary: ".excerpt, .summary, p",
    },
];

const NEBELSPALTER: &[ExtractionStrategy] = &[
    ExtractionStrategy {
        container: "article",
        title: "h2, h3, .title",
        summary: ".excerpt, .teaser, p",
    },
    ExtractionStrategy {
        container: ".article, .post-item",
        title: "h2, h3, .title",
        summary: ".excerpt, .teaser, p",
    },
];

fn strategies_for(strategy: &str) -> Result<&'static [ExtractionStrategy]> {
    match strategy {
        "20min" => Ok(TWENTYMIN),
        "weltwoche" => Ok(WELTWOCHE),
        "nebelspalter" => Ok(NEBELSPALTER),
        other => Err(Error::Scraping(format!(
            "Unknown scrape strategy: {}",
            other
        ))),
    }
}

pub async fn scrape_headlines(
    client: &Client,
    descriptor: &SourceDescriptor,
    strategy: &str,
) -> Result<Vec<Article>> {
    let strategies = strategies_for(strategy)?;

    let html = client
        .get(&descriptor.endpoint)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let items = run_strategies(&html, strategies, &descriptor.endpoint, MIN_ITEMS);
    Ok(items
        .into_iter()
        .take(MAX_ITEMS_PER_SOURCE)
        .map(|item| Article {
            id: article_id(&item.url),
            title: item.title,
            summary: item.summary,
            category: descriptor.category,
            source: descriptor.display_name.clone(),
            // Listing pages carry no timestamps.
            published_at: Utc::now(),
            original_url: item.url,
            image_url: None,
        })
        .collect())
}
