//! Structured feed retrieval: fetch the endpoint, parse RSS/Atom, map the
//! most recent entries to articles.

use chrono::Utc;
use reqwest::Client;
use scraper::Html;

use sn_core::{article_id, Article, Error, Result, SourceDescriptor};

/// Per-source cap on contributed entries.
pub const MAX_ITEMS_PER_SOURCE: usize = 10;

pub async fn fetch_feed(client: &Client, descriptor: &SourceDescriptor) -> Result<Vec<Article>> {
    let response = client
        .get(&descriptor.endpoint)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;

    let feed = feed_rs::parser::parse(bytes.as_ref())
        .map_err(|e| Error::Feed(format!("{}: {}", descriptor.display_name, e)))?;

    let articles = feed
        .entries
        .into_iter()
        .take(MAX_ITEMS_PER_SOURCE)
        .filter_map(|entry| entry_to_article(entry, descriptor))
        .collect();
    Ok(articles)
}

/// Entries without a link carry no identity and are dropped; everything
/// else gets placeholder defaults.
fn entry_to_article(entry: feed_rs::model::Entry, descriptor: &SourceDescriptor) -> Option<Article> {
    let link = entry.links.first()?.href.clone();

    let title = entry
        .title
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Kein Titel".to_string());

    let summary = entry
        .summary
        .map(|s| strip_html(&s.content))
        .unwrap_or_default();

    let image_url = entry
        .media
        .iter()
        .flat_map(|media| media.content.iter())
        .find_map(|content| content.url.as_ref().map(|url| url.to_string()));

    Some(Article {
        id: article_id(&link),
        title,
        summary,
        category: descriptor.category,
        source: descriptor.display_name.clone(),
        published_at: entry.published.or(entry.updated).unwrap_or_else(Utc::now),
        original_url: link,
        image_url,
    })
}

/// Feed summaries often arrive as HTML fragments.
fn strip_html(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
