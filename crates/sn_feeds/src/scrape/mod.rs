//! Page scraping: a shared browser-identifying client plus the ordered
//! extraction-strategy chain used for headline pages.

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use sn_core::Result;

pub mod content;
pub mod headlines;

pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

pub const SCRAPE_TIMEOUT: Duration = Duration::from_secs(15);

pub fn scrape_client() -> Result<Client> {
    Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(SCRAPE_TIMEOUT)
        .build()
        .map_err(Into::into)
}

/// One way of reading (title, link, summary) triples out of a listing page.
/// Strategies are tried in order until one yields enough items.
pub struct ExtractionStrategy {
    /// Selector for the repeating item blocks.
    pub container: &'static str,
    /// Title selector inside a block; the block's own text is the fallback.
    pub title: &'static str,
    /// Teaser selector inside a block; the title doubles as fallback.
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedItem {
    pub title: String,
    pub url: String,
    pub summary: String,
}

/// Run the chain: first strategy clearing `min_items` wins; otherwise the
/// largest harvest is kept as a best effort. Links are absolutized against
/// `base_url` and deduplicated within the page.
pub fn run_strategies(
    html: &str,
    strategies: &[ExtractionStrategy],
    base_url: &str,
    min_items: usize,
) -> Vec<ExtractedItem> {
    let document = Html::parse_document(html);
    let mut best: Vec<ExtractedItem> = Vec::new();

    for strategy in strategies {
        let items = run_strategy(&document, strategy, base_url);
        if items.len() >= min_items {
            return items;
        }
        if items.len() > best.len() {
            best = items;
        }
    }
    best
}

fn run_strategy(
    document: &Html,
    strategy: &ExtractionStrategy,
    base_url: &str,
) -> Vec<ExtractedItem> {
    let Ok(container) = Selector::parse(strategy.container) else {
        return Vec::new();
    };
    let Ok(title) = Selector::parse(strategy.title) else {
        return Vec::new();
    };
    let Ok(summary) = Selector::parse(strategy.summary) else {
        return Vec::new();
    };
    let link = Selector::parse("a[href]").expect("static selector");

    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for element in document.select(&container) {
        let Some(href) = element
            .value()
            .attr("href")
            .map(str::to_string)
            .or_else(|| {
                element
                    .select(&link)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(str::to_string)
            })
        else {
            continue;
        };
        let Some(url) = absolutize(base_url, &href) else {
            continue;
        };

        let item_title = element
            .select(&title)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| element_text(element));
        if item_title.is_empty() {
            continue;
        }

        let item_summary = element
            .select(&summary)
            .next()
            .map(element_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| item_title.clone());

        // One entry per link within a single page.
        if seen.insert(url.clone()) {
            items.push(ExtractedItem {
                title: item_title,
                url,
                summary: item_summary,
            });
        }
    }
    items
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn absolutize(base_url: &str, href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    let base = Url::parse(base_url).ok()?;
    base.join(href).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
<html><body>
  <article>
    <h2>Erster Titel</h2>
    <p class="teaser">Erster Teaser</p>
    <a href="/story/erste">weiter</a>
  </article>
  <article>
    <h2>Zweiter Titel</h2>
    <a href="https://example.ch/story/zweite">weiter</a>
  </article>
  <article>
    <h2>Doppelter Link</h2>
    <a href="/story/erste">weiter</a>
  </article>
  <div class="post-item">
    <h3>Dritter Titel</h3>
    <a href="/story/dritte">weiter</a>
  </div>
</body></html>"#;

    #[test]
    fn test_first_sufficient_strategy_wins() {
        let strategies = [
            ExtractionStrategy {
                container: "article",
                title: "h2",
                summary: ".teaser",
            },
            ExtractionStrategy {
                container: ".post-item",
                title: "h3",
                summary: "p",
            },
        ];
        let items = run_strategies(LISTING, &strategies, "https://example.ch/", 2);
        assert_eq!(items.len(), 2); // duplicate link collapsed
        assert_eq!(items[0].title, "Erster Titel");
        assert_eq!(items[0].url, "https://example.ch/story/erste");
        assert_eq!(items[0].summary, "Erster Teaser");
        // Missing teaser falls back to the title.
        assert_eq!(items[1].summary, "Zweiter Titel");
    }

    #[test]
    fn test_falls_through_to_next_strategy() {
        let strategies = [
            ExtractionStrategy {
                container: ".missing",
                title: "h2",
                summary: "p",
            },
            ExtractionStrategy {
                container: ".post-item",
                title: "h3",
                summary: "p",
            },
        ];
        let items = run_strategies(LISTING, &strategies, "https://example.ch/", 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Dritter Titel");
    }

    #[test]
    fn test_best_effort_below_threshold() {
        let strategies = [ExtractionStrategy {
            container: ".post-item",
            title: "h3",
            summary: "p",
        }];
        let items = run_strategies(LISTING, &strategies, "https://example.ch/", 5);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(
            absolutize("https://example.ch/news", "/story/a").unwrap(),
            "https://example.ch/story/a"
        );
        assert_eq!(
            absolutize("https://example.ch/", "https://other.ch/b").unwrap(),
            "https://other.ch/b"
        );
    }
}
