use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Zuerich,
    Schweiz,
    International,
    People,
    Alternativ,
}

impl Category {
    /// Fixed registry order. The mixer and the feed-cache invalidation
    /// both iterate this, so the order is part of the observable behavior.
    pub const ALL: [Category; 5] = [
        Category::Zuerich,
        Category::Schweiz,
        Category::International,
        Category::People,
        Category::Alternativ,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Zuerich => "zuerich",
            Category::Schweiz => "schweiz",
            Category::International => "international",
            Category::People => "people",
            Category::Alternativ => "alternativ",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "zuerich" => Ok(Category::Zuerich),
            "schweiz" => Ok(Category::Schweiz),
            "international" => Ok(Category::International),
            "people" => Ok(Category::People),
            "alternativ" => Ok(Category::Alternativ),
            other => Err(crate::Error::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: Category,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A neutralized (title, summary) pair, the headline-cache value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewrittenHeadline {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    /// Structured RSS/Atom feed at the endpoint.
    Feed,
    /// HTML page at the endpoint, extracted with the named strategy.
    Scrape { strategy: String },
}

/// One configured upstream source. Built once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub endpoint: String,
    pub category: Category,
    pub display_name: String,
    pub mode: FetchMode,
}

impl SourceDescriptor {
    pub fn feed(endpoint: &str, category: Category, display_name: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            category,
            display_name: display_name.to_string(),
            mode: FetchMode::Feed,
        }
    }

    pub fn scrape(endpoint: &str, category: Category, display_name: &str, strategy: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            category,
            display_name: display_name.to_string(),
            mode: FetchMode::Scrape {
                strategy: strategy.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert!("sport".parse::<Category>().is_err());
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let article = Article {
            id: "abc123".to_string(),
            title: "Test".to_string(),
            summary: "Summary".to_string(),
            category: Category::Schweiz,
            source: "Blick Schweiz".to_string(),
            published_at: Utc::now(),
            original_url: "https://www.blick.ch/a".to_string(),
            image_url: None,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["category"], "schweiz");
        assert!(json["publishedAt"].is_string());
        assert!(json["originalUrl"].is_string());
        assert!(json.get("imageUrl").is_none());
    }
}
