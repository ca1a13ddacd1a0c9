//! Round-robin redistribution across categories so no single category
//! dominates the top of a mixed display window.

use crate::types::{Article, Category};

/// Group by category, sort each group newest-first, then interleave in
/// registry order: index 0 of every category, then index 1, and so on.
/// Exhausted categories are skipped. Pure; no I/O.
pub fn mix(articles: Vec<Article>) -> Vec<Article> {
    let mut buckets: Vec<(Category, Vec<Article>)> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for article in articles {
        if let Some((_, bucket)) = buckets.iter_mut().find(|(c, _)| *c == article.category) {
            bucket.push(article);
        }
    }

    for (_, bucket) in buckets.iter_mut() {
        bucket.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    }

    let longest = buckets.iter().map(|(_, b)| b.len()).max().unwrap_or(0);
    let mut mixed = Vec::with_capacity(buckets.iter().map(|(_, b)| b.len()).sum());
    for i in 0..longest {
        for (_, bucket) in &buckets {
            if let Some(article) = bucket.get(i) {
                mixed.push(article.clone());
            }
        }
    }
    mixed
}
