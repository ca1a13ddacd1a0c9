use std::fmt;

use async_trait::async_trait;

use sn_core::placeholders::{is_failure_placeholder, ARTICLE_TOO_SHORT};
use sn_core::{Result, Rewriter, RewrittenHeadline};

/// Dramatizing lead-ins stripped by the offline rewriter.
const DRAMA_PREFIXES: &[&str] = &[
    "schock",
    "schock!",
    "schock:",
    "horror",
    "horror:",
    "drama",
    "drama:",
    "skandal",
    "skandal:",
    "tragödie:",
];

/// Deterministic offline rewriter for tests and runs without an API key.
/// Strips dramatizing lead-ins and exclamation marks; no network.
pub struct DummyRewriter;

impl DummyRewriter {
    pub fn new() -> Self {
        Self
    }

    fn neutralize(text: &str) -> String {
        let mut out = text.trim();
        loop {
            let lowered = out.to_lowercase();
            let stripped = DRAMA_PREFIXES.iter().find_map(|prefix| {
                lowered
                    .starts_with(prefix)
                    .then(|| out[prefix.len()..].trim_start_matches(['!', ':', ' ', '-']))
            });
            match stripped {
                Some(rest) if !rest.is_empty() => out = rest,
                _ => break,
            }
        }
        out.replace('!', ".")
    }
}

impl Default for DummyRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DummyRewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyRewriter").finish()
    }
}

#[async_trait]
impl Rewriter for DummyRewriter {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn rewrite_headline(&self, title: &str, summary: &str) -> Result<RewrittenHeadline> {
        Ok(RewrittenHeadline {
            title: Self::neutralize(title),
            summary: Self::neutralize(summary),
        })
    }

    async fn rewrite_article(&self, content: &str) -> Result<String> {
        if is_failure_placeholder(content) {
            return Ok(content.to_string());
        }
        if content.trim().chars().count() < 100 {
            return Ok(ARTICLE_TOO_SHORT.to_string());
        }
        Ok(Self::neutralize(content))
    }
}
