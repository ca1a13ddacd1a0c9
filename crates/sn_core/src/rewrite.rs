use async_trait::async_trait;

use crate::types::RewrittenHeadline;
use crate::Result;

/// Text-rewriting capability turning sensational copy into a neutral
/// register. Implementations hold no state between calls; caching is the
/// pipeline's concern.
#[async_trait]
pub trait Rewriter: Send + Sync {
    fn name(&self) -> &str;

    /// Rewrite a headline and its summary.
    async fn rewrite_headline(&self, title: &str, summary: &str) -> Result<RewrittenHeadline>;

    /// Rewrite a full article body.
    async fn rewrite_article(&self, content: &str) -> Result<String>;
}
