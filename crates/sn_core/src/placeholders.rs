//! User-facing fallback strings shared between the content scraper and the
//! rewrite client. The rewriter must recognize these and pass them through
//! instead of asking the generator to "neutralize" an error message.

/// A page was reached but no usable body text was extracted.
pub const LOAD_INCOMPLETE: &str = "Artikel konnte nicht vollständig geladen werden.";

/// The page could not be fetched at all.
pub const LOAD_FAILED: &str = "Fehler beim Laden des Artikels.";

/// Shown when the input is too short to be genuine article content.
pub const ARTICLE_TOO_SHORT: &str =
    "Der vollständige Artikel ist derzeit nicht verfügbar. Bitte besuchen Sie die Originalquelle.";

pub fn is_failure_placeholder(content: &str) -> bool {
    let content = content.trim();
    content == LOAD_INCOMPLETE || content == LOAD_FAILED || content == ARTICLE_TOO_SHORT
}
