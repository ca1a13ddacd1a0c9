use std::sync::Arc;

use sn_core::{Error, Result, Rewriter};

pub mod dummy;
pub mod openai;

pub use dummy::DummyRewriter;
pub use openai::OpenAiRewriter;

/// Build a rewriter by CLI name.
pub fn create_rewriter(kind: &str, api_key: Option<String>) -> Result<Arc<dyn Rewriter>> {
    match kind {
        "openai" => Ok(Arc::new(OpenAiRewriter::new(api_key)?)),
        "dummy" => Ok(Arc::new(DummyRewriter::new())),
        other => Err(Error::Rewrite(format!("Unknown rewriter: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rewriter() {
        assert!(create_rewriter("dummy", None).is_ok());
        assert!(create_rewriter("openai", Some("test-key".to_string())).is_ok());
        assert!(create_rewriter("openai", None).is_err());
        assert!(create_rewriter("gemini", None).is_err());
    }
}
