pub mod models;
pub mod parse;
pub mod prompt;

pub use models::{create_rewriter, DummyRewriter, OpenAiRewriter};

pub mod prelude {
    pub use super::models::create_rewriter;
    pub use sn_core::{Rewriter, RewrittenHeadline};
}
