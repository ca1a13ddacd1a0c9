use std::sync::Arc;

use sn_feeds::NewsPipeline;

pub struct AppState {
    pub pipeline: Arc<NewsPipeline>,
}
