use std::sync::Arc;

use crate::cache::ResultCache;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ResultCache>,
}

impl AppState {
    pub fn new(cache: ResultCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }
}
