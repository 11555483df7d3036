use std::sync::Arc;
use tracing::{info, warn};

use trivia_core::model::{Category, sort_for_display};

use crate::source::CategorySource;

/// Loads the category list for the setup panel.
#[derive(Clone)]
pub struct CategoryService {
    source: Arc<dyn CategorySource>,
}

impl CategoryService {
    #[must_use]
    pub fn new(source: Arc<dyn CategorySource>) -> Self {
        Self { source }
    }

    /// Categories sorted by name.
    ///
    /// A failed fetch is logged and yields an empty list; the quiz can still
    /// be played with "any category".
    pub async fn load(&self) -> Vec<Category> {
        match self.source.categories().await {
            Ok(mut categories) => {
                sort_for_display(&mut categories);
                info!(count = categories.len(), "loaded categories");
                categories
            }
            Err(err) => {
                warn!(error = %err, "category fetch failed; continuing without categories");
                Vec::new()
            }
        }
    }
}
