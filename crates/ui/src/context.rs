use std::sync::Arc;

use services::{CategoryService, QuizServices, QuizStartService};

pub trait UiApp: Send + Sync {
    fn categories(&self) -> Arc<CategoryService>;
    fn quiz(&self) -> Arc<QuizStartService>;
}

impl UiApp for QuizServices {
    fn categories(&self) -> Arc<CategoryService> {
        QuizServices::categories(self)
    }

    fn quiz(&self) -> Arc<QuizStartService> {
        QuizServices::quiz(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    categories: Arc<CategoryService>,
    quiz: Arc<QuizStartService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            categories: app.categories(),
            quiz: app.quiz(),
        }
    }

    #[must_use]
    pub fn categories(&self) -> Arc<CategoryService> {
        Arc::clone(&self.categories)
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizStartService> {
        Arc::clone(&self.quiz)
    }
}

// Provided by the composition root (`crates/app`) through `LaunchBuilder::with_context`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
