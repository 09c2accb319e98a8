use std::sync::Arc;

use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: Arc<str>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title().into(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
