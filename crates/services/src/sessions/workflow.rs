use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use storage::{QuizDataSource, load_quiz_data};

use super::controller::{QuizController, TracingObserver};
use crate::error::QuizError;

/// Loads quiz data and hands out ready controllers.
#[derive(Clone)]
pub struct QuizLoopService {
    source: Arc<dyn QuizDataSource>,
    seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuizDataSource>) -> Self {
        Self { source, seed: None }
    }

    /// Fix the RNG seed so tie-breaks and track picks repeat across runs.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Load both datasets and build a controller on the start screen.
    ///
    /// Call again to retry after a failure; nothing is cached between attempts.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DataLoad` if the data cannot be fetched or parsed.
    pub async fn load(&self) -> Result<QuizController, QuizError> {
        let data = load_quiz_data(self.source.as_ref())
            .await
            .inspect_err(|err| warn!(source = %self.source.describe(), %err, "quiz data load failed"))?;

        info!(
            source = %self.source.describe(),
            questions = data.question_count(),
            "quiz ready"
        );
        Ok(QuizController::new(Arc::new(data), self.rng()).with_observer(TracingObserver))
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }
}
