use quiz_core::model::{MusicCatalog, Question, QuizData};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::source::{DataLoadError, Dataset, QuizDataSource};

/// Fetch, parse and validate both datasets.
///
/// Nothing is kept on failure: either a complete `QuizData` comes back or an error.
///
/// # Errors
///
/// Returns `DataLoadError` if either dataset is unreachable, is not valid JSON for
/// its schema, or fails validation.
pub async fn load_quiz_data(source: &dyn QuizDataSource) -> Result<QuizData, DataLoadError> {
    debug!(source = %source.describe(), "loading quiz data");

    let raw = source.fetch(Dataset::Questions).await?;
    let questions: Vec<Question> = parse(Dataset::Questions, &raw)?;

    let raw = source.fetch(Dataset::Music).await?;
    let catalog: MusicCatalog = parse(Dataset::Music, &raw)?;

    let data = QuizData::new(questions, catalog)?;
    debug!(
        questions = data.question_count(),
        tracks = data.catalog().len(),
        "quiz data loaded"
    );
    Ok(data)
}

fn parse<T: DeserializeOwned>(dataset: Dataset, raw: &[u8]) -> Result<T, DataLoadError> {
    serde_json::from_slice(raw).map_err(|source| DataLoadError::Malformed { dataset, source })
}
