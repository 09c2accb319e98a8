use async_trait::async_trait;
use quiz_core::model::{MusicCatalog, Question, QuizDataError};
use std::fmt;
use thiserror::Error;

/// The two static datasets a quiz needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Questions,
    Music,
}

impl Dataset {
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Dataset::Questions => "questions.json",
            Dataset::Music => "music.json",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Errors surfaced while loading quiz data.
///
/// Any of these means the quiz cannot start; the caller offers a retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataLoadError {
    #[error("{dataset} is unreachable: {reason}")]
    Unreachable { dataset: Dataset, reason: String },

    #[error("{dataset} request failed with status {status}")]
    HttpStatus {
        dataset: Dataset,
        status: reqwest::StatusCode,
    },

    #[error("{dataset} is malformed: {source}")]
    Malformed {
        dataset: Dataset,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] QuizDataError),
}

/// Where the raw dataset bytes come from.
#[async_trait]
pub trait QuizDataSource: Send + Sync {
    /// Fetch the raw JSON bytes of one dataset.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Unreachable` (or `HttpStatus`) if the dataset cannot be read.
    async fn fetch(&self, dataset: Dataset) -> Result<Vec<u8>, DataLoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fixed payloads held in memory, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    questions: Option<Vec<u8>>,
    music: Option<Vec<u8>>,
}

impl InMemoryDataSource {
    #[must_use]
    pub fn new(questions: impl Into<Vec<u8>>, music: impl Into<Vec<u8>>) -> Self {
        Self {
            questions: Some(questions.into()),
            music: Some(music.into()),
        }
    }

    /// Serialize already-built datasets.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn from_parts(
        questions: &[Question],
        catalog: &MusicCatalog,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::to_vec(questions)?,
            serde_json::to_vec(catalog)?,
        ))
    }

    /// A source where every fetch fails.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizDataSource for InMemoryDataSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Vec<u8>, DataLoadError> {
        let payload = match dataset {
            Dataset::Questions => self.questions.as_ref(),
            Dataset::Music => self.music.as_ref(),
        };
        payload.cloned().ok_or_else(|| DataLoadError::Unreachable {
            dataset,
            reason: "no payload configured".into(),
        })
    }

    fn describe(&self) -> String {
        "memory".into()
    }
}
