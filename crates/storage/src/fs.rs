use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::source::{DataLoadError, Dataset, QuizDataSource};

/// Reads `questions.json` and `music.json` from a directory.
#[derive(Debug, Clone)]
pub struct FsDataSource {
    dir: PathBuf,
}

impl FsDataSource {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(dataset.file_name())
    }
}

#[async_trait]
impl QuizDataSource for FsDataSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Vec<u8>, DataLoadError> {
        let path = self.path_for(dataset);
        debug!(path = %path.display(), "reading dataset");
        tokio::fs::read(&path)
            .await
            .map_err(|err| DataLoadError::Unreachable {
                dataset,
                reason: format!("{}: {err}", path.display()),
            })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
