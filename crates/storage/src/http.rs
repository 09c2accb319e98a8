use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::source::{DataLoadError, Dataset, QuizDataSource};

/// Fetches the datasets over HTTP from `<base_url>/<file name>`.
#[derive(Clone, Debug)]
pub struct HttpDataSource {
    client: Client,
    base_url: String,
}

impl HttpDataSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, dataset: Dataset) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            dataset.file_name()
        )
    }
}

#[async_trait]
impl QuizDataSource for HttpDataSource {
    async fn fetch(&self, dataset: Dataset) -> Result<Vec<u8>, DataLoadError> {
        let url = self.url_for(dataset);
        debug!(%url, "fetching dataset");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DataLoadError::Unreachable {
                dataset,
                reason: err.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DataLoadError::HttpStatus {
                dataset,
                status: response.status(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| DataLoadError::Unreachable {
                dataset,
                reason: err.to_string(),
            })?;
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
