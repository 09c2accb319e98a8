#![forbid(unsafe_code)]

pub mod fs;
pub mod http;
pub mod loader;
pub mod source;

pub use fs::FsDataSource;
pub use http::HttpDataSource;
pub use loader::load_quiz_data;
pub use source::{DataLoadError, Dataset, InMemoryDataSource, QuizDataSource};
