mod data;
mod question;
mod result;
mod session;
mod tally;
mod track;
mod type_tag;

pub use data::{QuizData, QuizDataError};
pub use question::{Choice, Question};
pub use result::{NO_RECOMMENDATION_LINK, NO_RECOMMENDATION_TITLE, QuizResult, Recommendation, ResultDisplay};
pub use session::SessionState;
pub use tally::Tally;
pub use track::{MusicCatalog, Track};
pub use type_tag::{TypeTag, TypeTagError};
