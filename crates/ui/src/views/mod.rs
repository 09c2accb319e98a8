mod question;
mod quiz;
mod result;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use question::QuestionScreenView;
pub use quiz::QuizView;
pub use result::ResultScreenView;
pub use start::StartScreenView;
pub use state::{ViewError, ViewState, view_state_from_resource};
