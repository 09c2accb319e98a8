mod controller;
mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{QuestionScreen, QuizCommand, QuizController, QuizObserver, QuizScreen, TracingObserver};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use workflow::QuizLoopService;
