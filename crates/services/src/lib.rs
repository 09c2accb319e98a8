#![forbid(unsafe_code)]

pub mod error;
pub mod resolver;
pub mod sessions;

pub use error::{QuizError, SessionError};

pub use sessions::{
    QuestionScreen, QuizCommand, QuizController, QuizLoopService, QuizObserver, QuizScreen,
    QuizSession, SessionProgress, TracingObserver,
};
