use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Question, SessionState, Tally, TypeTag};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over a fixed question list.
///
/// Owns the only `SessionState`. Steps through the questions in order, counting
/// the type of each recorded choice.
#[derive(Clone)]
pub struct QuizSession {
    questions: Arc<[Question]>,
    state: SessionState,
}

impl QuizSession {
    /// Create a session positioned at the first question.
    #[must_use]
    pub fn new(questions: Arc<[Question]>) -> Self {
        Self {
            questions,
            state: SessionState::new(),
        }
    }

    /// Reset to the first question with an all-zero tally.
    ///
    /// Safe to call at any point; prior progress is discarded.
    pub fn start(&mut self) {
        self.state = SessionState::new();
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn tally(&self) -> &Tally {
        self.state.tally()
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.state.current_question_index()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question to answer next, or `None` once every question is answered.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.state.current_question_index())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_question().is_none()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.question_count();
        let answered = self.current_question_index();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.is_finished(),
        }
    }

    /// Count a choice of type `tag` for the current question and advance.
    ///
    /// Recording after the last question is a caller bug: it trips a debug
    /// assertion, and in release builds leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if there is no current question.
    pub fn record_choice(&mut self, tag: TypeTag) -> Result<SessionProgress, SessionError> {
        debug_assert!(
            !self.is_finished(),
            "record_choice called after the quiz finished"
        );
        if self.is_finished() {
            return Err(SessionError::Completed);
        }

        self.state.record(tag);
        Ok(self.progress())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("state", &self.state)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
