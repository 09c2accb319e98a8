use std::sync::Arc;
use thiserror::Error;

use crate::model::{MusicCatalog, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizDataError {
    #[error("question {question} has no choices")]
    NoChoices { question: usize },
}

/// Validated question list and catalog, ready to drive a quiz.
///
/// Questions are shared behind an `Arc` so sessions can hold them without
/// copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizData {
    questions: Arc<[Question]>,
    catalog: MusicCatalog,
}

impl QuizData {
    /// Build quiz data from parsed datasets.
    ///
    /// # Errors
    ///
    /// Returns `QuizDataError::NoChoices` if any question offers nothing to pick.
    pub fn new(questions: Vec<Question>, catalog: MusicCatalog) -> Result<Self, QuizDataError> {
        if let Some(question) = questions.iter().position(|q| q.choices.is_empty()) {
            return Err(QuizDataError::NoChoices { question });
        }

        Ok(Self {
            questions: questions.into(),
            catalog,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &Arc<[Question]> {
        &self.questions
    }

    #[must_use]
    pub fn catalog(&self) -> &MusicCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, TypeTag};

    #[test]
    fn rejects_question_without_choices() {
        let questions = vec![
            Question::new("ok", vec![Choice::new("a", TypeTag::Chill)]),
            Question::new("empty", Vec::new()),
        ];
        let err = QuizData::new(questions, MusicCatalog::new()).unwrap_err();
        assert_eq!(err, QuizDataError::NoChoices { question: 1 });
    }

    #[test]
    fn zero_questions_is_valid() {
        let data = QuizData::new(Vec::new(), MusicCatalog::new()).unwrap();
        assert_eq!(data.question_count(), 0);
    }
}
