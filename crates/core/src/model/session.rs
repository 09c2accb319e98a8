use crate::model::{Tally, TypeTag};

/// Progress of one quiz run: which question is next and the tally so far.
///
/// `record` is the only mutation, and it bumps the tally and the index
/// together, so `tally().total()` always equals `current_question_index()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    current_question_index: usize,
    tally: Tally,
}

impl SessionState {
    /// Fresh state: index 0, all-zero tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    #[must_use]
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Count one answer of type `tag` and move to the next question.
    ///
    /// Bounds are the caller's concern; the session that owns this state knows
    /// how many questions exist.
    pub fn record(&mut self, tag: TypeTag) {
        self.tally.increment(tag);
        self.current_question_index += 1;
    }
}
