/// How far a quiz run has got, for progress labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// 1-based number of the question being shown, if any.
    #[must_use]
    pub fn current_number(&self) -> Option<usize> {
        (!self.is_complete).then_some(self.answered + 1)
    }
}
