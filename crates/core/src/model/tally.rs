use crate::model::TypeTag;

/// Per-tag choice counts for one quiz session.
///
/// Every tag is always present. Counts only ever go up; the only way back to
/// zero is a fresh `Tally`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u32; TypeTag::ALL.len()],
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, tag: TypeTag) -> u32 {
        self.counts[tag.index()]
    }

    pub fn increment(&mut self, tag: TypeTag) {
        let slot = &mut self.counts[tag.index()];
        *slot = slot.saturating_add(1);
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Highest count across all tags (0 for a fresh tally).
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(tag, count)` pairs in [`TypeTag::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeTag, u32)> + '_ {
        TypeTag::ALL.into_iter().map(|tag| (tag, self.get(tag)))
    }
}

impl FromIterator<TypeTag> for Tally {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for tag in iter {
            tally.increment(tag);
        }
        tally
    }
}
