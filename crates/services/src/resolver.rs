//! Turns a finished tally into a winning type and a track.
//!
//! Every choice here is random and uniform. Callers pass the RNG in, so tests
//! and `--seed` runs can fix it.

use rand::Rng;
use tracing::debug;

use quiz_core::model::{MusicCatalog, QuizResult, Recommendation, Tally, TypeTag};

/// Types tied at the highest count, in [`TypeTag::ALL`] order.
///
/// Never empty: an all-zero tally ties all four types.
#[must_use]
pub fn leading_types(tally: &Tally) -> Vec<TypeTag> {
    let max_count = tally.max_count();
    tally
        .iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(tag, _)| tag)
        .collect()
}

/// Pick the winning type uniformly among the leaders.
///
/// A unique leader still goes through the random pick.
pub fn pick_winning_type<R: Rng>(tally: &Tally, rng: &mut R) -> TypeTag {
    let winners = leading_types(tally);
    winners[rng.random_range(0..winners.len())]
}

/// Pick a track for `tag` uniformly, or `NoRecommendation` when the catalog has none.
pub fn pick_track<R: Rng>(catalog: &MusicCatalog, tag: TypeTag, rng: &mut R) -> Recommendation {
    let tracks = catalog.tracks(tag);
    if tracks.is_empty() {
        debug!(%tag, "no catalog entry for winning type");
        return Recommendation::NoRecommendation;
    }
    Recommendation::Track(tracks[rng.random_range(0..tracks.len())].clone())
}

/// Resolve a completed tally into a `QuizResult`.
pub fn resolve<R: Rng>(tally: &Tally, catalog: &MusicCatalog, rng: &mut R) -> QuizResult {
    let winning_type = pick_winning_type(tally, rng);
    let recommendation = pick_track(catalog, winning_type, rng);
    QuizResult::new(winning_type, recommendation)
}
