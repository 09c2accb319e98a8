use crate::model::{Track, TypeTag};

/// Title shown when the winning type has no tracks.
pub const NO_RECOMMENDATION_TITLE: &str = "No recommended track was found.";

/// Link target used when there is no track to open.
pub const NO_RECOMMENDATION_LINK: &str = "#";

//
// ─── RECOMMENDATION ───────────────────────────────────────────────────────────
//

/// Track picked for the winning type, if the catalog had any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Track(Track),
    /// The catalog has no entry (or an empty one) for the winning type.
    NoRecommendation,
}

impl Recommendation {
    #[must_use]
    pub fn track(&self) -> Option<&Track> {
        match self {
            Recommendation::Track(track) => Some(track),
            Recommendation::NoRecommendation => None,
        }
    }
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

/// Outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    winning_type: TypeTag,
    recommendation: Recommendation,
}

impl QuizResult {
    #[must_use]
    pub fn new(winning_type: TypeTag, recommendation: Recommendation) -> Self {
        Self {
            winning_type,
            recommendation,
        }
    }

    #[must_use]
    pub fn winning_type(&self) -> TypeTag {
        self.winning_type
    }

    #[must_use]
    pub fn recommendation(&self) -> &Recommendation {
        &self.recommendation
    }

    #[must_use]
    pub fn track(&self) -> Option<&Track> {
        self.recommendation.track()
    }

    /// Flatten into the fields the result screen shows.
    #[must_use]
    pub fn display(&self) -> ResultDisplay {
        match &self.recommendation {
            Recommendation::Track(track) => ResultDisplay {
                title: track.title.clone(),
                artist: track.artist.clone(),
                album_art_url: track.album_art_url.clone(),
                album_art_alt: format!("{} - {} album art", track.title, track.artist),
                link: track.youtube_url.clone(),
            },
            Recommendation::NoRecommendation => ResultDisplay::no_recommendation(),
        }
    }
}

/// Flat result fields for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDisplay {
    pub title: String,
    pub artist: String,
    pub album_art_url: String,
    pub album_art_alt: String,
    pub link: String,
}

impl ResultDisplay {
    #[must_use]
    pub fn no_recommendation() -> Self {
        Self {
            title: NO_RECOMMENDATION_TITLE.to_owned(),
            artist: String::new(),
            album_art_url: String::new(),
            album_art_alt: String::new(),
            link: NO_RECOMMENDATION_LINK.to_owned(),
        }
    }
}
