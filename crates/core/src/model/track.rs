use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::TypeTag;

/// A recommendable track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album_art_url: String,
    pub youtube_url: String,
}

impl Track {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album_art_url: impl Into<String>,
        youtube_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album_art_url: album_art_url.into(),
            youtube_url: youtube_url.into(),
        }
    }
}

/// Candidate tracks per type tag.
///
/// A tag may be missing or map to an empty list; both mean "no recommendation"
/// for that tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MusicCatalog {
    tracks: BTreeMap<TypeTag, Vec<Track>>,
}

impl MusicCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tracks(mut self, tag: TypeTag, tracks: Vec<Track>) -> Self {
        self.tracks.insert(tag, tracks);
        self
    }

    /// Tracks for `tag`, or an empty slice when the tag has no entry.
    #[must_use]
    pub fn tracks(&self, tag: TypeTag) -> &[Track] {
        self.tracks.get(&tag).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.tracks.contains_key(&tag)
    }

    /// Total number of tracks across all tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(TypeTag, Vec<Track>)> for MusicCatalog {
    fn from_iter<I: IntoIterator<Item = (TypeTag, Vec<Track>)>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
