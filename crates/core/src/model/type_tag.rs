use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeTagError {
    #[error("unknown type tag: {0}")]
    Unknown(String),
}

//
// ─── TYPE TAG ─────────────────────────────────────────────────────────────────
//

/// Mood category shared by quiz choices and the music catalog.
///
/// The set is closed: every choice in the questions dataset must carry one of
/// these four values, and the catalog is keyed by the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Upbeat,
    Chill,
    Energetic,
    Melancholy,
}

impl TypeTag {
    /// All tags in their stable order.
    pub const ALL: [TypeTag; 4] = [
        TypeTag::Upbeat,
        TypeTag::Chill,
        TypeTag::Energetic,
        TypeTag::Melancholy,
    ];

    /// Position of this tag within [`TypeTag::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TypeTag::Upbeat => 0,
            TypeTag::Chill => 1,
            TypeTag::Energetic => 2,
            TypeTag::Melancholy => 3,
        }
    }

    /// Wire identifier, as used in the JSON datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Upbeat => "upbeat",
            TypeTag::Chill => "chill",
            TypeTag::Energetic => "energetic",
            TypeTag::Melancholy => "melancholy",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TypeTag::Upbeat => "Upbeat",
            TypeTag::Chill => "Chill",
            TypeTag::Energetic => "Energetic",
            TypeTag::Melancholy => "Melancholy",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = TypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| TypeTagError::Unknown(s.to_owned()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, tag) in TypeTag::ALL.into_iter().enumerate() {
            assert_eq!(tag.index(), i);
        }
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("chill".parse::<TypeTag>().unwrap(), TypeTag::Chill);
        let err = "jazzy".parse::<TypeTag>().unwrap_err();
        assert_eq!(err, TypeTagError::Unknown("jazzy".into()));
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&TypeTag::Melancholy).unwrap();
        assert_eq!(json, "\"melancholy\"");
        let tag: TypeTag = serde_json::from_str("\"energetic\"").unwrap();
        assert_eq!(tag, TypeTag::Energetic);
        assert!(serde_json::from_str::<TypeTag>("\"Upbeat\"").is_err());
    }
}
