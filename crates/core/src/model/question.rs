use serde::{Deserialize, Serialize};

use crate::model::TypeTag;

/// One selectable answer; picking it counts toward `tag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    #[serde(rename = "type")]
    pub tag: TypeTag,
}

impl Choice {
    #[must_use]
    pub fn new(text: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// A quiz question with its ordered choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn new(text: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            text: text.into(),
            choices,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_type_field_is_renamed() {
        let json = r#"{"text":"Dance","type":"upbeat"}"#;
        let choice: Choice = serde_json::from_str(json).unwrap();
        assert_eq!(choice, Choice::new("Dance", TypeTag::Upbeat));
    }

    #[test]
    fn question_rejects_unknown_tag() {
        let json = r#"{"text":"Q","choices":[{"text":"A","type":"jazzy"}]}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
