use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One line of the source dump. The dump contains entries whose `word` or
/// `content` is missing or not a string, so both stay raw JSON; unknown
/// fields ride along in `extra` and reappear in the emitted artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story: Option<Story>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordRecord {
    /// Headword, when present and a string.
    pub fn word(&self) -> Option<&str> {
        self.word.as_ref().and_then(Value::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }

    pub fn set_content(&mut self, content: String) {
        self.content = Some(Value::String(content));
    }
}

/// One numbered example sentence. `translation` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    pub translation: String,
}

/// A short bilingual story, at most one per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub english: String,
    pub chinese: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_round_trip() {
        let record: WordRecord =
            serde_json::from_str(r#"{"word":"apple","content":"text","freq":3}"#).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["word"], "apple");
        assert_eq!(json["content"], "text");
        assert_eq!(json["freq"], 3);
    }

    #[test]
    fn empty_sections_stay_out_of_output() {
        let record: WordRecord = serde_json::from_str(r#"{"word":"a","content":"b"}"#).unwrap();
        let out = serde_json::to_string(&record).unwrap();
        assert!(!out.contains("examples"));
        assert!(!out.contains("story"));
    }

    #[test]
    fn non_string_word_is_tolerated() {
        let record: WordRecord = serde_json::from_str(r#"{"word":42,"content":"x"}"#).unwrap();
        assert_eq!(record.word(), None);
        assert_eq!(record.content(), Some("x"));
    }

    #[test]
    fn example_and_story_shapes() {
        let example = Example {
            sentence: "s".into(),
            translation: String::new(),
        };
        assert_eq!(
            serde_json::to_string(&example).unwrap(),
            r#"{"sentence":"s","translation":""}"#
        );
        let story = Story {
            english: "e".into(),
            chinese: "c".into(),
        };
        assert_eq!(
            serde_json::to_string(&story).unwrap(),
            r#"{"english":"e","chinese":"c"}"#
        );
    }
}
