pub mod examples;
pub mod section;
pub mod story;

use crate::record::{Example, Story, WordRecord};

/// Everything pulled out of one content field, plus what is left of it.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    pub examples: Vec<Example>,
    pub story: Option<Story>,
    pub content: String,
}

/// Two-stage pipeline over an immutable content value: example sentences
/// first, then the story, each stage returning the content with its
/// section cut out.
pub fn extract_content(content: &str) -> ExtractedContent {
    let (examples, content) = examples::extract(content);
    let (story, content) = story::extract(&content);
    ExtractedContent {
        examples,
        story,
        content,
    }
}

/// Apply extraction to one record. Records whose content is missing or
/// not a string pass through untouched.
pub fn process_record(record: &WordRecord) -> WordRecord {
    let mut out = record.clone();
    let Some(content) = record.content() else {
        return out;
    };
    let extracted = extract_content(content);
    out.examples = extracted.examples;
    out.story = extracted.story;
    out.set_content(extracted.content);
    out
}
