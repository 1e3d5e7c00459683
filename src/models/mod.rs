mod language;
mod snippet;

pub use language::{Language, LanguageInfo};
pub use snippet::{NewSnippet, SUMMARY_SOURCE_CHARS, Snippet, SnippetSummary};
