pub mod frontmatter;
pub mod sections;

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::trace;

use crate::error::{FaqError, Result};

/// A question/answer pair before it is keyed by language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Why a document contributed nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoFrontmatter,
    MalformedMetadata(String),
    MissingCategory,
}

impl SkipReason {
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::NoFrontmatter => "no_frontmatter",
            SkipReason::MalformedMetadata(_) => "malformed_metadata",
            SkipReason::MissingCategory => "missing_category",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MalformedMetadata(msg) => write!(f, "{}: {}", self.label(), msg),
            _ => f.write_str(self.label()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed { category: String, items: Vec<FaqItem> },
    Skip(SkipReason),
}

/// Read one document and extract its FAQ items.
///
/// Only I/O problems are errors; a document that is not an FAQ source is
/// [`ParseOutcome::Skip`].
pub fn parse_document(path: &Path) -> Result<ParseOutcome> {
    let raw = fs::read_to_string(path).map_err(|source| FaqError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_content(&normalize_newlines(&raw)))
}

/// `\r\n` and lone `\r` both become `\n`.
fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n")
}

/// frontmatter → sections → items
pub fn parse_content(content: &str) -> ParseOutcome {
    let category = match frontmatter::category(content) {
        Ok(c) => c,
        Err(reason) => return ParseOutcome::Skip(reason),
    };

    let items = sections::split_sections(content)
        .iter()
        .filter_map(|section| {
            let (question, answer) = section.candidate();
            if sections::looks_like_faq(&question) {
                Some(FaqItem { question, answer })
            } else {
                trace!(level = section.level, %question, "not a question");
                None
            }
        })
        .collect();

    ParseOutcome::Parsed { category, items }
}
