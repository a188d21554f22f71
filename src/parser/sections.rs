use std::sync::LazyLock;

use regex::Regex;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{2,3}) (.*)$").unwrap());

/// A `##`/`###` header and the lines up to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub title: String,
    pub body: Vec<String>,
}

impl Section {
    /// Question/answer candidate: first line of the trimmed section text,
    /// and everything after it.
    pub fn candidate(&self) -> (String, String) {
        let mut text = self.title.clone();
        for line in &self.body {
            text.push('\n');
            text.push_str(line);
        }

        let mut lines = text.trim().split('\n');
        let question = lines.next().unwrap_or_default().trim().to_string();
        let answer = lines.collect::<Vec<_>>().join("\n").trim().to_string();
        (question, answer)
    }
}

/// Split a document into header-delimited sections.
///
/// The first line never opens a section; everything before the first header
/// is preamble and is dropped.
pub fn split_sections(content: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for (i, line) in content.split('\n').enumerate() {
        if i > 0 {
            if let Some(caps) = HEADER_RE.captures(line) {
                sections.push(Section {
                    level: caps[1].len() as u8,
                    title: caps[2].to_string(),
                    body: Vec::new(),
                });
                continue;
            }
        }
        if let Some(current) = sections.last_mut() {
            current.body.push(line.to_string());
        }
    }

    sections
}

/// Headers that read like a question, or are explicitly marked FAQ.
pub fn looks_like_faq(question: &str) -> bool {
    question.contains('?') || question.contains("FAQ")
}
