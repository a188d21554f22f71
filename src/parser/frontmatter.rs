use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

use super::SkipReason;

static FRONTMATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---").unwrap());

const CATEGORY_KEY: &str = "faq_category";

/// Pull `faq_category` out of the leading `---` block.
pub fn category(content: &str) -> Result<String, SkipReason> {
    let caps = FRONTMATTER_RE
        .captures(content)
        .ok_or(SkipReason::NoFrontmatter)?;

    let block = &caps[1];
    if block.trim().is_empty() {
        return Err(SkipReason::MissingCategory);
    }

    let mut meta = load(block)?;
    meta.apply_merge().map_err(|e| SkipReason::MalformedMetadata(e.to_string()))?;

    // Lists and scalars carry no category.
    let value = meta
        .as_mapping()
        .and_then(|m| m.get(CATEGORY_KEY))
        .ok_or(SkipReason::MissingCategory)?;

    Ok(render(value))
}

/// Top-level mappings go through a `HashMap` so a repeated key keeps its
/// last value; `Value` alone rejects duplicates.
fn load(block: &str) -> Result<Value, SkipReason> {
    match serde_yaml::from_str::<HashMap<Value, Value>>(block) {
        Ok(map) => Ok(Value::Mapping(map.into_iter().collect())),
        Err(_) => serde_yaml::from_str::<Value>(block)
            .map_err(|e| SkipReason::MalformedMetadata(e.to_string())),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
