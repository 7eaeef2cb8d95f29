use std::{collections::BTreeMap, path::Path, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use super::error::{Result, StoreError};

// `---` fenced YAML block at the very top of the file, then the body.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)\A---[ \t]*\r?\n(.*?)^---[ \t]*\r?$\n?(.*)\z")
        .expect("front matter pattern is valid")
});

#[derive(Deserialize, Debug, Default)]
struct RawFrontmatter {
    title: Option<String>,
    date: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Frontmatter {
    pub title: String,
    pub date: String,
    pub extra: BTreeMap<String, Value>,
}

/// Splits `content` into its parsed front matter and the markdown body.
///
/// `title` and `date` are required. Every other key is kept as-is in
/// `extra`.
pub(crate) fn parse<'a>(content: &'a str, path: &Path) -> Result<(Frontmatter, &'a str)> {
    let Some(caps) = HEADER_PATTERN.captures(content) else {
        return Err(StoreError::frontmatter(path, "missing `---` header block"));
    };
    let header = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let raw: RawFrontmatter = if header.trim().is_empty() {
        RawFrontmatter::default()
    } else {
        serde_yaml::from_str(header).map_err(|e| StoreError::frontmatter(path, e.to_string()))?
    };

    let title = raw
        .title
        .ok_or_else(|| StoreError::frontmatter(path, "title is required"))?;
    let date = raw
        .date
        .ok_or_else(|| StoreError::frontmatter(path, "date is required"))?;

    Ok((
        Frontmatter {
            title,
            date,
            extra: raw.extra,
        },
        body,
    ))
}
