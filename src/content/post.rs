//! Post metadata model

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One record in the generated JSON index.
///
/// Date strings are emitted exactly as written in the front matter; the
/// parsed form is only used to order the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMeta {
    /// Post identifier (front-matter `id`, or the file stem)
    pub id: String,

    /// Post title
    pub title: String,

    /// Source file name, relative to the content directory
    pub filename: String,

    /// Publication date, verbatim from the front matter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Last updated date, verbatim from the front matter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    /// Post tags
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,

    /// Post categories
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub categories: Vec<String>,

    /// Whether the post is a draft
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub draft: bool,

    /// Custom front-matter fields, in source order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,

    /// Parsed date used as the sort key
    #[serde(skip)]
    pub sort_date: Option<DateTime<Local>>,
}

impl PostMeta {
    /// Create a new record with minimal required fields
    pub fn new(id: String, title: String, filename: String) -> Self {
        Self {
            id,
            title,
            filename,
            date: None,
            updated: None,
            tags: Vec::new(),
            categories: Vec::new(),
            draft: false,
            extra: IndexMap::new(),
            sort_date: None,
        }
    }
}
