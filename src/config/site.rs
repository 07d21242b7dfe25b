//! Site configuration (posts.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    pub content_dir: String,
    pub output_file: String,

    // Writing
    pub new_post_name: String,
    pub include_drafts: bool,

    /// Glob patterns of source files to skip, relative to the content dir
    #[serde(default)]
    pub skip: Vec<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            output_file: "posts.json".to_string(),

            new_post_name: ":title.md".to_string(),
            include_drafts: false,

            skip: Vec::new(),
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Compile the skip patterns, warning on (and dropping) invalid ones
    pub fn skip_patterns(&self) -> Vec<glob::Pattern> {
        self.skip
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!("Ignoring invalid skip pattern {:?}: {}", p, e);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.output_file, "posts.json");
        assert!(!config.include_drafts);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
content_dir: posts
output_file: index.json
include_drafts: true
skip:
  - "README.md"
  - "notes/**"
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.output_file, "index.json");
        assert!(config.include_drafts);
        assert_eq!(config.skip.len(), 2);
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let yaml = "content_dir: posts\nsite_title: My Blog\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("site_title"));
    }

    #[test]
    fn test_invalid_skip_pattern_dropped() {
        let config = SiteConfig {
            skip: vec!["[".to_string(), "*.md".to_string()],
            ..Default::default()
        };
        let patterns = config.skip_patterns();
        assert_eq!(patterns.len(), 1);
        assert!(patterns[0].matches("draft.md"));
    }
}
