//! Initialize a new content directory

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content"))?;

    // Create default posts.yml
    let config_content = r#"# mdposts configuration

# Directory scanned for Markdown files
content_dir: content

# Generated JSON index
output_file: posts.json

# Include posts marked `draft: true`
include_drafts: false

# Filename pattern for `mdposts new` (:title, :year, :month, :day)
new_post_name: :title.md

# Glob patterns of sources to skip, relative to the content dir
skip: []
"#;

    let config_path = target_dir.join("posts.yml");
    if !config_path.exists() {
        fs::write(&config_path, config_content)?;
    }

    // Create a sample post so the first build produces something
    let sample_path = target_dir.join("content/hello-world.md");
    if !sample_path.exists() {
        let now = chrono::Local::now();
        let sample = format!(
            r#"---
title: Hello World
date: {}
tags: [getting-started]
---

Welcome! Run `mdposts build` to generate posts.json.
"#,
            now.format("%Y-%m-%d %H:%M:%S")
        );
        fs::write(&sample_path, sample)?;
    }

    Ok(())
}
