//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new post file with front matter pre-filled
pub fn create_post(site: &Site, title: &str, path: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&site.content_dir)?;

    // Generate filename
    let filename = if let Some(p) = path {
        // Tolerate an explicit path already carrying the extension
        format!("{}.md", p.strip_suffix(".md").unwrap_or(p))
    } else {
        let post_name = &site.config.new_post_name;
        let slug = slug::slugify(title);

        post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
    };

    let file_path = site.content_dir.join(&filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
date: {}
---
"#,
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
