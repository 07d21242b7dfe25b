//! mdposts: build a posts.json index from Markdown front matter
//!
//! This crate implements a small content build step for static sites: it
//! scans a content directory for Markdown files, extracts the front-matter
//! block from each, and writes the collected metadata to a JSON index file.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

/// The main mdposts application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content (source) directory
    pub content_dir: std::path::PathBuf,
    /// Output JSON index file
    pub output_file: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("posts.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let output_file = base_dir.join(&config.output_file);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            output_file,
        })
    }

    /// Build the JSON index
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove the generated index
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
