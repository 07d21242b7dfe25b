//! Content loader - collects post metadata from the content directory

use anyhow::Result;
use std::cmp::Reverse;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, PostMeta};
use crate::Site;

/// Loads post metadata from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    skip_patterns: Vec<glob::Pattern>,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        let skip_patterns = site.config.skip_patterns();
        Self {
            site,
            skip_patterns,
        }
    }

    /// Load all posts from the content directory, sorted newest first.
    ///
    /// Posts without a parseable date sort after dated ones; ties break by
    /// filename so the index is deterministic.
    pub fn load_posts(&self) -> Result<Vec<PostMeta>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            anyhow::bail!("Content directory not found: {:?}", content_dir);
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative = path.strip_prefix(content_dir).unwrap_or(path);
            if self.is_skipped(relative) {
                tracing::debug!("Skipped by pattern: {:?}", relative);
                continue;
            }

            match self.load_post(path) {
                Ok(Some(post)) => {
                    if !post.draft || self.site.config.include_drafts {
                        posts.push(post);
                    } else {
                        tracing::debug!("Skipping draft: {:?}", relative);
                    }
                }
                Ok(None) => {
                    tracing::debug!("No front matter, skipping: {:?}", relative);
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Sort by date descending (newest first), undated posts last
        posts.sort_by(|a, b| {
            (Reverse(a.sort_date), &a.filename).cmp(&(Reverse(b.sort_date), &b.filename))
        });

        Ok(posts)
    }

    /// Load a single post from a file.
    ///
    /// Returns `Ok(None)` when the file has no front-matter block.
    fn load_post(&self, path: &Path) -> Result<Option<PostMeta>> {
        let content = fs::read_to_string(path)?;
        let Some((fm, _body)) = FrontMatter::parse(&content) else {
            return Ok(None);
        };

        let filename = path
            .strip_prefix(&self.site.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        // id: front matter wins, the file stem is the fallback
        let id = fm.id.clone().unwrap_or_else(|| stem.clone());

        // title: front matter wins, the file stem is the fallback
        let title = fm.title.clone().unwrap_or_else(|| stem.clone());

        let sort_date = fm.parse_date();
        if fm.date.is_some() && sort_date.is_none() {
            tracing::warn!(
                "Unparseable date {:?} in {:?}, post will sort last",
                fm.date,
                filename
            );
        }

        let mut post = PostMeta::new(id, title, filename);
        post.date = fm.date;
        post.updated = fm.updated;
        post.tags = fm.tags;
        post.categories = fm.categories;
        post.draft = fm.draft;
        post.extra = fm.extra;
        post.sort_date = sort_date;

        Ok(Some(post))
    }

    fn is_skipped(&self, relative: &Path) -> bool {
        let relative = relative.to_string_lossy();
        self.skip_patterns
            .iter()
            .any(|p| p.matches(relative.as_ref()))
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;

    fn site_at(base: &Path, config: SiteConfig) -> Site {
        Site {
            content_dir: base.join(&config.content_dir),
            output_file: base.join(&config.output_file),
            base_dir: base.to_path_buf(),
            config,
        }
    }

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(&content, "old.md", "---\ntitle: Old\ndate: 2023-01-01\n---\n");
        write_post(&content, "new.md", "---\ntitle: New\ndate: 2024-06-15\n---\n");
        write_post(&content, "undated.md", "---\ntitle: Undated\n---\n");

        let site = site_at(tmp.path(), SiteConfig::default());
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn test_tie_breaks_by_filename() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(&content, "b.md", "---\ntitle: B\ndate: 2024-01-01\n---\n");
        write_post(&content, "a.md", "---\ntitle: A\ndate: 2024-01-01\n---\n");

        let site = site_at(tmp.path(), SiteConfig::default());
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        let names: Vec<_> = posts.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_skips_files_without_frontmatter() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(&content, "post.md", "---\ntitle: Post\n---\n");
        write_post(&content, "plain.md", "No front matter here.\n");
        write_post(&content, "notes.txt", "---\ntitle: Not markdown\n---\n");

        let site = site_at(tmp.path(), SiteConfig::default());
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Post");
    }

    #[test]
    fn test_id_falls_back_to_file_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(&content, "my-post.md", "---\ntitle: My Post\n---\n");
        write_post(&content, "custom.md", "---\nid: override\ntitle: Custom\n---\n");

        let site = site_at(tmp.path(), SiteConfig::default());
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        let by_file = |name: &str| posts.iter().find(|p| p.filename == name).unwrap();
        assert_eq!(by_file("my-post.md").id, "my-post");
        assert_eq!(by_file("custom.md").id, "override");
    }

    #[test]
    fn test_drafts_skipped_unless_configured() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(&content, "wip.md", "---\ntitle: WIP\ndraft: true\n---\n");

        let site = site_at(tmp.path(), SiteConfig::default());
        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());

        let config = SiteConfig {
            include_drafts: true,
            ..Default::default()
        };
        let site = site_at(tmp.path(), config);
        assert_eq!(ContentLoader::new(&site).load_posts().unwrap().len(), 1);
    }

    #[test]
    fn test_skip_patterns() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(&content, "keep.md", "---\ntitle: Keep\n---\n");
        write_post(
            &content.join("notes"),
            "scratch.md",
            "---\ntitle: Scratch\n---\n",
        );

        let config = SiteConfig {
            skip: vec!["notes/**".to_string()],
            ..Default::default()
        };
        let site = site_at(tmp.path(), config);
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Keep");
    }

    #[test]
    fn test_subdirectory_filename_relative() {
        let tmp = tempfile::tempdir().unwrap();
        let content = tmp.path().join("content");
        write_post(
            &content.join("2024"),
            "nested.md",
            "---\ntitle: Nested\ndate: 2024-03-01\n---\n",
        );

        let site = site_at(tmp.path(), SiteConfig::default());
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].filename, PathBuf::from("2024").join("nested.md").to_string_lossy());
    }

    #[test]
    fn test_missing_content_dir_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let site = site_at(tmp.path(), SiteConfig::default());
        assert!(ContentLoader::new(&site).load_posts().is_err());
    }
}
