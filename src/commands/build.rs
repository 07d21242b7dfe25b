//! Build the JSON index

use anyhow::Result;
use notify::Watcher;
use serde::Serialize;
use std::fs;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::content::loader::ContentLoader;
use crate::Site;

/// Build the index: load all posts and write them to the output file
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;

    tracing::info!("Loaded {} posts", posts.len());

    write_index(site, &posts)?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {:?} with {} posts in {:.2}s",
        site.output_file,
        posts.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Serialize the posts to the output file as pretty-printed JSON.
///
/// Uses a 4-space indent to match the index format site front-ends already
/// consume.
fn write_index(site: &Site, posts: &[crate::content::PostMeta]) -> Result<()> {
    if let Some(parent) = site.output_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    posts.serialize(&mut serializer)?;
    buf.push(b'\n');

    fs::write(&site.output_file, buf)?;
    Ok(())
}

/// Watch for file changes and rebuild
pub fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    // Watch content directory
    watcher.watch(site.content_dir.as_ref(), notify::RecursiveMode::Recursive)?;

    // Watch config file
    let config_path = site.base_dir.join("posts.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Debounce: only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, rebuilding...");
                    if let Err(e) = run(site) {
                        tracing::error!("Build failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Continue waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
