//! List indexed content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::loader::ContentLoader;
use crate::content::PostMeta;
use crate::Site;

/// List indexed content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.as_deref().unwrap_or("no date"),
                    post.title,
                    post.filename
                );
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts()?;
            let tags = tally(&posts, |p| &p.tags);
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "category" | "categories" => {
            let posts = loader.load_posts()?;
            let categories = tally(&posts, |p| &p.categories);
            println!("Categories ({}):", categories.len());
            for (cat, count) in categories {
                println!("  {} ({})", cat, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, category",
                content_type
            );
        }
    }

    Ok(())
}

/// Count occurrences of a per-post field across all posts.
///
/// Sorted by count descending, then name, so equal counts print in a
/// stable order.
fn tally<'a, F>(posts: &'a [PostMeta], field: F) -> Vec<(String, usize)>
where
    F: Fn(&'a PostMeta) -> &'a [String],
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for name in field(post) {
            *counts.entry(name.clone()).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
