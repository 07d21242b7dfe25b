//! Content module - front matter and post metadata

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use post::PostMeta;
