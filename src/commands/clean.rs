//! Clean the generated index

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the generated index file
pub fn run(site: &Site) -> Result<()> {
    if site.output_file.exists() {
        fs::remove_file(&site.output_file)?;
        tracing::info!("Deleted: {:?}", site.output_file);
    }

    Ok(())
}
