//! Print the slug of every published post

use anyhow::Result;

use crate::Site;

/// Print one slug per line, ready to feed a pre-renderer
pub async fn run(site: &Site) -> Result<()> {
    let slugs = site.posts.list_slugs().await?;
    tracing::info!("Found {} published posts", slugs.len());
    for slug in slugs {
        println!("{}", slug);
    }
    Ok(())
}
