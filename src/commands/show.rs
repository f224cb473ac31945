//! Render a single post

use anyhow::Result;

use crate::templates::{self, PostView};
use crate::Site;

/// Print a post as HTML, or its view data as JSON
pub async fn run(site: &Site, slug: &str, html: bool) -> Result<()> {
    let Some(post) = site.posts.get_by_slug(slug).await? else {
        anyhow::bail!("No published post with slug {:?}", slug);
    };

    if html {
        println!("{}", templates::render_post(&site.config, &post));
    } else {
        let view = PostView::new(&post);
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}
