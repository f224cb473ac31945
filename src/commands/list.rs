//! List published posts

use anyhow::Result;

use crate::helpers::short_date;
use crate::Site;

/// List published posts, newest first; `latest` caps the count
pub async fn run(site: &Site, latest: Option<usize>) -> Result<()> {
    let posts = match latest {
        Some(n) => site.posts.list_latest(n).await?,
        None => site.posts.list_published().await?,
    };

    println!("Posts ({}):", posts.len());
    for post in posts {
        let tags = post.tag_names().join(", ");
        println!(
            "  {} - {} [{}]{}",
            short_date(post.published_at.as_ref()),
            post.title,
            post.slug,
            if tags.is_empty() {
                String::new()
            } else {
                format!(" ({})", tags)
            }
        );
    }

    Ok(())
}
