//! Post repository - the read-only access patterns the site needs

use serde::Deserialize;
use std::sync::Arc;

use super::{Post, PostStatus};
use crate::cms::{CmsResult, ContentSource, Depth, FindQuery, Sort};

/// Collection holding blog posts
pub const POSTS_COLLECTION: &str = "posts";

/// The fields slug listing reads from an unpopulated post
#[derive(Debug, Deserialize)]
struct SlugEntry {
    slug: String,
    #[serde(default)]
    status: PostStatus,
}

/// Read-only access to published posts.
///
/// Constructed once around a shared [`ContentSource`] and cloned into each
/// request. Whatever the source returns, results only ever contain
/// published posts, ordered newest first with undated posts last.
#[derive(Clone)]
pub struct PostRepository {
    source: Arc<dyn ContentSource>,
    collection: String,
}

impl PostRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self::with_collection(source, POSTS_COLLECTION)
    }

    pub fn with_collection(source: Arc<dyn ContentSource>, collection: &str) -> Self {
        Self {
            source,
            collection: collection.to_string(),
        }
    }

    fn published(&self) -> FindQuery {
        FindQuery::new(&self.collection).where_equals("status", PostStatus::Published.as_str())
    }

    /// All published posts, newest first
    pub async fn list_published(&self) -> CmsResult<Vec<Post>> {
        let query = self
            .published()
            .sort(Sort::descending("publishedAt"))
            .depth(Depth::Resolve);
        let posts = self.fetch(&query).await?;
        tracing::debug!("Listed {} published posts", posts.len());
        Ok(posts)
    }

    /// At most `limit` published posts, newest first
    pub async fn list_latest(&self, limit: usize) -> CmsResult<Vec<Post>> {
        // The CMS reads limit=0 as "no limit"
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = self
            .published()
            .sort(Sort::descending("publishedAt"))
            .depth(Depth::Resolve)
            .limit(limit);
        let mut posts = self.fetch(&query).await?;
        posts.truncate(limit);
        Ok(posts)
    }

    /// The published post with this slug.
    ///
    /// Drafts and missing posts both come back as `None`.
    pub async fn get_by_slug(&self, slug: &str) -> CmsResult<Option<Post>> {
        let query = self
            .published()
            .where_equals("slug", slug)
            .depth(Depth::Resolve)
            .limit(1);
        let post = self
            .fetch(&query)
            .await?
            .into_iter()
            .find(|p| p.slug == slug);

        if post.is_none() {
            tracing::debug!("No published post with slug {:?}", slug);
        }
        Ok(post)
    }

    /// Slugs of all published posts, without populating references
    pub async fn list_slugs(&self) -> CmsResult<Vec<String>> {
        let query = self.published().depth(Depth::Identifiers);
        let docs = self.source.find(&query).await?;
        let entries = docs
            .into_iter()
            .map(serde_json::from_value::<SlugEntry>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries
            .into_iter()
            .filter(|e| e.status == PostStatus::Published)
            .map(|e| e.slug)
            .collect())
    }

    async fn fetch(&self, query: &FindQuery) -> CmsResult<Vec<Post>> {
        let docs = self.source.find(query).await?;
        let mut posts = docs
            .into_iter()
            .map(serde_json::from_value::<Post>)
            .collect::<Result<Vec<_>, _>>()?;

        posts.retain(Post::is_published);
        sort_newest_first(&mut posts);
        Ok(posts)
    }
}

/// Stable sort by publish date, newest first; undated posts go last in
/// their original order
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
