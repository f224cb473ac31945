//! Post and Media models as returned by the CMS

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document::Document;

/// Publication state of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    /// Any status string this crate does not know; never shown
    #[serde(other)]
    Unknown,
}

impl PostStatus {
    /// Wire value used in CMS filters
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Unknown => "unknown",
        }
    }
}

/// An uploaded media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "id_string")]
    pub id: String,
    /// Null until the upload is stored
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// A reference to another CMS document.
///
/// Depending on the query depth the CMS sends either the bare identifier or
/// the populated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Resolved(T),
    Id(#[serde(deserialize_with = "id_string")] String),
}

impl<T> Relation<T> {
    /// The populated document, if the reference was resolved
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Relation::Resolved(doc) => Some(doc),
            Relation::Id(_) => None,
        }
    }
}

/// A tag entry on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub tag: String,
}

impl TagEntry {
    pub fn new(tag: &str) -> Self {
        Self {
            id: None,
            tag: tag.to_string(),
        }
    }
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// CMS document id
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// URL-friendly unique name
    pub slug: String,

    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    #[serde(default)]
    pub status: PostStatus,

    /// Publication date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Last updated date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Display string such as "8 min"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// Tags in display order; bare ids when queried without depth
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Relation<TagEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<Relation<Media>>,

    /// Rich-text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Document>,
}

impl Post {
    /// Create a draft post with minimal required fields
    pub fn new(id: &str, slug: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            slug: slug.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            status: PostStatus::Draft,
            published_at: None,
            updated_at: None,
            read_time: None,
            tags: Vec::new(),
            featured_image: None,
            content: None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Names of the populated tags, in display order
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags
            .iter()
            .filter_map(Relation::resolved)
            .map(|t| t.tag.as_str())
            .collect()
    }

    /// The featured image, only when it was resolved and has a url
    pub fn featured_image(&self) -> Option<&Media> {
        self.featured_image
            .as_ref()
            .and_then(Relation::resolved)
            .filter(|m| !m.url.is_empty())
    }

    /// Alt text for the featured image, falling back to the post title
    pub fn featured_image_alt(&self) -> Option<&str> {
        self.featured_image().map(|m| match m.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt,
            _ => self.title.as_str(),
        })
    }
}

/// Payload sends `null` for empty optional fields
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids are strings on MongoDB and integers on SQL databases
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
