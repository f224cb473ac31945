//! Query interface to the headless CMS
//!
//! The CMS is an external collaborator. This module only describes the
//! read-only queries the blog needs and the sources that can answer them:
//! a Payload REST client and an in-memory store used for fixtures and tests.

mod error;
mod memory;
mod payload;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

pub use error::{CmsError, CmsResult};
pub use memory::MemorySource;
pub use payload::PayloadClient;

/// How far references are populated in query results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// References stay bare identifiers
    Identifiers,
    /// One level of references (media, tags) is populated
    Resolve,
}

impl Depth {
    /// Numeric depth understood by the CMS
    pub fn level(&self) -> u8 {
        match self {
            Depth::Identifiers => 0,
            Depth::Resolve => 1,
        }
    }
}

/// Equality filter on a document field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub equals: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort key, written `-field` for descending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Descending,
        }
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            SortOrder::Ascending => write!(f, "{}", self.field),
            SortOrder::Descending => write!(f, "-{}", self.field),
        }
    }
}

/// A read-only query against one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindQuery {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub sort: Option<Sort>,
    pub depth: Depth,
    pub limit: Option<usize>,
}

impl FindQuery {
    pub fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            filters: Vec::new(),
            sort: None,
            depth: Depth::Resolve,
            limit: None,
        }
    }

    pub fn where_equals(mut self, field: &str, value: &str) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            equals: value.to_string(),
        });
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Something that can answer [`FindQuery`]s with raw JSON documents
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Run a query and return the matching documents in CMS order
    async fn find(&self, query: &FindQuery) -> CmsResult<Vec<Value>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_display() {
        assert_eq!(Sort::descending("publishedAt").to_string(), "-publishedAt");
        assert_eq!(Sort::ascending("title").to_string(), "title");
    }

    #[test]
    fn test_query_builder() {
        let query = FindQuery::new("posts")
            .where_equals("status", "published")
            .sort(Sort::descending("publishedAt"))
            .depth(Depth::Identifiers)
            .limit(3);

        assert_eq!(query.collection, "posts");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.depth.level(), 0);
        assert_eq!(query.limit, Some(3));
    }
}
