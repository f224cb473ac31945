//! In-memory content source
//!
//! Holds raw documents per collection and answers queries with the same
//! semantics as the REST backend: equality filters, single-field sort,
//! reference population by depth, and a result limit. Used for offline
//! fixtures and tests.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::{CmsError, CmsResult, ContentSource, Depth, FindQuery, SortOrder};

/// Documents held in memory, keyed by collection name
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: HashMap<String, Vec<Value>>,
    /// Relation field name -> target collection
    relations: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a collection
    pub fn with_collection(mut self, name: &str, docs: Vec<Value>) -> Self {
        self.collections.insert(name.to_string(), docs);
        self
    }

    /// Declare that `field` references documents of `collection`
    pub fn with_relation(mut self, field: &str, collection: &str) -> Self {
        self.relations
            .insert(field.to_string(), collection.to_string());
        self
    }

    /// Load a fixture file: a JSON object mapping collection names to
    /// arrays of documents. `featuredImage` is wired to `media`.
    pub fn from_fixture<P: AsRef<Path>>(path: P) -> CmsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CmsError::Fixture {
            path: path.to_path_buf(),
            source,
        })?;
        let mut source = Self::from_json(&content)?;
        source
            .relations
            .insert("featuredImage".to_string(), "media".to_string());
        tracing::info!(
            "Loaded fixture {:?} ({} collections)",
            path,
            source.collections.len()
        );
        Ok(source)
    }

    /// Parse collections from a JSON object; non-array members are skipped
    pub fn from_json(content: &str) -> CmsResult<Self> {
        let root: Map<String, Value> = serde_json::from_str(content)?;
        let collections = root
            .into_iter()
            .filter_map(|(name, docs)| match docs {
                Value::Array(docs) => Some((name, docs)),
                _ => None,
            })
            .collect();
        Ok(Self {
            collections,
            relations: HashMap::new(),
        })
    }

    fn find_by_id(&self, collection: &str, id: &str) -> Option<&Value> {
        self.collections
            .get(collection)?
            .iter()
            .find(|doc| doc.get("id").and_then(id_of).as_deref() == Some(id))
    }

    /// Populate or strip references according to `depth`
    fn apply_depth(&self, mut doc: Value, depth: Depth) -> Value {
        let Some(obj) = doc.as_object_mut() else {
            return doc;
        };

        for (field, target) in &self.relations {
            let Some(value) = obj.get_mut(field) else {
                continue;
            };
            match depth {
                Depth::Resolve => {
                    if let Some(id) = id_of(value) {
                        // Dangling references resolve to null, as the CMS does
                        *value = self.find_by_id(target, &id).cloned().unwrap_or(Value::Null);
                    }
                }
                Depth::Identifiers => {
                    if let Some(id) = value.get("id").cloned() {
                        *value = id;
                    }
                }
            }
        }

        doc
    }
}

/// A bare reference: a string or integer id
fn id_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn matches(doc: &Value, query: &FindQuery) -> bool {
    query.filters.iter().all(|filter| match doc.get(&filter.field) {
        Some(Value::String(s)) => *s == filter.equals,
        Some(Value::Null) | None => false,
        Some(other) => other.to_string() == filter.equals,
    })
}

/// Compare two field values; missing and null values sort after everything
/// else regardless of direction
fn compare_field(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ord = compare_values(a, b);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        }
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => match (parse_timestamp(x), parse_timestamp(y)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => x.cmp(y),
        },
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).ok()
}

#[async_trait]
impl ContentSource for MemorySource {
    async fn find(&self, query: &FindQuery) -> CmsResult<Vec<Value>> {
        let Some(docs) = self.collections.get(&query.collection) else {
            tracing::debug!("Unknown collection {}", query.collection);
            return Ok(Vec::new());
        };

        let mut found: Vec<&Value> = docs.iter().filter(|doc| matches(doc, query)).collect();

        if let Some(sort) = &query.sort {
            found.sort_by(|a, b| compare_field(a.get(&sort.field), b.get(&sort.field), sort.order));
        }

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(found
            .into_iter()
            .take(limit)
            .map(|doc| self.apply_depth(doc.clone(), query.depth))
            .collect())
    }
}
