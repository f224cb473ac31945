//! Payload CMS REST client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{CmsError, CmsResult, ContentSource, FindQuery};

/// Client for a Payload REST API (`GET /api/{collection}`).
///
/// Built once and shared; the underlying connection pool belongs to
/// `reqwest`.
#[derive(Debug, Clone)]
pub struct PayloadClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Paginated list response; only the documents are used
#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    docs: Vec<Value>,
}

impl PayloadClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> CmsResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Endpoint for a collection
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/{}", self.base_url, collection)
    }
}

/// Encode a query the way Payload's `qs` parser expects it
pub(crate) fn query_params(query: &FindQuery) -> Vec<(String, String)> {
    let mut params = Vec::new();

    for filter in &query.filters {
        params.push((
            format!("where[{}][equals]", filter.field),
            filter.equals.clone(),
        ));
    }

    if let Some(sort) = &query.sort {
        params.push(("sort".to_string(), sort.to_string()));
    }

    params.push(("depth".to_string(), query.depth.level().to_string()));

    // Payload pages results (10 by default); an unbounded query has to
    // switch pagination off instead of passing a limit
    match query.limit {
        Some(limit) => params.push(("limit".to_string(), limit.to_string())),
        None => params.push(("pagination".to_string(), "false".to_string())),
    }

    params
}

#[async_trait]
impl ContentSource for PayloadClient {
    async fn find(&self, query: &FindQuery) -> CmsResult<Vec<Value>> {
        let url = self.collection_url(&query.collection);
        let params = query_params(query);
        tracing::debug!("GET {} {:?}", url, params);

        let mut request = self.client.get(&url).query(&params);
        if let Some(key) = &self.api_key {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("users API-Key {}", key),
            );
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("CMS query on {} failed with {}", query.collection, status);
            return Err(CmsError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: FindResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            "CMS returned {} {} documents",
            parsed.docs.len(),
            query.collection
        );
        Ok(parsed.docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::{Depth, Sort};

    fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_query_params_latest() {
        let query = FindQuery::new("posts")
            .where_equals("status", "published")
            .sort(Sort::descending("publishedAt"))
            .depth(Depth::Resolve)
            .limit(3);

        assert_eq!(
            pairs(&query_params(&query)),
            vec![
                ("where[status][equals]", "published"),
                ("sort", "-publishedAt"),
                ("depth", "1"),
                ("limit", "3"),
            ]
        );
    }

    #[test]
    fn test_query_params_unbounded() {
        let query = FindQuery::new("posts")
            .where_equals("status", "published")
            .depth(Depth::Identifiers);

        assert_eq!(
            pairs(&query_params(&query)),
            vec![
                ("where[status][equals]", "published"),
                ("depth", "0"),
                ("pagination", "false"),
            ]
        );
    }

    #[test]
    fn test_collection_url() {
        let client =
            PayloadClient::new("https://cms.example.com/", None, Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.collection_url("posts"),
            "https://cms.example.com/api/posts"
        );
    }

    #[test]
    fn test_find_response_shape() {
        let parsed: FindResponse = serde_json::from_str(
            r#"{"docs":[{"id":"1"}],"totalDocs":1,"limit":10,"page":1,"hasNextPage":false}"#,
        )
        .unwrap();
        assert_eq!(parsed.docs.len(), 1);
    }
}
