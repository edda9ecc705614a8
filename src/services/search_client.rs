//! Client for the external managed search service.
//!
//! All query execution, relevance scoring, suggestion matching, and
//! faceting happen on the service side; this client only shapes the REST
//! calls and decodes the responses. Constructed once at startup from
//! configuration and shared via `web::Data` - no per-request client setup.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::SearchSettings;
use crate::error::{AppError, AppResult};
use crate::models::Hotel;

/// HTTP connect timeout for search service calls.
const HTTP_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// HTTP total timeout for search service calls.
const HTTP_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Fields requested from the index; anything else never leaves the service.
const SELECT_FIELDS: &str = "HotelName,Description,Tags,Rooms";

/// Maximum suggestions per suggest call.
const SUGGEST_TOP: usize = 8;
/// Maximum completions per autocomplete call.
const AUTOCOMPLETE_TOP: usize = 5;

/// Markup wrapped around matched substrings when suggest highlighting is on.
pub const HIGHLIGHT_PRE_TAG: &str = "<b>";
pub const HIGHLIGHT_POST_TAG: &str = "</b>";

/// Faceted fields and their bucket caps, in response order.
pub const FACET_FIELDS: [(&str, usize); 2] = [("Tags", 100), ("Category", 20)];

/// One facet bucket: a field value and its occurrence count.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetBucket {
    pub value: serde_json::Value,
    #[serde(default)]
    pub count: u64,
}

impl FacetBucket {
    /// The bucket value as display text.
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Decoded response of a document query.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Service-side total for the query; may exceed the number of hits
    /// actually retrieved under the configured cap
    #[serde(rename = "@odata.count", default)]
    pub count: Option<u64>,
    /// Retrieved hits, in relevance order
    #[serde(default)]
    pub value: Vec<Hotel>,
    /// Facet buckets per field, present on facet queries only
    #[serde(rename = "@search.facets", default)]
    pub facets: Option<HashMap<String, Vec<FacetBucket>>>,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    value: Vec<SuggestHit>,
}

/// A suggest hit: the suggestion text plus the source document, of which
/// only the text is kept.
#[derive(Debug, Deserialize)]
struct SuggestHit {
    #[serde(rename = "@search.text")]
    text: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    value: Vec<AutocompleteHit>,
}

#[derive(Debug, Deserialize)]
struct AutocompleteHit {
    text: String,
}

/// Search service client wrapper.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
    index: String,
    suggester: String,
    api_version: String,
    query_key: SecretString,
    max_results: usize,
}

impl SearchClient {
    /// Create a new client from configuration.
    pub fn new(settings: &SearchSettings) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client for search service");

        tracing::info!(
            "Search client initialized: endpoint={} index={}",
            settings.endpoint,
            settings.index
        );

        SearchClient {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            index: settings.index.clone(),
            suggester: settings.suggester.clone(),
            api_version: settings.api_version.clone(),
            query_key: settings.query_key.clone(),
            max_results: settings.max_results,
        }
    }

    /// POST one docs operation (`search`, `suggest`, `autocomplete`) and
    /// decode the JSON response. Any transport, status, or decode failure
    /// is terminal for the request - no retries.
    async fn post_docs<R: DeserializeOwned>(
        &self,
        operation: &str,
        body: serde_json::Value,
    ) -> AppResult<R> {
        let url = format!(
            "{}/indexes/{}/docs/{}?api-version={}",
            self.endpoint, self.index, operation, self.api_version
        );

        let response = self
            .http
            .post(&url)
            .header("api-key", self.query_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(AppError::external_service)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "{} returned {}: {}",
                operation, status, detail
            )));
        }

        response.json().await.map_err(AppError::external_service)
    }

    /// Run a full-text query over the hotel index.
    ///
    /// Match-mode ALL so every term of a multi-word query must match, a
    /// field selection so unused fields never cross the wire, and a top
    /// bound so the whole (bounded) result set comes back in one call for
    /// local slicing.
    pub async fn query(&self, term: &str) -> AppResult<QueryResponse> {
        let response: QueryResponse = self
            .post_docs(
                "search",
                json!({
                    "search": term,
                    "searchMode": "all",
                    "select": SELECT_FIELDS,
                    "count": true,
                    "top": self.max_results,
                }),
            )
            .await?;

        if let Some(count) = response.count {
            if count as usize > response.value.len() {
                tracing::warn!(
                    "Result set truncated at {} of {} service-side matches",
                    response.value.len(),
                    count
                );
            }
        }

        Ok(response)
    }

    /// Run a facet-only query: every document counted, none returned.
    pub async fn facet_query(&self) -> AppResult<QueryResponse> {
        let facets: Vec<String> = FACET_FIELDS
            .iter()
            .map(|(field, cap)| format!("{},count:{}", field, cap))
            .collect();

        self.post_docs(
            "search",
            json!({
                "search": "*",
                "facets": facets,
                "top": 0,
            }),
        )
        .await
    }

    /// Fetch up to eight suggestions from the configured suggester.
    /// With `highlights`, matched substrings come back wrapped in the fixed
    /// bold tag pair. Document references are discarded.
    pub async fn suggest(
        &self,
        term: &str,
        fuzzy: bool,
        highlights: bool,
    ) -> AppResult<Vec<String>> {
        let mut body = json!({
            "search": term,
            "suggesterName": self.suggester,
            "fuzzy": fuzzy,
            "top": SUGGEST_TOP,
        });

        if highlights {
            body["highlightPreTag"] = json!(HIGHLIGHT_PRE_TAG);
            body["highlightPostTag"] = json!(HIGHLIGHT_POST_TAG);
        }

        let response: SuggestResponse = self.post_docs("suggest", body).await?;
        Ok(response.value.into_iter().map(|hit| hit.text).collect())
    }

    /// Fetch up to five completions, one term with surrounding context,
    /// fuzzy matching disabled.
    pub async fn autocomplete(&self, term: &str) -> AppResult<Vec<String>> {
        let response: AutocompleteResponse = self
            .post_docs(
                "autocomplete",
                json!({
                    "search": term,
                    "suggesterName": self.suggester,
                    "autocompleteMode": "oneTermWithContext",
                    "fuzzy": false,
                    "top": AUTOCOMPLETE_TOP,
                }),
            )
            .await?;

        Ok(response.value.into_iter().map(|hit| hit.text).collect())
    }
}
