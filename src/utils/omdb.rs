//! Client and record types for the OMDb movie database API.
//!
//! OMDb wraps every reply in the same envelope: a `Response` flag of `"True"` or
//! `"False"`, followed either by the business fields or by an `Error` message.
//! Records are decoded leniently: a field that is missing or `null` becomes `None`,
//! and a field holding a number or boolean keeps its JSON text.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

use crate::config::Config;

/// Custom error type for OMDb API interactions.
#[derive(Error, Debug)]
pub enum OmdbError {
    /// Error during HTTP request communication.
    #[error("API communication failure: {0}")]
    Api(#[from] reqwest::Error),

    /// Error during JSON parsing.
    #[error("Unable to parse text from JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// OMDb answered with an empty document.
    #[error("Empty response received from OMDb")]
    Empty,
}

/// Outcome of a request that OMDb understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// `Response` was `"True"`; the decoded record.
    Found(T),
    /// `Response` was `"False"`; the error message OMDb gave.
    Failed(String),
}

/// How a single title is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieQuery {
    Title(String),
    ImdbId(String),
}

impl MovieQuery {
    fn param(&self) -> (&'static str, &str) {
        match self {
            MovieQuery::Title(title) => ("t", title),
            MovieQuery::ImdbId(id) => ("i", id),
        }
    }
}

/// Trait providing helper methods for reading loosely typed `serde_json::Value`s.
trait JsonParse {
    /// The value as display text, or `None` if it is null.
    fn string(&self) -> Option<String>;
}

impl JsonParse for Value {
    fn string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(x) => Some(x.to_owned()),
            _ => Some(self.to_string()),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.string()))
}

/// Decodes a list field, treating anything that isn't an array as absent.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items,
        _ => return Ok(None),
    };

    // Entries that aren't objects carry nothing we can show.
    Ok(Some(
        items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
    ))
}

/// One third-party rating attached to a movie, e.g. Rotten Tomatoes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatingEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

/// Full details of a single movie or series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating", default, deserialize_with = "lenient_string")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes", default, deserialize_with = "lenient_string")]
    pub imdb_votes: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub metascore: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub ratings: Option<Vec<RatingEntry>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub writer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub actors: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub production: Option<String>,
    #[serde(rename = "imdbID", default, deserialize_with = "lenient_string")]
    pub imdb_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub box_office: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rated: Option<String>,
}

/// A single entry of a search result page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchHit {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(rename = "imdbID", default, deserialize_with = "lenient_string")]
    pub imdb_id: Option<String>,
}

/// The first page of a title search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "Search", default, deserialize_with = "lenient_list")]
    hits: Option<Vec<SearchHit>>,
}

impl SearchResults {
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits: Some(hits) }
    }

    /// Hits in the order OMDb returned them.
    pub fn hits(&self) -> &[SearchHit] {
        self.hits.as_deref().unwrap_or_default()
    }
}

/// Splits an OMDb envelope into a record or the error it reports.
///
/// An empty object or `null` body counts as no response at all.
pub fn decode_envelope<T: DeserializeOwned>(value: Value) -> Result<ApiResponse<T>, OmdbError> {
    match &value {
        Value::Null => return Err(OmdbError::Empty),
        Value::Object(map) if map.is_empty() => return Err(OmdbError::Empty),
        _ => {}
    }

    // OMDb sends "False"; other spellings of the flag are accepted too.
    let failed = value["Response"]
        .string()
        .is_some_and(|flag| flag.eq_ignore_ascii_case("false"));

    if failed {
        let message = value["Error"]
            .string()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());
        return Ok(ApiResponse::Failed(message));
    }

    Ok(ApiResponse::Found(serde_json::from_value(value)?))
}

/// Source of movie records. Implemented over HTTP by [`OmdbClient`] and mocked in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Looks up the full details of one title.
    async fn movie_details(&self, query: MovieQuery) -> Result<ApiResponse<MovieDetails>, OmdbError>;

    /// Searches titles by name. Only the first page is returned.
    async fn search(&self, term: String) -> Result<ApiResponse<SearchResults>, OmdbError>;
}

/// HTTP client for the OMDb API.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &Config) -> Result<Self, OmdbError> {
        let client = Client::builder().timeout(config.omdb_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.omdb_base_url.clone(),
            api_key: config.omdb_api_key.clone(),
        })
    }

    /// Sends a GET request with the API key and the given query parameters.
    ///
    /// The body is decoded whatever the HTTP status, because OMDb reports
    /// failures such as an invalid key inside the JSON envelope.
    async fn send_request<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse<T>, OmdbError> {
        debug!("Querying OMDb with {:?}", query);

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("OMDb request failed: {}", e);
                OmdbError::Api(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        debug!("OMDb answered with status {}", status);

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            error!("OMDb sent a body that isn't JSON (status {}): {}", status, e);
            OmdbError::Json(e)
        })?;

        decode_envelope(value)
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn movie_details(&self, query: MovieQuery) -> Result<ApiResponse<MovieDetails>, OmdbError> {
        let (key, value) = query.param();
        self.send_request(&[(key, value), ("plot", "full")]).await
    }

    async fn search(&self, term: String) -> Result<ApiResponse<SearchResults>, OmdbError> {
        self.send_request(&[("s", term.as_str())]).await
    }
}
