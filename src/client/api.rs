use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::error::ClientError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// A dictionary entry as consumed by the view. Extra backend fields are
/// ignored; `urdu` may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryEntry {
    pub id: i64,
    pub burushaski: String,
    pub english: String,
    #[serde(default)]
    pub urdu: Option<String>,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    source: &'a str,
    target: &'a str,
}

/// Typed wrapper over the dictionary/translation REST API.
///
/// The base URL is injected at construction so tests can point the client at
/// a throwaway endpoint. The client is stateless: no retries, no caching,
/// no request timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from `BURUSHASKI_API_URL`, falling back to local loopback.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("BURUSHASKI_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Keyword search with the default limit of 20.
    pub async fn search_dictionary(
        &self,
        query: &str,
    ) -> Result<Vec<DictionaryEntry>, ClientError> {
        self.search_dictionary_with_limit(query, DEFAULT_SEARCH_LIMIT)
            .await
    }

    /// Keyword search. `query` is percent-encoded; `limit` is forwarded
    /// verbatim with no client-side bounds check.
    pub async fn search_dictionary_with_limit(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<DictionaryEntry>, ClientError> {
        let url = format!(
            "{}/api/dictionary/search?q={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Fetch by identifier. The id is interpolated as-is; encoding is the
    /// caller's responsibility if it contains reserved URL characters.
    pub async fn word_by_id(
        &self,
        id: impl std::fmt::Display,
    ) -> Result<DictionaryEntry, ClientError> {
        let url = format!("{}/api/dictionary/item/{}", self.base_url, id);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Fetch by exact headword.
    pub async fn by_burushaski(&self, text: &str) -> Result<DictionaryEntry, ClientError> {
        let url = format!(
            "{}/api/dictionary/by-burushaski?text={}",
            self.base_url,
            urlencoding::encode(text)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Translate from Burushaski to English.
    pub async fn translate(&self, text: &str) -> Result<Value, ClientError> {
        self.translate_between(text, "burushaski", "english").await
    }

    /// Translate between explicit languages. The response shape is left to
    /// the backend and returned as opaque JSON.
    pub async fn translate_between(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Value, ClientError> {
        let url = format!("{}/api/translate", self.base_url);
        let request = TranslateRequest {
            text,
            source,
            target,
        };
        let resp = check_response(self.http.post(&url).json(&request).send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Shared request primitive: non-success responses become
/// [`ClientError::Status`] carrying the status code and full body text.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
