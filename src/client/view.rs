use crate::client::api::{ApiClient, DictionaryEntry};
use crate::client::error::ClientError;

pub type SearchOutcome = Result<Vec<DictionaryEntry>, ClientError>;

/// View-model behind the dictionary search form.
///
/// Submitting clears the previous error and replaces the result list on
/// success; on failure the stale results stay visible under the error
/// banner. Each dispatch gets a monotonic sequence number and responses
/// older than the latest dispatch are discarded, so overlapping searches
/// cannot clobber a newer result with an older one.
#[derive(Debug, Default)]
pub struct SearchView {
    pub query: String,
    results: Vec<DictionaryEntry>,
    error: Option<String>,
    latest_seq: u64,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[DictionaryEntry] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a new search: clear the previous error and hand out the
    /// sequence number for the outgoing request.
    pub fn begin_search(&mut self) -> u64 {
        self.error = None;
        self.latest_seq += 1;
        self.latest_seq
    }

    /// Apply a settled search. Returns false when the response belongs to a
    /// superseded dispatch and was dropped.
    pub fn apply(&mut self, seq: u64, outcome: SearchOutcome) -> bool {
        if seq != self.latest_seq {
            log::debug!("dropping stale search response #{}", seq);
            return false;
        }

        match outcome {
            Ok(entries) => self.results = entries,
            // Keep the previous results visible under the error banner.
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }

    /// Dispatch a search for the current query and apply its outcome.
    pub async fn submit(&mut self, client: &ApiClient) {
        let seq = self.begin_search();
        let outcome = client.search_dictionary(&self.query).await;
        self.apply(seq, outcome);
    }

    /// One line per entry: `headword — english`, with the Urdu gloss in
    /// parentheses only when present and non-empty.
    pub fn render_entry(entry: &DictionaryEntry) -> String {
        match entry.urdu.as_deref().filter(|urdu| !urdu.is_empty()) {
            Some(urdu) => format!("{} — {} ({})", entry.burushaski, entry.english, urdu),
            None => format!("{} — {}", entry.burushaski, entry.english),
        }
    }

    pub fn render(&self) -> Vec<String> {
        self.results.iter().map(Self::render_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn entry(id: i64, burushaski: &str, english: &str, urdu: Option<&str>) -> DictionaryEntry {
        DictionaryEntry {
            id,
            burushaski: burushaski.to_string(),
            english: english.to_string(),
            urdu: urdu.map(str::to_string),
        }
    }

    #[test]
    fn renders_without_urdu() {
        let line = SearchView::render_entry(&entry(1, "a", "b", None));
        assert_eq!(line, "a — b");
    }

    #[test]
    fn renders_with_urdu() {
        let line = SearchView::render_entry(&entry(2, "x", "y", Some("z")));
        assert_eq!(line, "x — y (z)");
    }

    #[test]
    fn empty_urdu_is_treated_as_absent() {
        let line = SearchView::render_entry(&entry(3, "x", "y", Some("")));
        assert_eq!(line, "x — y");
    }

    #[test]
    fn success_replaces_results_and_failure_keeps_them() {
        let mut view = SearchView::new();

        let seq = view.begin_search();
        view.apply(seq, Ok(vec![entry(1, "ćo", "water", None)]));
        assert_eq!(view.results().len(), 1);
        assert!(view.error().is_none());

        let seq = view.begin_search();
        view.apply(
            seq,
            Err(ClientError::Status {
                status: 500,
                body: "backend down".to_string(),
            }),
        );

        // Stale results survive a failed re-search; the error shows above.
        assert_eq!(view.results().len(), 1);
        assert_eq!(view.results()[0].burushaski, "ćo");
        let error = view.error().unwrap();
        assert!(error.contains("500"));
        assert!(error.contains("backend down"));
    }

    #[test]
    fn begin_search_clears_previous_error() {
        let mut view = SearchView::new();

        let seq = view.begin_search();
        view.apply(
            seq,
            Err(ClientError::Status {
                status: 404,
                body: "nope".to_string(),
            }),
        );
        assert!(view.error().is_some());

        view.begin_search();
        assert!(view.error().is_none());
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut view = SearchView::new();

        let first = view.begin_search();
        let second = view.begin_search();

        // The older dispatch settles last; it must not win.
        assert!(view.apply(second, Ok(vec![entry(2, "áa", "yes", None)])));
        assert!(!view.apply(first, Ok(vec![entry(1, "béé", "no", None)])));

        assert_eq!(view.results().len(), 1);
        assert_eq!(view.results()[0].burushaski, "áa");
    }

    #[tokio::test]
    async fn failed_resubmit_keeps_previous_results_visible() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let router = Router::new().route(
            "/api/dictionary/search",
            get(move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Json(json!([{"id": 1, "burushaski": "harís", "english": "bread"}]))
                            .into_response()
                    } else {
                        (StatusCode::INTERNAL_SERVER_ERROR, "index rebuild in progress")
                            .into_response()
                    }
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = ApiClient::new(format!("http://{}", addr));
        let mut view = SearchView::new();

        view.query = "bread".to_string();
        view.submit(&client).await;
        assert_eq!(view.render(), vec!["harís — bread"]);
        assert!(view.error().is_none());

        view.submit(&client).await;
        assert_eq!(view.render(), vec!["harís — bread"]);
        let error = view.error().unwrap();
        assert!(error.contains("500"));
        assert!(error.contains("index rebuild in progress"));
    }
}
