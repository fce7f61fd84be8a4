//! Path completion endpoints.
//!
//! Two response shapes are served from the same ranking core:
//!
//! - the legacy autocomplete format on `/` and `/complete`, which browser
//!   widgets consume directly:
//!   `[["filenames", {"path": "...", "path_highlight_ranges": [[s, e], ...]}, ...]]`
//! - a structured JSON API on `/api/v1/search`.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use matcher::{HighlightRange, PathMatch, RankConfig};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Result-set label used by the legacy wire format.
pub const LEGACY_RESULT_SET: &str = "filenames";

/// Query parameters for the structured search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Text typed by the user
    #[serde(default)]
    pub token: Option<String>,

    /// Number of results to return (capped by `max_results`)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Search response
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_matches: usize,
    pub matches: Vec<SearchHit>,
}

/// Single ranked path
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based position in the result list
    pub rank: usize,
    pub path: String,
    pub score: f64,
    pub path_highlight_ranges: Vec<HighlightRange>,
}

/// Response from a snapshot reload
#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub status: String,
    pub source: String,
    pub candidates: usize,
}

/// First non-empty `token` value, in query-string order.
///
/// Empty values are dropped the way classic query-string parsers drop them,
/// so `?token=&token=ab` yields `ab`.
pub fn first_token(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, value)| key == "token" && !value.is_empty())
        .map(|(_, value)| value.as_str())
}

/// Reject tokens longer than `max_len` characters.
pub fn check_token_len(token: &str, max_len: usize) -> ServerResult<()> {
    let len = token.chars().count();
    if len > max_len {
        return Err(ServerError::BadRequest(format!(
            "'token' is {len} characters long, at most {max_len} allowed"
        )));
    }
    Ok(())
}

/// Rank `query` against the current snapshot on the blocking pool.
async fn rank_snapshot(
    state: &ServerState,
    query: String,
    cfg: RankConfig,
) -> ServerResult<Vec<PathMatch>> {
    check_token_len(&query, state.config.max_query_len)?;
    let snapshot = state.store.snapshot()?;
    let hits =
        tokio::task::spawn_blocking(move || matcher::rank(&snapshot[..], &query, &cfg)).await??;
    Ok(hits)
}

/// Encode hits in the legacy autocomplete format.
pub fn legacy_body(hits: &[PathMatch]) -> Value {
    let mut rows = Vec::with_capacity(hits.len() + 1);
    rows.push(json!(LEGACY_RESULT_SET));
    rows.extend(hits.iter().map(|hit| {
        json!({
            "path": hit.path,
            "path_highlight_ranges": hit.ranges,
        })
    }));
    json!([rows])
}

/// Legacy autocomplete endpoint (`GET /?token=...`, `GET /complete?token=...`)
///
/// Without a token the ranking core is not consulted and the empty result set
/// `[["filenames"]]` is returned.
pub async fn legacy_complete(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ServerResult<Response> {
    let hits = match first_token(&params) {
        Some(token) => rank_snapshot(&state, token.to_string(), state.rank_config.clone()).await?,
        None => Vec::new(),
    };

    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(legacy_body(&hits)),
    )
        .into_response())
}

/// Structured search (`GET /api/v1/search?token=...&limit=...`)
pub async fn search(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchQuery>,
) -> ServerResult<Json<SearchResponse>> {
    let token = params
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing 'token' query parameter".into()))?;

    let mut cfg = state.rank_config.clone();
    if let Some(limit) = params.limit {
        if limit == 0 {
            return Err(ServerError::BadRequest("'limit' must be at least 1".into()));
        }
        cfg.max_results = limit.min(cfg.max_results);
    }

    let hits = rank_snapshot(&state, token.clone(), cfg).await?;
    let matches: Vec<SearchHit> = hits
        .into_iter()
        .enumerate()
        .map(|(i, hit)| SearchHit {
            rank: i + 1,
            path: hit.path,
            score: hit.score,
            path_highlight_ranges: hit.ranges,
        })
        .collect();

    Ok(Json(SearchResponse {
        query: token,
        total_matches: matches.len(),
        matches,
    }))
}

/// Reload the candidate snapshot (`POST /api/v1/reload`)
pub async fn reload(State(state): State<Arc<ServerState>>) -> ServerResult<Json<ReloadResponse>> {
    let store = Arc::clone(&state.store);
    let candidates = tokio::task::spawn_blocking(move || store.reload()).await??;

    Ok(Json(ReloadResponse {
        status: "reloaded".to_string(),
        source: state.store.source_name(),
        candidates,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_token_skips_empty_values() {
        let p = params(&[("token", ""), ("other", "x"), ("token", "ab"), ("token", "cd")]);
        assert_eq!(first_token(&p), Some("ab"));
    }

    #[test]
    fn first_token_absent() {
        assert_eq!(first_token(&params(&[("q", "ab")])), None);
        assert_eq!(first_token(&params(&[("token", "")])), None);
    }

    #[test]
    fn token_len_counts_characters() {
        assert!(check_token_len("ééé", 3).is_ok());
        match check_token_len("abcd", 3) {
            Err(ServerError::BadRequest(msg)) => assert!(msg.contains("at most 3")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn legacy_body_without_hits() {
        assert_eq!(legacy_body(&[]), json!([["filenames"]]));
    }

    #[test]
    fn legacy_body_lists_paths_and_ranges() {
        let hits = vec![PathMatch {
            path: "base/scoped_ptr.h".into(),
            score: 16.0,
            ranges: vec![HighlightRange::new(5, 5), HighlightRange::new(13, 14)],
        }];
        assert_eq!(
            legacy_body(&hits),
            json!([[
                "filenames",
                {"path": "base/scoped_ptr.h", "path_highlight_ranges": [[5, 5], [13, 14]]}
            ]])
        );
    }
}
