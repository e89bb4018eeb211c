use crate::error::ApiResult;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use techdocs_rag_common::TechDocsError;
use techdocs_rag_knowledge::DocsMatcher;
use tracing::{debug, info};

/// Accepted spellings of the search parameter. `q` wins over `query`,
/// which wins over `question`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub query: Option<String>,
    pub question: Option<String>,
}

impl SearchParams {
    fn text(&self) -> &str {
        self.q
            .as_deref()
            .or(self.query.as_deref())
            .or(self.question.as_deref())
            .unwrap_or_default()
    }
}

/// Wire format of a search response. The field name is plural even
/// though it holds a single citation string.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub answer: String,
    pub sources: String,
}

pub fn routes(matcher: Arc<DocsMatcher>) -> Router {
    Router::new()
        .route("/search", get(search_docs).post(search_docs_post))
        .with_state(matcher)
}

async fn search_docs(
    State(matcher): State<Arc<DocsMatcher>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    run_search(&matcher, &params)
}

async fn search_docs_post(
    State(matcher): State<Arc<DocsMatcher>>,
    Json(params): Json<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    run_search(&matcher, &params)
}

fn run_search(matcher: &DocsMatcher, params: &SearchParams) -> ApiResult<Json<SearchResponse>> {
    let query = params.text();
    debug!("Search request: '{}'", query);

    if query.trim().is_empty() {
        return Err(TechDocsError::EmptyQuery.into());
    }

    let result = matcher.answer(query);
    info!(
        "Search '{}' matched '{}' with score {}",
        query,
        result.entry_id.as_deref().unwrap_or("fallback"),
        result.score
    );

    Ok(Json(SearchResponse {
        answer: result.answer,
        sources: result.source,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use techdocs_rag_knowledge::{FALLBACK_ANSWER, FALLBACK_SOURCE};
    use tower::ServiceExt;

    fn test_app() -> Router {
        routes(Arc::new(DocsMatcher::new()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_search_fat_arrow_question() {
        let uri =
            "/search?q=What%20does%20the%20author%20affectionately%20call%20the%20%3D%3E%20syntax%3F";
        let (status, body) = get_json(test_app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["answer"],
            "The author affectionately calls the => syntax 'fat arrow'"
        );
        assert_eq!(
            body["sources"],
            "TypeScript Book - https://github.com/basarat/typescript-book"
        );
    }

    #[tokio::test]
    async fn test_search_walk_child_nodes_question() {
        let uri = "/search?q=How%20do%20you%20walk%20every%20child%20node%3F";
        let (status, body) = get_json(test_app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["answer"],
            "node.getChildren() lets you walk every child node of a ts.Node"
        );
        assert_eq!(body["sources"], "TypeScript Book - Compiler API");
    }

    #[tokio::test]
    async fn test_search_unknown_topic_falls_back() {
        let uri = "/search?q=What%20is%20quantum%20computing%3F";
        let (status, body) = get_json(test_app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], FALLBACK_ANSWER);
        assert_eq!(body["sources"], FALLBACK_SOURCE);
    }

    #[tokio::test]
    async fn test_search_response_has_exactly_two_fields() {
        let uri = "/search?q=lambda%20function";
        let (status, body) = get_json(test_app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        let fields = body.as_object().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key("answer"));
        assert!(fields.contains_key("sources"));
    }

    #[tokio::test]
    async fn test_search_empty_query_rejected() {
        let (status, body) = get_json(test_app(), "/search?q=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error_code"], "EMPTY_QUERY");

        let (status, _) = get_json(test_app(), "/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_json(test_app(), "/search?q=%20%20").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_accepts_alternate_param_names() {
        let (status, body) = get_json(test_app(), "/search?query=lambda%20function").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"]
            .as_str()
            .unwrap()
            .starts_with("For defining function expressions"));

        let (status, body) =
            get_json(test_app(), "/search?question=walk%20every%20child%20node").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sources"], "TypeScript Book - Compiler API");
    }

    #[tokio::test]
    async fn test_search_param_precedence() {
        // q shadows question when both are supplied
        let uri = "/search?question=walk%20every%20child%20node&q=lambda%20function";
        let (status, body) = get_json(test_app(), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["answer"]
            .as_str()
            .unwrap()
            .starts_with("For defining function expressions"));
    }

    #[tokio::test]
    async fn test_search_post_body() {
        let response = test_app()
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/search")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"question": "How do you walk every child node?"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["answer"],
            "node.getChildren() lets you walk every child node of a ts.Node"
        );
    }
}
