use anyhow::Result;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use search_page::api::{AppState, create_router};
use search_page::data_models::{PageData, PageQuery};

mod test_helpers {
    use super::*;

    pub fn test_state() -> Result<Arc<AppState>> {
        Ok(Arc::new(AppState::new(
            "Harvest",
            PathBuf::from("tests/no-such-static-dir"),
        )?))
    }

    pub async fn get(uri: &str) -> Result<(StatusCode, Option<String>, String)> {
        get_with_state(test_state()?, uri).await
    }

    pub async fn get_with_state(
        state: Arc<AppState>,
        uri: &str,
    ) -> Result<(StatusCode, Option<String>, String)> {
        let router = create_router(state);
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty())?)
            .await?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, content_type, String::from_utf8(body.to_vec())?))
    }

    pub async fn get_data(uri: &str) -> Result<PageData> {
        let (status, _, body) = get(uri).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(serde_json::from_str(&body)?)
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_data_endpoint_returns_text() -> Result<()> {
    let (status, content_type, body) = get("/__data.json?text=rust").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let json: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(json, serde_json::json!({ "query": { "text": "rust" } }));
    Ok(())
}

#[tokio::test]
async fn test_data_endpoint_defaults_text() -> Result<()> {
    for uri in [
        "/__data.json",
        "/__data.json?text=",
        "/__data.json?page=2&sort=asc",
    ] {
        let data = get_data(uri).await?;
        assert_eq!(data.query, PageQuery::default(), "uri: {uri}");
    }
    Ok(())
}

#[tokio::test]
async fn test_data_endpoint_keeps_last_duplicate() -> Result<()> {
    let data = get_data("/__data.json?text=first&page=3&text=second").await?;
    assert_eq!(data.query.text, "second");
    Ok(())
}

#[tokio::test]
async fn test_data_endpoint_is_idempotent() -> Result<()> {
    let first = get_data("/__data.json?text=hello+world").await?;
    let second = get_data("/__data.json?text=hello+world").await?;
    assert_eq!(first, second);
    assert_eq!(first.query.text, "hello world");
    Ok(())
}

#[tokio::test]
async fn test_page_renders_prefilled_search_box() -> Result<()> {
    let (status, content_type, body) = get("/?text=rust%20%26%20axum").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(
        content_type
            .as_deref()
            .is_some_and(|v| v.starts_with("text/html"))
    );
    assert!(body.contains("<title>Harvest</title>"));
    assert!(body.contains(r#"value="rust &amp; axum""#));
    Ok(())
}

#[tokio::test]
async fn test_page_without_query_has_empty_search_box() -> Result<()> {
    let (status, _, body) = get("/").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="text" value="""#));
    Ok(())
}

#[tokio::test]
async fn test_page_escapes_markup_in_query() -> Result<()> {
    let (status, _, body) = get("/?text=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
    Ok(())
}

#[tokio::test]
async fn test_page_render_failure_is_internal_error() -> Result<()> {
    let state = AppState {
        page_title: "Harvest".to_string(),
        static_dir: PathBuf::from("tests/no-such-static-dir"),
        templates: minijinja::Environment::new(),
    };
    let (status, _, body) = get_with_state(Arc::new(state), "/?text=rust").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Render error"));

    // The data endpoint does not depend on templates.
    let (status, _, _) = get_with_state(
        Arc::new(AppState {
            page_title: "Harvest".to_string(),
            static_dir: PathBuf::from("tests/no-such-static-dir"),
            templates: minijinja::Environment::new(),
        }),
        "/__data.json?text=rust",
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_static_dir() -> Result<()> {
    let (status, _, _) = get("/app.css").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
