//! Capture page route handler.
//!
//! Serves the embedded receipt capture client HTML.

use axum::response::{Html, IntoResponse};

const CLIENT_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the receipt capture page.
pub async fn index() -> impl IntoResponse {
    Html(CLIENT_HTML)
}

#[cfg(test)]
mod tests {
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use spendlens_core::analysis::mock::MockAnalyzer;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_serves_capture_page() {
        let analyzer = Arc::new(MockAnalyzer::with_delay(Duration::ZERO));
        let app = crate::create_router(AppState::new(analyzer));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<html"));
        assert!(page.contains("capture=\"environment\""));
    }
}
