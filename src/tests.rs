#[cfg(test)]
mod integration_tests {
    use crate::schemas::{AssetStatus, HealthResponse};
    use crate::test_utils::{fixture_config, missing_config, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server() -> TestServer {
        TestServer::new(setup_test_app(fixture_config())).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_reports_assets() {
        let response = server().get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.assets, AssetStatus::Present);
    }

    #[tokio::test]
    async fn test_health_check_wire_format() {
        let response = server().get("/health").await;

        let raw: serde_json::Value = response.json();
        assert_eq!(raw["assets"], "present");
        assert_eq!(raw["status"], "healthy");
    }

    #[tokio::test]
    async fn test_health_check_without_bundle() {
        let server = TestServer::new(setup_test_app(missing_config())).unwrap();
        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.assets, AssetStatus::Missing);
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let response = server().get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("AI8 test bundle"));
    }

    #[tokio::test]
    async fn test_static_asset_is_served() {
        let response = server().get("/assets/app.css").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("margin: 0"));
    }

    #[tokio::test]
    async fn test_known_page_falls_back_to_index() {
        let server = server();
        for path in ["/dashboard", "/intelligence", "/sentiment", "/llm-traffic"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert!(response.text().contains("AI8 test bundle"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_unknown_page_gets_index_with_404() {
        let response = server().get("/not-a-page").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("AI8 test bundle"));
    }

    #[tokio::test]
    async fn test_missing_bundle_is_404() {
        let server = TestServer::new(setup_test_app(missing_config())).unwrap();
        let response = server.get("/dashboard").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "frontend bundle not found");
    }
}
