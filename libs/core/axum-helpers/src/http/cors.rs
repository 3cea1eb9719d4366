use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Creates a development CORS layer that accepts any origin, method and
/// header while still allowing credentials.
///
/// Browsers refuse `Access-Control-Allow-Origin: *` together with
/// credentials, so the request's own origin, method and headers are mirrored
/// back instead of using wildcards.
///
/// **DO NOT USE IN PRODUCTION.**
pub fn create_dev_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::post};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_preflight_mirrors_origin_and_allows_credentials() {
        let app = Router::new()
            .route("/search", post(|| async { "ok" }))
            .layer(create_dev_cors_layer());

        let request = Request::builder()
            .method("OPTIONS")
            .uri("/search")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let headers = response.headers();

        assert_eq!(
            headers["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(headers["access-control-allow-credentials"], "true");
        assert_eq!(headers["access-control-allow-methods"], "POST");
    }
}
