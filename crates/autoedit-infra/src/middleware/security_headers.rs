use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::{extract::Request, middleware::Next, response::Response};

/// Options for [`security_headers_middleware`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityHeadersConfig {
    /// Send `Strict-Transport-Security`. Only meaningful behind HTTPS.
    pub hsts: bool,
}

impl SecurityHeadersConfig {
    pub fn for_environment(is_production: bool) -> Self {
        Self { hsts: is_production }
    }
}

/// Security headers middleware
///
/// Use with `axum::middleware::from_fn_with_state`. The CSP admits the RapiDoc
/// bundle from unpkg for the `/docs` page.
pub async fn security_headers_middleware(
    State(config): State<SecurityHeadersConfig>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; script-src 'self' 'unsafe-inline' https://unpkg.com; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'",
        ),
    );

    if config.hsts {
        headers.insert(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn headers_for(config: SecurityHeadersConfig) -> axum::http::HeaderMap {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                config,
                security_headers_middleware,
            ));

        app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap()
            .headers()
            .clone()
    }

    #[tokio::test]
    async fn test_sets_baseline_headers() {
        let headers = headers_for(SecurityHeadersConfig::default()).await;
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert!(headers.get("content-security-policy").is_some());
        assert!(headers.get("strict-transport-security").is_none());
    }

    #[tokio::test]
    async fn test_hsts_only_when_enabled() {
        let headers = headers_for(SecurityHeadersConfig::for_environment(true)).await;
        assert!(headers.get("strict-transport-security").is_some());
    }
}
