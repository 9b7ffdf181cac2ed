//! Router assembly
//!
//! Mounts the feature routers and wraps them in tracing and CORS layers.

use crate::config::ServerConfig;
use axum::Router;
use axum::http::{Method, header};
use kernel::error::app_error::AppError;
use nearby::{InMemoryStudentRepository, nearby_router};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_app(config: &ServerConfig, repo: InMemoryStudentRepository) -> Router {
    Router::new()
        .merge(nearby_router(repo))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)),
        )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}

async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(config: ServerConfig) -> Router {
        build_app(&config, InMemoryStudentRepository::seeded())
    }

    #[tokio::test]
    async fn test_cors_any_origin_by_default() {
        let response = app(ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/nearby?location=new%20york")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let response = app(ServerConfig::default())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/nearby?location=chicago")
                    .header(header::ORIGIN, "https://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("GET"));
    }

    #[tokio::test]
    async fn test_cors_allow_list() {
        let config = ServerConfig {
            allowed_origins: vec![HeaderValue::from_static("https://example.com")],
            ..ServerConfig::default()
        };

        let allowed = app(config.clone())
            .oneshot(
                Request::builder()
                    .uri("/nearby?location=chicago")
                    .header(header::ORIGIN, "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://example.com"
        );

        let denied = app(config)
            .oneshot(
                Request::builder()
                    .uri("/nearby?location=chicago")
                    .header(header::ORIGIN, "https://evil.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(
            denied
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_problem_404() {
        let response = app(ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/students")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 404);
        assert_eq!(body["title"], "Not Found");
    }
}
