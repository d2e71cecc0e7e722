//! App Router

use salvo::{
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    size_limiter::max_size,
    trailing_slash::remove_slash,
};

use crate::{
    config::ServerConfig, cors, fallback, healthcheck, observability::request_logging,
    routes::RouteGroups,
};

/// Root router with every group mounted under its prefix.
pub(crate) fn app_router(groups: RouteGroups, config: &ServerConfig) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(max_size(config.server.body_limit_bytes))
        .push(Router::with_path("healthcheck").get(healthcheck::handler));

    let router = groups.into_routers().fold(router, Router::push);

    let doc = OpenApi::new("Comercio API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

/// Socket-less service: served by `main`, driven directly by tests.
///
/// Logging and CORS sit on the service so unmatched requests pass through them.
pub(crate) fn build_service(groups: RouteGroups, config: &ServerConfig) -> Service {
    Service::new(app_router(groups, config))
        .catcher(fallback::catcher())
        .hoop(request_logging)
        .hoop(cors::handler(&config.cors))
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::{fallback::ErrorResponse, healthcheck::HealthResponse, routes::Mount};

    use super::*;

    fn config(args: &[&str]) -> Result<ServerConfig, clap::Error> {
        ServerConfig::parse_without_env(std::iter::once("comercio-json").chain(args.iter().copied()))
    }

    fn unpopulated() -> Result<Service, clap::Error> {
        Ok(build_service(RouteGroups::unpopulated(), &config(&[])?))
    }

    #[handler]
    async fn show_product(req: &mut Request) -> String {
        format!("product {}", req.param::<String>("id").unwrap_or_default())
    }

    #[handler]
    async fn broken() -> Result<&'static str, StatusError> {
        Err(StatusError::internal_server_error().brief("connection pool exhausted"))
    }

    #[handler]
    async fn explode() -> &'static str {
        std::panic::panic_any("handler blew up")
    }

    #[handler]
    async fn accept_body(req: &mut Request) -> Result<String, StatusError> {
        let body = req
            .payload()
            .await
            .map_err(|_parse_error| StatusError::bad_request())?;

        Ok(format!("{} bytes", body.len()))
    }

    #[tokio::test]
    async fn unmatched_path_renders_not_found_json() -> TestResult {
        let mut res = TestClient::get("http://example.com/nowhere/at/all")
            .send(&unpopulated()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "route not found: GET /nowhere/at/all");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_inside_a_group_is_not_found() -> TestResult {
        let mut res = TestClient::get("http://example.com/catalog/does-not-exist-xyz")
            .send(&unpopulated()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "not_found");

        Ok(())
    }

    #[tokio::test]
    async fn bare_prefix_of_an_empty_group_is_not_found() -> TestResult {
        let res = TestClient::post("http://example.com/orders")
            .send(&unpopulated()?)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn injected_group_is_reached_under_its_prefix() -> TestResult {
        let groups = RouteGroups::unpopulated().with(
            Mount::Catalog,
            Router::with_path("{id}").get(show_product),
        );
        let service = build_service(groups, &config(&[])?);

        let body = TestClient::get("http://example.com/catalog/p1")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert_eq!(body, "product p1");

        let res = TestClient::get("http://example.com/cart/p1")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn unmatched_method_in_a_populated_group_is_not_found() -> TestResult {
        let groups = RouteGroups::unpopulated().with(
            Mount::Catalog,
            Router::with_path("{id}").get(show_product),
        );
        let service = build_service(groups, &config(&[])?);

        let mut bare = TestClient::get("http://example.com/catalog")
            .send(&service)
            .await;

        assert_eq!(bare.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = bare.take_json().await?;

        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "route not found: GET /catalog");

        let mut wrong_method = TestClient::post("http://example.com/catalog/p1")
            .send(&service)
            .await;

        assert_eq!(wrong_method.status_code, Some(StatusCode::NOT_FOUND));

        let body: ErrorResponse = wrong_method.take_json().await?;

        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "route not found: POST /catalog/p1");

        Ok(())
    }

    #[tokio::test]
    async fn handler_error_renders_generic_internal_error() -> TestResult {
        let groups = RouteGroups::unpopulated()
            .with(Mount::Payments, Router::with_path("fail").get(broken));
        let service = build_service(groups, &config(&[])?);

        let mut res = TestClient::get("http://example.com/payments/fail")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "internal_error");
        assert_eq!(body.message, "internal server error");

        Ok(())
    }

    #[tokio::test]
    async fn panicking_handler_does_not_stop_the_service() -> TestResult {
        let groups = RouteGroups::unpopulated()
            .with(Mount::Reports, Router::with_path("crash").get(explode));
        let service = build_service(groups, &config(&[])?);

        let res = TestClient::get("http://example.com/reports/crash")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        let health: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(health.status, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() -> TestResult {
        let groups = RouteGroups::unpopulated()
            .with(Mount::Cart, Router::with_path("items").post(accept_body));
        let service = build_service(groups, &config(&["--body-limit-bytes", "16"])?);

        let small = TestClient::post("http://example.com/cart/items")
            .json(&serde_json::json!({ "p": 1 }))
            .send(&service)
            .await
            .take_string()
            .await?;

        assert_eq!(small, "7 bytes");

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&serde_json::json!({ "productoId": "p1", "cantidad": 2 }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::PAYLOAD_TOO_LARGE));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "request_error");

        Ok(())
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() -> TestResult {
        let service = unpopulated()?;

        let res = TestClient::get("http://example.com/healthcheck")
            .add_header(ORIGIN, "https://shop.example.org", true)
            .send(&service)
            .await;

        assert_eq!(
            res.headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );

        let res = TestClient::get("http://example.com/missing")
            .add_header(ORIGIN, "https://shop.example.org", true)
            .send(&service)
            .await;

        assert!(
            res.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN),
            "not-found responses carry CORS headers too"
        );

        Ok(())
    }

    #[tokio::test]
    async fn cors_honours_a_configured_origin_list() -> TestResult {
        let service = build_service(
            RouteGroups::unpopulated(),
            &config(&["--cors-allowed-origins", "https://admin.example.org"])?,
        );

        let res = TestClient::get("http://example.com/healthcheck")
            .add_header(ORIGIN, "https://admin.example.org", true)
            .send(&service)
            .await;

        assert_eq!(
            res.headers()
                .get(ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("https://admin.example.org")
        );

        let res = TestClient::get("http://example.com/healthcheck")
            .add_header(ORIGIN, "https://elsewhere.example.org", true)
            .send(&service)
            .await;

        assert!(
            !res.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN),
            "unlisted origins are not allowed"
        );

        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_is_served() -> TestResult {
        let doc: serde_json::Value = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&unpopulated()?)
            .await
            .take_json()
            .await?;

        assert_eq!(doc["info"]["title"], "Comercio API");
        assert!(
            doc["paths"].get("/healthcheck").is_some(),
            "healthcheck is documented"
        );

        Ok(())
    }
}
