//! API route definitions
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub mod health;
pub mod reads;
pub mod session;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "session", description = "Session-forwarding proxy endpoints"),
        (name = "reads", description = "Enveloped read proxies"),
    ),
)]
struct ApiDoc;

/// Assemble every route exposed by the dashboard server
pub fn router() -> OpenApiRouter<crate::AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health_check))
        .merge(session::router())
        .merge(reads::router())
}
