pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;

use axum::{
    routing::{get, put},
    Router,
};
use startup::AppState;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::greeting,
        handlers::health::health_check,
        handlers::todos::list_tasks,
        handlers::todos::create_task,
        handlers::todos::update_task,
        handlers::todos::delete_task,
    ),
    components(
        schemas(
            models::Task,
            handlers::todos::CreateTaskRequest,
            handlers::todos::UpdateTaskRequest,
            handlers::todos::MessageResponse,
        )
    ),
    tags(
        (name = "Todos", description = "Task management"),
        (name = "Observability", description = "Service health and metadata"),
    )
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::greeting))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route(
            "/todos",
            get(handlers::todos::list_tasks).post(handlers::todos::create_task),
        )
        .route(
            "/todos/:id",
            put(handlers::todos::update_task).delete(handlers::todos::delete_task),
        )
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
