use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/:user/entries",
            get(handlers::list_entries).post(handlers::add_entry),
        )
        .route("/api/:user/entries/bulk", post(handlers::bulk_add))
        .route("/api/:user/entries/:id", axum::routing::delete(handlers::delete_entry))
        .route("/api/:user/entries/:id/increment", post(handlers::increment_entry))
        .route("/api/:user/entries/:id/decrement", post(handlers::decrement_entry))
        .route(
            "/api/:user/templates",
            get(handlers::list_templates).post(handlers::save_template),
        )
        .route("/api/:user/template-options", get(handlers::list_template_options))
        .route("/api/:user/history", get(handlers::history))
        .route("/api/:user/trend", get(handlers::trend))
        .route("/api/:user/calendar", get(handlers::calendar))
        .route("/api/:user/analytics/categories", get(handlers::category_chart))
        .route("/api/:user/analytics/dispatch", post(handlers::dispatch))
        .route("/api/:user/analytics/phrases", get(handlers::phrase_chart))
        .with_state(state)
}
