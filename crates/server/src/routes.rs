pub mod admin;
pub mod public;

use axum::middleware;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{gate, openapi, AppState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Build the full application router: public routes plus the gated admin area.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let admin_routes = Router::new()
        .route(
            "/events",
            get(admin::list_events)
                .post(admin::create_event)
                .put(admin::update_event)
                .delete(admin::delete_event),
        )
        .route(
            "/attendees",
            get(admin::list_attendees)
                .post(admin::create_attendee)
                .put(admin::update_attendee)
                .delete(admin::delete_attendee),
        )
        .route(
            "/accommodations",
            get(admin::list_accommodations)
                .post(admin::create_accommodation)
                .put(admin::update_accommodation)
                .delete(admin::delete_accommodation),
        )
        .route(
            "/event-attendance",
            get(admin::list_attendance)
                .post(admin::create_attendance)
                .put(admin::update_attendance)
                .delete(admin::delete_attendance),
        )
        .route("/stats", get(admin::stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), gate::require_admin));

    let public_routes = Router::new()
        .route("/events", get(public::list_events))
        .route("/events/upcoming", get(public::upcoming_events))
        .route("/events/:id", get(public::get_event))
        .route("/events/:id/attendees", get(public::event_attendees))
        .route("/accommodations", get(public::list_accommodations))
        .route("/accommodations/:id", get(public::get_accommodation))
        .route("/accommodations/:id/attendees", get(public::accommodation_attendees))
        .route("/attendees/names", get(public::attendee_names))
        .route("/attendees/search", get(public::search_attendees))
        .route("/event-attendance", post(public::rsvp))
        .route("/register", post(public::register));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(public_routes)
        .nest("/admin", admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
