pub mod config;
pub mod dto;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::services::{
    auth_service::AuthService, candidate_service::CandidateService, stats_service::StatsService,
    supplier_service::SupplierService,
};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<EntityStore>,
    pub auth_service: AuthService,
    pub candidate_service: CandidateService,
    pub supplier_service: SupplierService,
    pub stats_service: StatsService,
}

impl AppState {
    pub fn new(store: Arc<EntityStore>) -> Self {
        let auth_service = AuthService::new(store.clone());
        let candidate_service = CandidateService::new(store.clone());
        let supplier_service = SupplierService::new(store.clone());
        let stats_service = StatsService::new(store.clone());

        Self {
            store,
            auth_service,
            candidate_service,
            supplier_service,
            stats_service,
        }
    }
}

/// Full application router. Everything except the health check and the login
/// and register endpoints sits behind bearer authentication.
pub fn router(state: AppState) -> Router {
    let base = Router::new().route("/health", get(routes::health::health));

    let auth_api = Router::new()
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/register", post(routes::auth::register));

    let protected_api = Router::new()
        .route("/api/auth/logout", post(routes::auth::logout))
        .route("/api/auth/me", get(routes::auth::me))
        .route("/api/candidates", get(routes::candidates::list_candidates))
        .route(
            "/api/candidates/search",
            post(routes::candidates::search_candidates),
        )
        .route("/api/candidates/:id", get(routes::candidates::get_candidate))
        .route(
            "/api/candidates/:id/notes",
            get(routes::candidates::list_notes).post(routes::candidates::create_note),
        )
        .route(
            "/api/candidates/:id/notes/:note_id",
            put(routes::candidates::update_note).delete(routes::candidates::delete_note),
        )
        .route(
            "/api/candidates/:id/communications",
            get(routes::candidates::list_communications)
                .post(routes::candidates::create_communication),
        )
        .route(
            "/api/candidates/:id/documents",
            get(routes::candidates::list_documents),
        )
        .route("/api/suppliers", get(routes::suppliers::list_suppliers))
        .route(
            "/api/suppliers/search",
            post(routes::suppliers::search_suppliers),
        )
        .route("/api/suppliers/:id", get(routes::suppliers::get_supplier))
        .route("/api/dashboard/stats", get(routes::dashboard::get_stats))
        .route(
            "/api/dashboard/timeline",
            get(routes::dashboard::get_timeline),
        )
        .route("/api/dashboard/funnel", get(routes::dashboard::get_funnel))
        .route(
            "/api/dashboard/activities",
            get(routes::dashboard::get_activities),
        )
        .route(
            "/api/dashboard/departments",
            get(routes::dashboard::get_department_metrics),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ));

    base.merge(auth_api)
        .merge(protected_api)
        .fallback(routes::not_found)
        .with_state(state)
}
