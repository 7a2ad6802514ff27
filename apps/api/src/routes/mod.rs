pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::admin::handlers as admin;
use crate::assessments::handlers as assessments;
use crate::profile::handlers as profile;
use crate::results::handlers as results;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessments
        .route(
            "/api/v1/assessments",
            get(assessments::handle_list_assessments),
        )
        .route(
            "/api/v1/assessments/:id",
            get(assessments::handle_get_assessment),
        )
        .route(
            "/api/v1/assessments/:id/questions",
            get(assessments::handle_get_questions),
        )
        .route(
            "/api/v1/assessments/:id/results",
            post(results::handle_submit),
        )
        // Results
        .route("/api/v1/results/:id", get(results::handle_get_result))
        .route("/api/v1/results/:id/score", post(results::handle_score))
        .route("/api/v1/results/:id/report", get(results::handle_get_report))
        // Candidate self-service
        .route("/api/v1/me/results", get(results::handle_my_results))
        .route("/api/v1/me/dashboard", get(results::handle_my_dashboard))
        .route(
            "/api/v1/me/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        // Admin
        .route("/api/v1/admin/dashboard", get(admin::handle_dashboard))
        .route(
            "/api/v1/admin/candidates",
            get(admin::handle_list_candidates),
        )
        .route(
            "/api/v1/admin/candidates/:id",
            get(admin::handle_candidate_detail),
        )
        .with_state(state)
}
