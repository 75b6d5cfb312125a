use axum::{
    Extension, Router, middleware,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::appointments::use_cases::book_appointment::inbound::http as book_http;
use crate::modules::appointments::use_cases::list_appointments::inbound::http as appointments_http;
use crate::modules::appointments::use_cases::slot_board::inbound::http as slot_board_http;
use crate::modules::auth::adapters::inbound::session_gate::require_session;
use crate::modules::auth::use_cases::session::inbound::http as session_http;
use crate::modules::essays::use_cases::dashboard_insights::inbound::http as dashboard_http;
use crate::modules::essays::use_cases::list_essays::inbound::http as essays_http;
use crate::modules::essays::use_cases::register_essay::inbound::http as register_http;
use crate::modules::library::use_cases::publish_material::inbound::http as materials_http;
use crate::modules::library::use_cases::weekly_themes::inbound::http as themes_http;
use crate::modules::tutor::use_cases::chat::inbound::http as chat_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/essays", get(essays_http::list).post(register_http::handle))
        .route("/api/essays/{id}", get(essays_http::get_by_id))
        .route("/api/analytics/dashboard", get(dashboard_http::handle))
        .route(
            "/api/appointments",
            get(appointments_http::list).post(book_http::handle),
        )
        .route("/api/appointments/upcoming", get(appointments_http::upcoming))
        .route("/api/appointments/availability", get(slot_board_http::handle))
        .route("/api/appointments/{id}", get(appointments_http::get_by_id))
        .route("/api/materials", get(materials_http::list).post(materials_http::create))
        .route("/api/materials/{id}", get(materials_http::get_by_id))
        .route("/api/weekly-theme", get(themes_http::current))
        .route("/api/weekly-themes", get(themes_http::list).post(themes_http::create))
        .route("/api/dieguito/chat", post(chat_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let public = Router::new()
        .route("/api/auth/login", post(session_http::login))
        .route("/api/auth/logout", post(session_http::logout))
        .route("/api/auth/check", get(session_http::check));

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(Extension(build_schema(state.clone())))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
