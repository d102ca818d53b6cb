// Portfolio - Web Server
// Serves the rendered page, a JSON API over the fixed datasets, and the
// static recommendation letters.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use portfolio::{cards_for, render_page, PortfolioData, Tab};

/// Shared application state. The datasets are immutable, so handlers
/// share them without locking.
#[derive(Clone)]
struct AppState {
    data: Arc<PortfolioData>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

#[derive(Deserialize)]
struct PageQuery {
    tab: Option<String>,
}

/// Resolve a tab name from the request, falling back to the default tab
/// for missing or unknown values.
fn resolve_tab(raw: Option<&str>) -> Tab {
    raw.and_then(|s| s.parse().ok()).unwrap_or_default()
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Serve the portfolio page; ?tab= picks the content panel
async fn serve_page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> impl IntoResponse {
    let tab = resolve_tab(query.tab.as_deref());
    Html(render_page(&state.data, tab))
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/profile - Hero block data
async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.data.profile.clone()))
}

/// GET /api/projects - The "What I Built" dataset
async fn get_projects(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.data.projects.clone()))
}

/// GET /api/learnings - The "What I Learnt" dataset
async fn get_learnings(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.data.learnings.clone()))
}

/// GET /api/teachings - The "What I Taught" dataset
async fn get_teachings(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.data.teachings.clone()))
}

/// GET /api/recommendations - The recommendations grid data
async fn get_recommendations(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.data.recommendations.clone()))
}

/// GET /api/cards/:tab - Card views for one tab, in dataset order
async fn get_cards(State(state): State<AppState>, Path(tab): Path<String>) -> impl IntoResponse {
    let tab = resolve_tab(Some(tab.as_str()));
    let cards = cards_for(tab, &state.data);

    (StatusCode::OK, Json(ApiResponse::ok(cards))).into_response()
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Portfolio - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState {
        data: Arc::new(PortfolioData::new()),
    };
    println!(
        "✓ Datasets loaded: {} projects, {} learnings, {} teachings",
        state.data.projects.len(),
        state.data.learnings.len(),
        state.data.teachings.len()
    );

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/profile", get(get_profile))
        .route("/projects", get(get_projects))
        .route("/learnings", get(get_learnings))
        .route("/teachings", get(get_teachings))
        .route("/recommendations", get(get_recommendations))
        .route("/cards/:tab", get(get_cards))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(serve_page))
        .with_state(state)
        .nest("/api", api_routes)
        .nest_service("/recommendations", ServeDir::new("recommendations"))
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   Page: http://localhost:3000/?tab=built");
    println!("   API:  http://localhost:3000/api/projects");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tab_known_values() {
        assert_eq!(resolve_tab(Some("built")), Tab::Built);
        assert_eq!(resolve_tab(Some("learnt")), Tab::Learnt);
        assert_eq!(resolve_tab(Some("taught")), Tab::Taught);
    }

    #[test]
    fn test_resolve_tab_falls_back_to_default() {
        assert_eq!(resolve_tab(None), Tab::Built);
        assert_eq!(resolve_tab(Some("bogus")), Tab::Built);
        assert_eq!(resolve_tab(Some("")), Tab::Built);
    }

    #[test]
    fn test_api_response_envelope() {
        let json = serde_json::to_value(ApiResponse::ok(vec!["a", "b"])).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "a");
        assert!(json.get("error").is_none());
    }
}
