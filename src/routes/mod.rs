use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::db::{PageRequest, Store};
use crate::error::ApiError;
use crate::telemetry;

pub mod health;
pub mod leagues;
pub mod matches;
pub mod teams;

pub const API_PREFIX: &str = "/api/v1";

/// Shared handler state: the store handle and the startup config.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Store::new(&config.database_path),
            config: Arc::new(config),
        }
    }

    /// Validate raw `page`/`size` query values and clamp `size`.
    pub fn page_request(&self, page: Option<u32>, size: Option<u32>) -> Result<PageRequest, ApiError> {
        let page = page.unwrap_or(1);
        let size = size.unwrap_or(self.config.default_page_size);

        if page < 1 {
            return Err(ApiError::Validation("page must be at least 1".to_string()));
        }
        if size < 1 {
            return Err(ApiError::Validation("size must be at least 1".to_string()));
        }

        Ok(PageRequest::new(page, size, self.config.max_page_size))
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_check))

        // League endpoints
        .route("/leagues", get(leagues::get_leagues))
        .route("/leagues/{id}", get(leagues::get_league))
        .route("/leagues/{id}/teams", get(leagues::get_league_teams))
        .route("/leagues/{id}/standings", get(leagues::get_league_standings))

        // Team endpoints
        .route("/teams", get(teams::get_teams))
        .route("/teams/{id}", get(teams::get_team))
        .route("/teams/{id}/players", get(teams::get_team_players))
        .route("/teams/{id}/matches", get(teams::get_team_matches))
        .route("/teams/{id}/statistics", get(teams::get_team_statistics))

        // Match endpoints
        .route("/matches", get(matches::get_matches))
        .route("/matches/upcoming", get(matches::get_upcoming_matches))
        .route("/matches/{id}", get(matches::get_match));

    let mut app = Router::new()
        .route("/", get(root))
        .nest(API_PREFIX, api);

    if state.config.enable_docs {
        app = app.route("/docs", get(docs));
    }

    let config = Arc::clone(&state.config);
    with_middleware(app, &config).with_state(state)
}

/// Panic catching, 5xx logging, request tracing and CORS, innermost first.
fn with_middleware(app: Router<AppState>, config: &Config) -> Router<AppState> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    app.layer(CatchPanicLayer::custom(telemetry::handle_panic))
        .layer(middleware::from_fn(telemetry::log_failures))
        .layer(trace)
        .layer(cors_layer(config))
}

/// Read-only service: GET only. Credentials are allowed unless origins is `*`.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods([Method::GET]);

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any).allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    cors.allow_origin(origins)
        .allow_credentials(true)
        .allow_headers(AllowHeaders::mirror_request())
}

#[derive(Serialize)]
pub struct EndpointIndex {
    leagues: String,
    teams: String,
    matches: String,
    health: String,
    docs: Option<&'static str>,
}

impl EndpointIndex {
    fn new(config: &Config) -> Self {
        Self {
            leagues: format!("{API_PREFIX}/leagues"),
            teams: format!("{API_PREFIX}/teams"),
            matches: format!("{API_PREFIX}/matches"),
            health: format!("{API_PREFIX}/health"),
            docs: config.enable_docs.then_some("/docs"),
        }
    }
}

#[derive(Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    version: String,
    environment: String,
    season: &'static str,
    leagues: [&'static str; 5],
    endpoints: EndpointIndex,
}

// GET / - Service information
async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Football API - Top European Leagues",
        version: state.config.api_version.clone(),
        environment: state.config.environment.clone(),
        season: "2023-2024",
        leagues: [
            "Premier League (England)",
            "La Liga (Spain)",
            "Serie A (Italy)",
            "Bundesliga (Germany)",
            "Ligue 1 (France)",
        ],
        endpoints: EndpointIndex::new(&state.config),
    })
}

// GET /docs - Endpoint index, routed only when docs are enabled
async fn docs() -> Json<Vec<&'static str>> {
    Json(vec![
        "GET /api/v1/health",
        "GET /api/v1/leagues",
        "GET /api/v1/leagues/{id}",
        "GET /api/v1/leagues/{id}/teams",
        "GET /api/v1/leagues/{id}/standings",
        "GET /api/v1/teams?page&size&league_id&search",
        "GET /api/v1/teams/{id}",
        "GET /api/v1/teams/{id}/players?position",
        "GET /api/v1/teams/{id}/matches?page&size&home_only&away_only",
        "GET /api/v1/teams/{id}/statistics",
        "GET /api/v1/matches?page&size&league_id&team_id&matchday&winner",
        "GET /api/v1/matches/upcoming?days&league_id",
        "GET /api/v1/matches/{id}",
    ])
}
