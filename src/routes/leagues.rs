use axum::{
    extract::{Path, State},
    response::Json,
};

use super::AppState;
use crate::db;
use crate::error::ApiError;
use crate::models::{League, LeagueStandings, LeagueTeam};

async fn require_league(state: &AppState, league_id: i64) -> Result<League, ApiError> {
    db::leagues::get_league_by_id(&state.store, league_id)
        .await?
        .ok_or(ApiError::NotFound("League not found"))
}

// GET /api/v1/leagues - All leagues ordered by name
pub async fn get_leagues(State(state): State<AppState>) -> Result<Json<Vec<League>>, ApiError> {
    let leagues = db::leagues::get_all_leagues(&state.store).await?;
    Ok(Json(leagues))
}

// GET /api/v1/leagues/:id
pub async fn get_league(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
) -> Result<Json<League>, ApiError> {
    let league = require_league(&state, league_id).await?;
    Ok(Json(league))
}

// GET /api/v1/leagues/:id/teams - Teams with stadium and coach names
pub async fn get_league_teams(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
) -> Result<Json<Vec<LeagueTeam>>, ApiError> {
    require_league(&state, league_id).await?;

    let teams = db::leagues::get_league_teams(&state.store, league_id).await?;
    Ok(Json(teams))
}

// GET /api/v1/leagues/:id/standings - Table ordered by position
pub async fn get_league_standings(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
) -> Result<Json<LeagueStandings>, ApiError> {
    let league = require_league(&state, league_id).await?;

    let standings = db::leagues::get_league_standings(&state.store, league_id).await?;
    Ok(Json(LeagueStandings { league, standings }))
}
