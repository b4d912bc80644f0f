use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::AppState;
use crate::db::{self, teams::Venue, Page};
use crate::error::ApiError;
use crate::models::{
    Team, TeamDetail, TeamMatchItem, TeamPlayers, TeamStatistics, TeamStatisticsResponse,
    TeamSummary,
};

// Query parameters for listing teams
#[derive(Deserialize)]
pub struct ListTeamsQuery {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    league_id: Option<i64>,
    /// Case-insensitive substring of the team name
    #[serde(default)]
    search: Option<String>,
}

#[derive(Deserialize)]
pub struct PlayersQuery {
    #[serde(default)]
    position: Option<String>,
}

// Query parameters for a team's matches
#[derive(Deserialize)]
pub struct TeamMatchesQuery {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    home_only: Option<bool>,
    #[serde(default)]
    away_only: Option<bool>,
}

async fn require_team(state: &AppState, team_id: i64) -> Result<Team, ApiError> {
    db::teams::get_team_by_id(&state.store, team_id)
        .await?
        .ok_or(ApiError::NotFound("Team not found"))
}

// GET /api/v1/teams?page&size&league_id&search
pub async fn get_teams(
    State(state): State<AppState>,
    Query(params): Query<ListTeamsQuery>,
) -> Result<Json<Page<TeamSummary>>, ApiError> {
    let request = state.page_request(params.page, params.size)?;

    let page = db::teams::list_teams(
        &state.store,
        params.league_id,
        params.search.as_deref(),
        request,
    )
    .await?;

    Ok(Json(page))
}

// GET /api/v1/teams/:id - Team with league, stadium and coach descriptors
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamDetail>, ApiError> {
    let team = db::teams::get_team_detail(&state.store, team_id)
        .await?
        .ok_or(ApiError::NotFound("Team not found"))?;

    Ok(Json(team))
}

// GET /api/v1/teams/:id/players?position
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(params): Query<PlayersQuery>,
) -> Result<Json<TeamPlayers>, ApiError> {
    let team = require_team(&state, team_id).await?;

    let position = params.position.as_deref().filter(|p| !p.is_empty());
    let players = db::teams::get_team_players(&state.store, team_id, position).await?;

    Ok(Json(TeamPlayers {
        team,
        total_players: players.len(),
        players,
    }))
}

// GET /api/v1/teams/:id/matches?page&size&home_only&away_only
pub async fn get_team_matches(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(params): Query<TeamMatchesQuery>,
) -> Result<Json<Page<TeamMatchItem>>, ApiError> {
    require_team(&state, team_id).await?;
    let request = state.page_request(params.page, params.size)?;

    let venue = Venue::from_flags(
        params.home_only.unwrap_or(false),
        params.away_only.unwrap_or(false),
    );
    let page = db::teams::list_team_matches(&state.store, team_id, venue, request).await?;

    Ok(Json(page))
}

// GET /api/v1/teams/:id/statistics - Results, goals and table position in one record
pub async fn get_team_statistics(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamStatisticsResponse>, ApiError> {
    let team = require_team(&state, team_id).await?;

    let (results, goals, table) = tokio::try_join!(
        db::teams::get_results_summary(&state.store, team_id),
        db::teams::get_goals_summary(&state.store, team_id),
        db::teams::get_table_position(&state.store, team_id),
    )?;

    Ok(Json(TeamStatisticsResponse {
        team,
        statistics: TeamStatistics::merge(results, goals, table),
    }))
}
