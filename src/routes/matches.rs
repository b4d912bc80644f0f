use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use super::AppState;
use crate::db::{self, matches::MatchFilters, Page};
use crate::error::ApiError;
use crate::models::{MatchDetail, MatchListItem, MatchOutcome, UpcomingMatch};

const MAX_UPCOMING_DAYS: u32 = 30;

// Query parameters for listing matches
#[derive(Deserialize)]
pub struct ListMatchesQuery {
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    league_id: Option<i64>,
    #[serde(default)]
    team_id: Option<i64>,
    #[serde(default)]
    matchday: Option<i64>,
    /// HOME_TEAM, AWAY_TEAM or DRAW
    #[serde(default)]
    winner: Option<MatchOutcome>,
}

#[derive(Deserialize)]
pub struct UpcomingQuery {
    #[serde(default = "default_days")]
    days: u32,
    #[serde(default)]
    league_id: Option<i64>,
}

fn default_days() -> u32 {
    7
}

// GET /api/v1/matches?page&size&league_id&team_id&matchday&winner
pub async fn get_matches(
    State(state): State<AppState>,
    Query(params): Query<ListMatchesQuery>,
) -> Result<Json<Page<MatchListItem>>, ApiError> {
    let request = state.page_request(params.page, params.size)?;

    let filters = MatchFilters {
        league_id: params.league_id,
        team_id: params.team_id,
        matchday: params.matchday,
        winner: params.winner,
    };
    let page = db::matches::list_matches(&state.store, &filters, request).await?;

    Ok(Json(page))
}

// GET /api/v1/matches/:id - Match with teams, league and score
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<i64>,
) -> Result<Json<MatchDetail>, ApiError> {
    let fixture = db::matches::get_match_detail(&state.store, match_id)
        .await?
        .ok_or(ApiError::NotFound("Match not found"))?;

    Ok(Json(fixture))
}

/// GET /api/v1/matches/upcoming?days&league_id
///
/// The season on file is finished, so this returns the latest `days * 3`
/// matches, newest first, as a stand-in for a fixture list.
pub async fn get_upcoming_matches(
    State(state): State<AppState>,
    Query(params): Query<UpcomingQuery>,
) -> Result<Json<Vec<UpcomingMatch>>, ApiError> {
    if !(1..=MAX_UPCOMING_DAYS).contains(&params.days) {
        return Err(ApiError::Validation(format!(
            "days must be between 1 and {MAX_UPCOMING_DAYS}"
        )));
    }

    let matches =
        db::matches::get_upcoming_matches(&state.store, params.days, params.league_id).await?;

    Ok(Json(matches))
}
