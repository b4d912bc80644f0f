use serde::{Deserialize, Serialize};

/// League row from the leagues table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct League {
    pub league_id: i64,
    pub name: String,
    pub country: String,
    pub country_id: Option<i64>,
    pub icon_url: Option<String>,
    pub cl_spot: Option<i64>,
    pub uel_spot: Option<i64>,
    pub relegation_spot: Option<i64>,
}

/// Team row from the teams table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub founded_year: Option<f64>,
    pub stadium_id: Option<i64>,
    pub league_id: Option<i64>,
    pub coach_id: Option<i64>,
    pub cresturl: Option<String>,
}

/// Team listed under a league, with stadium and coach names
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct LeagueTeam {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub team: Team,
    pub stadium_name: Option<String>,
    pub coach_name: Option<String>,
}

/// Row of the paginated team list
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TeamSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub team: Team,
    pub league_name: Option<String>,
    pub league_country: Option<String>,
    pub stadium_name: Option<String>,
    pub stadium_capacity: Option<f64>,
    pub coach_name: Option<String>,
    pub coach_nationality: Option<String>,
}

/// Single team with every joined descriptor
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TeamDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub team: Team,
    pub league_name: Option<String>,
    pub league_country: Option<String>,
    pub stadium_name: Option<String>,
    pub stadium_location: Option<String>,
    pub stadium_capacity: Option<f64>,
    pub coach_name: Option<String>,
    pub coach_nationality: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub player_id: i64,
    pub team_id: Option<i64>,
    pub name: String,
    pub position: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
}

/// Standing row joined with the team's name and crest
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StandingRow {
    pub standing_id: i64,
    pub season_id: Option<i64>,
    pub league_id: Option<i64>,
    pub position: Option<i64>,
    pub team_id: Option<i64>,
    pub played_games: Option<i64>,
    pub won: Option<i64>,
    pub draw: Option<i64>,
    pub lost: Option<i64>,
    pub points: Option<i64>,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub goal_difference: Option<i64>,
    pub form: Option<String>,
    pub team_name: String,
    pub team_crest: Option<String>,
}

/// Match row from the matches table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Match {
    pub match_id: i64,
    pub season_id: Option<i64>,
    pub league_id: Option<i64>,
    pub matchday: Option<i64>,
    pub home_team_id: Option<i64>,
    pub away_team_id: Option<i64>,
    pub winner: Option<String>,
    pub utc_date: Option<String>,
}

/// Closed set of match outcomes as stored in `matches.winner`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    HomeTeam,
    AwayTeam,
    Draw,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::HomeTeam => "HOME_TEAM",
            MatchOutcome::AwayTeam => "AWAY_TEAM",
            MatchOutcome::Draw => "DRAW",
        }
    }
}

/// Row of the paginated match list: team names plus both scorelines
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MatchListItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fixture: Match,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub full_time_home: Option<i64>,
    pub full_time_away: Option<i64>,
    pub half_time_home: Option<i64>,
    pub half_time_away: Option<i64>,
}

/// Row of a team's match list
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TeamMatchItem {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fixture: Match,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub full_time_home: Option<i64>,
    pub full_time_away: Option<i64>,
    pub league_name: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MatchDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fixture: Match,
    pub home_team_name: Option<String>,
    pub home_team_crest: Option<String>,
    pub away_team_name: Option<String>,
    pub away_team_crest: Option<String>,
    pub league_name: Option<String>,
    pub league_country: Option<String>,
    pub full_time_home: Option<i64>,
    pub full_time_away: Option<i64>,
    pub half_time_home: Option<i64>,
    pub half_time_away: Option<i64>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UpcomingMatch {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub fixture: Match,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    pub league_name: Option<String>,
}

/// Win/draw/loss counts over every match a team played
#[derive(Debug, Default, sqlx::FromRow)]
pub struct ResultsSummary {
    pub total_matches: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
}

/// Goal sums over scored matches; NULL when the team has no scores
#[derive(Debug, Default, sqlx::FromRow)]
pub struct GoalsSummary {
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
}

#[derive(Debug, sqlx::FromRow)]
pub struct TablePosition {
    pub position: Option<i64>,
    pub points: Option<i64>,
    pub played_games: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TeamStatistics {
    pub total_matches: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: Option<i64>,
    pub goals_against: Option<i64>,
    pub goal_difference: i64,
    pub current_position: Option<i64>,
    pub points: Option<i64>,
}

impl TeamStatistics {
    pub fn merge(
        results: ResultsSummary,
        goals: GoalsSummary,
        table: Option<TablePosition>,
    ) -> Self {
        let goal_difference =
            goals.goals_for.unwrap_or(0) - goals.goals_against.unwrap_or(0);

        Self {
            total_matches: results.total_matches,
            wins: results.wins,
            draws: results.draws,
            losses: results.losses,
            goals_for: goals.goals_for,
            goals_against: goals.goals_against,
            goal_difference,
            current_position: table.as_ref().and_then(|t| t.position),
            points: table.and_then(|t| t.points),
        }
    }
}

// Response wrappers

#[derive(Debug, Serialize)]
pub struct LeagueStandings {
    pub league: League,
    pub standings: Vec<StandingRow>,
}

#[derive(Debug, Serialize)]
pub struct TeamPlayers {
    pub team: Team,
    pub players: Vec<Player>,
    pub total_players: usize,
}

#[derive(Debug, Serialize)]
pub struct TeamStatisticsResponse {
    pub team: Team,
    pub statistics: TeamStatistics,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub leagues_available: i64,
    pub version: String,
    pub environment: String,
}
