use super::{paginate, Filter, Page, PageRequest, SqlValue, Store, StoreError};
use crate::models::{
    GoalsSummary, Player, ResultsSummary, TablePosition, Team, TeamDetail, TeamMatchItem,
    TeamSummary,
};

const TEAM_COLUMNS: &str = "team_id, name, founded_year, stadium_id, league_id, coach_id, cresturl";

/// Which side of the fixture the team must be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Venue {
    Home,
    Away,
    Either,
}

impl Venue {
    /// `home_only` wins over `away_only`; neither means both sides.
    pub fn from_flags(home_only: bool, away_only: bool) -> Self {
        if home_only {
            Venue::Home
        } else if away_only {
            Venue::Away
        } else {
            Venue::Either
        }
    }

    fn predicate(self, team_id: i64) -> (&'static str, Vec<SqlValue>) {
        match self {
            Venue::Home => ("m.home_team_id = ?", vec![team_id.into()]),
            Venue::Away => ("m.away_team_id = ?", vec![team_id.into()]),
            Venue::Either => (
                "(m.home_team_id = ? OR m.away_team_id = ?)",
                vec![team_id.into(), team_id.into()],
            ),
        }
    }
}

pub async fn get_team_by_id(store: &Store, team_id: i64) -> Result<Option<Team>, StoreError> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE team_id = ?");
    store.fetch_one(&sql, &[SqlValue::Integer(team_id)]).await
}

pub async fn list_teams(
    store: &Store,
    league_id: Option<i64>,
    search: Option<&str>,
    request: PageRequest,
) -> Result<Page<TeamSummary>, StoreError> {
    let mut filter = Filter::new();
    filter
        .equals("t.league_id", league_id.map(SqlValue::from))
        .contains("t.name", search);

    let sql = format!(
        r#"SELECT
               t.team_id, t.name, t.founded_year, t.stadium_id, t.league_id, t.coach_id, t.cresturl,
               l.name AS league_name,
               l.country AS league_country,
               s.name AS stadium_name,
               s.capacity AS stadium_capacity,
               c.name AS coach_name,
               c.nationality AS coach_nationality
           FROM teams t
           LEFT JOIN leagues l ON t.league_id = l.league_id
           LEFT JOIN stadiums s ON t.stadium_id = s.stadium_id
           LEFT JOIN coaches c ON t.coach_id = c.coach_id{}
           ORDER BY t.name, t.team_id"#,
        filter.where_clause()
    );

    paginate(store, &sql, filter.params(), request).await
}

pub async fn get_team_detail(store: &Store, team_id: i64) -> Result<Option<TeamDetail>, StoreError> {
    store
        .fetch_one(
            r#"SELECT
                   t.team_id, t.name, t.founded_year, t.stadium_id, t.league_id, t.coach_id, t.cresturl,
                   l.name AS league_name,
                   l.country AS league_country,
                   s.name AS stadium_name,
                   s.location AS stadium_location,
                   s.capacity AS stadium_capacity,
                   c.name AS coach_name,
                   c.nationality AS coach_nationality
               FROM teams t
               LEFT JOIN leagues l ON t.league_id = l.league_id
               LEFT JOIN stadiums s ON t.stadium_id = s.stadium_id
               LEFT JOIN coaches c ON t.coach_id = c.coach_id
               WHERE t.team_id = ?"#,
            &[SqlValue::Integer(team_id)],
        )
        .await
}

pub async fn get_team_players(
    store: &Store,
    team_id: i64,
    position: Option<&str>,
) -> Result<Vec<Player>, StoreError> {
    let filter = Filter::from_equalities([
        ("team_id", Some(SqlValue::Integer(team_id))),
        ("position", position.map(SqlValue::from)),
    ]);

    let sql = format!(
        "SELECT player_id, team_id, name, position, date_of_birth, nationality FROM players{} ORDER BY name",
        filter.where_clause()
    );

    store.fetch_many(&sql, filter.params()).await
}

pub async fn list_team_matches(
    store: &Store,
    team_id: i64,
    venue: Venue,
    request: PageRequest,
) -> Result<Page<TeamMatchItem>, StoreError> {
    let (predicate, params) = venue.predicate(team_id);
    let mut filter = Filter::new();
    filter.raw(predicate, params);

    let sql = format!(
        r#"SELECT
               m.match_id, m.season_id, m.league_id, m.matchday,
               m.home_team_id, m.away_team_id, m.winner, m.utc_date,
               ht.name AS home_team_name,
               at.name AS away_team_name,
               s.full_time_home,
               s.full_time_away,
               l.name AS league_name
           FROM matches m
           LEFT JOIN teams ht ON m.home_team_id = ht.team_id
           LEFT JOIN teams at ON m.away_team_id = at.team_id
           LEFT JOIN scores s ON m.match_id = s.match_id
           LEFT JOIN leagues l ON m.league_id = l.league_id{}
           ORDER BY m.utc_date DESC, m.match_id"#,
        filter.where_clause()
    );

    paginate(store, &sql, filter.params(), request).await
}

pub async fn get_results_summary(store: &Store, team_id: i64) -> Result<ResultsSummary, StoreError> {
    let id = SqlValue::Integer(team_id);
    let summary = store
        .fetch_one(
            r#"SELECT
                   COUNT(*) AS total_matches,
                   COALESCE(SUM(CASE WHEN winner = 'HOME_TEAM' AND home_team_id = ? THEN 1
                                     WHEN winner = 'AWAY_TEAM' AND away_team_id = ? THEN 1
                                     ELSE 0 END), 0) AS wins,
                   COALESCE(SUM(CASE WHEN winner = 'DRAW' THEN 1 ELSE 0 END), 0) AS draws,
                   COALESCE(SUM(CASE WHEN winner = 'HOME_TEAM' AND away_team_id = ? THEN 1
                                     WHEN winner = 'AWAY_TEAM' AND home_team_id = ? THEN 1
                                     ELSE 0 END), 0) AS losses
               FROM matches
               WHERE home_team_id = ? OR away_team_id = ?"#,
            &[
                id.clone(),
                id.clone(),
                id.clone(),
                id.clone(),
                id.clone(),
                id,
            ],
        )
        .await?;

    Ok(summary.unwrap_or_default())
}

pub async fn get_goals_summary(store: &Store, team_id: i64) -> Result<GoalsSummary, StoreError> {
    let id = SqlValue::Integer(team_id);
    let summary = store
        .fetch_one(
            r#"SELECT
                   SUM(CASE WHEN m.home_team_id = ? THEN s.full_time_home ELSE s.full_time_away END) AS goals_for,
                   SUM(CASE WHEN m.home_team_id = ? THEN s.full_time_away ELSE s.full_time_home END) AS goals_against
               FROM matches m
               JOIN scores s ON m.match_id = s.match_id
               WHERE m.home_team_id = ? OR m.away_team_id = ?"#,
            &[id.clone(), id.clone(), id.clone(), id],
        )
        .await?;

    Ok(summary.unwrap_or_default())
}

pub async fn get_table_position(store: &Store, team_id: i64) -> Result<Option<TablePosition>, StoreError> {
    store
        .fetch_one(
            "SELECT position, points, played_games FROM standings WHERE team_id = ?",
            &[SqlValue::Integer(team_id)],
        )
        .await
}
