use super::{SqlValue, Store, StoreError};
use crate::models::{League, LeagueTeam, StandingRow};

const LEAGUE_COLUMNS: &str = "league_id, name, country, country_id, icon_url, cl_spot, uel_spot, relegation_spot";

pub async fn get_all_leagues(store: &Store) -> Result<Vec<League>, StoreError> {
    let sql = format!("SELECT {LEAGUE_COLUMNS} FROM leagues ORDER BY name");
    store.fetch_many(&sql, &[]).await
}

pub async fn get_league_by_id(store: &Store, league_id: i64) -> Result<Option<League>, StoreError> {
    let sql = format!("SELECT {LEAGUE_COLUMNS} FROM leagues WHERE league_id = ?");
    store.fetch_one(&sql, &[SqlValue::Integer(league_id)]).await
}

pub async fn get_league_teams(store: &Store, league_id: i64) -> Result<Vec<LeagueTeam>, StoreError> {
    store
        .fetch_many(
            r#"SELECT
                   t.team_id, t.name, t.founded_year, t.stadium_id, t.league_id, t.coach_id, t.cresturl,
                   s.name AS stadium_name,
                   c.name AS coach_name
               FROM teams t
               LEFT JOIN stadiums s ON t.stadium_id = s.stadium_id
               LEFT JOIN coaches c ON t.coach_id = c.coach_id
               WHERE t.league_id = ?
               ORDER BY t.name"#,
            &[SqlValue::Integer(league_id)],
        )
        .await
}

pub async fn get_league_standings(store: &Store, league_id: i64) -> Result<Vec<StandingRow>, StoreError> {
    store
        .fetch_many(
            r#"SELECT
                   s.standing_id, s.season_id, s.league_id, s.position, s.team_id,
                   s.played_games, s.won, s.draw, s.lost, s.points,
                   s.goals_for, s.goals_against, s.goal_difference, s.form,
                   t.name AS team_name,
                   t.cresturl AS team_crest
               FROM standings s
               JOIN teams t ON s.team_id = t.team_id
               WHERE s.league_id = ?
               ORDER BY s.position"#,
            &[SqlValue::Integer(league_id)],
        )
        .await
}
