use super::{paginate, Filter, Page, PageRequest, SqlValue, Store, StoreError};
use crate::models::{MatchDetail, MatchListItem, MatchOutcome, UpcomingMatch};

/// Optional filters accepted by the match list.
#[derive(Debug, Default, Clone)]
pub struct MatchFilters {
    pub league_id: Option<i64>,
    pub team_id: Option<i64>,
    pub matchday: Option<i64>,
    pub winner: Option<MatchOutcome>,
}

impl MatchFilters {
    fn to_filter(&self) -> Filter {
        let mut filter = Filter::from_equalities([
            ("m.league_id", self.league_id.map(SqlValue::from)),
            ("m.matchday", self.matchday.map(SqlValue::from)),
            ("m.winner", self.winner.map(|w| SqlValue::from(w.as_str()))),
        ]);
        // the team may be on either side of the fixture
        if let Some(team_id) = self.team_id {
            filter.raw(
                "(m.home_team_id = ? OR m.away_team_id = ?)",
                [team_id.into(), team_id.into()],
            );
        }
        filter
    }
}

pub async fn list_matches(
    store: &Store,
    filters: &MatchFilters,
    request: PageRequest,
) -> Result<Page<MatchListItem>, StoreError> {
    let filter = filters.to_filter();

    let sql = format!(
        r#"SELECT
               m.match_id, m.season_id, m.league_id, m.matchday,
               m.home_team_id, m.away_team_id, m.winner, m.utc_date,
               ht.name AS home_team_name,
               at.name AS away_team_name,
               s.full_time_home,
               s.full_time_away,
               s.half_time_home,
               s.half_time_away
           FROM matches m
           LEFT JOIN teams ht ON m.home_team_id = ht.team_id
           LEFT JOIN teams at ON m.away_team_id = at.team_id
           LEFT JOIN scores s ON m.match_id = s.match_id{}
           ORDER BY m.utc_date DESC, m.match_id"#,
        filter.where_clause()
    );

    paginate(store, &sql, filter.params(), request).await
}

pub async fn get_match_detail(store: &Store, match_id: i64) -> Result<Option<MatchDetail>, StoreError> {
    store
        .fetch_one(
            r#"SELECT
                   m.match_id, m.season_id, m.league_id, m.matchday,
                   m.home_team_id, m.away_team_id, m.winner, m.utc_date,
                   ht.name AS home_team_name,
                   ht.cresturl AS home_team_crest,
                   at.name AS away_team_name,
                   at.cresturl AS away_team_crest,
                   l.name AS league_name,
                   l.country AS league_country,
                   s.full_time_home,
                   s.full_time_away,
                   s.half_time_home,
                   s.half_time_away
               FROM matches m
               LEFT JOIN teams ht ON m.home_team_id = ht.team_id
               LEFT JOIN teams at ON m.away_team_id = at.team_id
               LEFT JOIN leagues l ON m.league_id = l.league_id
               LEFT JOIN scores s ON m.match_id = s.match_id
               WHERE m.match_id = ?"#,
            &[SqlValue::Integer(match_id)],
        )
        .await
}

/// The dataset is a finished season, so "upcoming" is the most recent
/// `days * 3` fixtures, newest first.
pub async fn get_upcoming_matches(
    store: &Store,
    days: u32,
    league_id: Option<i64>,
) -> Result<Vec<UpcomingMatch>, StoreError> {
    let filter = Filter::from_equalities([("m.league_id", league_id.map(SqlValue::from))]);

    let sql = format!(
        r#"SELECT
               m.match_id, m.season_id, m.league_id, m.matchday,
               m.home_team_id, m.away_team_id, m.winner, m.utc_date,
               ht.name AS home_team_name,
               at.name AS away_team_name,
               l.name AS league_name
           FROM matches m
           LEFT JOIN teams ht ON m.home_team_id = ht.team_id
           LEFT JOIN teams at ON m.away_team_id = at.team_id
           LEFT JOIN leagues l ON m.league_id = l.league_id{}
           ORDER BY m.utc_date DESC, m.match_id
           LIMIT ?"#,
        filter.where_clause()
    );

    let mut params = filter.into_params();
    params.push(SqlValue::Integer(i64::from(days) * 3));

    store.fetch_many(&sql, &params).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_filter_is_appended_after_equalities() {
        let filters = MatchFilters {
            league_id: Some(2),
            team_id: Some(11),
            matchday: None,
            winner: Some(MatchOutcome::Draw),
        };
        let filter = filters.to_filter();

        assert_eq!(
            filter.predicate(),
            "m.league_id = ? AND m.winner = ? AND (m.home_team_id = ? OR m.away_team_id = ?)"
        );
        assert_eq!(
            filter.params(),
            &[
                SqlValue::Integer(2),
                SqlValue::Text("DRAW".to_string()),
                SqlValue::Integer(11),
                SqlValue::Integer(11),
            ]
        );
    }

    #[test]
    fn no_filters_means_no_where_clause() {
        assert_eq!(MatchFilters::default().to_filter().where_clause(), "");
    }
}
