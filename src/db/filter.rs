//! WHERE-clause assembly.
//!
//! Column qualifiers are `&'static str` so only literals written in this crate
//! can reach the SQL text. Values always travel as bound parameters.

use super::SqlValue;

/// Join the present entries of `filters` into `col = ?` tests separated by
/// `AND`, in input order, and return the matching parameter list.
///
/// Absent values are skipped. An empty predicate means "no WHERE clause".
pub fn build_where_clause<I>(filters: I) -> (String, Vec<SqlValue>)
where
    I: IntoIterator<Item = (&'static str, Option<SqlValue>)>,
{
    let filter = Filter::from_equalities(filters);
    (filter.predicate(), filter.params)
}

/// Conjunction of predicates with their positional parameters.
#[derive(Debug, Default, Clone)]
pub struct Filter {
    conditions: Vec<String>,
    params: Vec<SqlValue>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_equalities<I>(filters: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<SqlValue>)>,
    {
        let mut filter = Self::new();
        for (column, value) in filters {
            filter.equals(column, value);
        }
        filter
    }

    /// Add `column = ?` when `value` is present.
    pub fn equals(&mut self, column: &'static str, value: Option<SqlValue>) -> &mut Self {
        if let Some(value) = value {
            self.conditions.push(format!("{column} = ?"));
            self.params.push(value);
        }
        self
    }

    /// Add a case-insensitive substring match on `column`. The term is matched
    /// as given, `%` and `_` included; blank terms add nothing.
    pub fn contains(&mut self, column: &'static str, term: Option<&str>) -> &mut Self {
        if let Some(term) = term.filter(|t| !t.trim().is_empty()) {
            self.conditions.push(format!("{column} LIKE ? ESCAPE '\\'"));
            self.params
                .push(SqlValue::Text(format!("%{}%", escape_like(term))));
        }
        self
    }

    /// Add a hand-written predicate. Its `?` count must equal `params.len()`.
    pub fn raw<P>(&mut self, condition: &'static str, params: P) -> &mut Self
    where
        P: IntoIterator<Item = SqlValue>,
    {
        self.conditions.push(condition.to_string());
        self.params.extend(params);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn predicate(&self) -> String {
        self.conditions.join(" AND ")
    }

    /// `" WHERE ..."` or an empty string.
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.predicate())
        }
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn into_params(self) -> Vec<SqlValue> {
        self.params
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_values_and_keeps_order() {
        let (predicate, params) = build_where_clause([
            ("m.league_id", Some(SqlValue::Integer(3))),
            ("m.matchday", None),
            ("m.winner", Some(SqlValue::from("DRAW"))),
        ]);

        assert_eq!(predicate, "m.league_id = ? AND m.winner = ?");
        assert_eq!(
            params,
            vec![SqlValue::Integer(3), SqlValue::Text("DRAW".to_string())]
        );
    }

    #[test]
    fn predicate_count_matches_present_values() {
        let inputs: Vec<(&'static str, Option<SqlValue>)> = vec![
            ("a", Some(1i64.into())),
            ("b", None),
            ("c", Some(2i64.into())),
            ("d", None),
            ("e", Some("x".into())),
        ];
        let present = inputs.iter().filter(|(_, v)| v.is_some()).count();

        let (predicate, params) = build_where_clause(inputs);

        assert_eq!(predicate.matches(" = ?").count(), present);
        assert_eq!(predicate.matches('?').count(), params.len());
        assert_eq!(params.len(), present);
    }

    #[test]
    fn empty_input_means_no_where_clause() {
        let (predicate, params) = build_where_clause(Vec::new());
        assert!(predicate.is_empty());
        assert!(params.is_empty());

        let (predicate, _) = build_where_clause([("t.league_id", None)]);
        assert!(predicate.is_empty());
        assert_eq!(Filter::new().where_clause(), "");
    }

    #[test]
    fn contains_keeps_surrounding_whitespace() {
        let mut filter = Filter::new();
        filter.contains("t.name", Some("FC ")).contains("t.name", Some(""));

        assert_eq!(filter.params(), &[SqlValue::Text("%FC %".to_string())]);
    }

    #[test]
    fn raw_and_contains_extend_the_conjunction() {
        let mut filter = Filter::new();
        filter
            .equals("m.league_id", Some(1i64.into()))
            .raw("(m.home_team_id = ? OR m.away_team_id = ?)", [7i64.into(), 7i64.into()])
            .contains("t.name", Some("  "))
            .contains("t.name", Some("50%_off"));

        assert_eq!(
            filter.where_clause(),
            " WHERE m.league_id = ? AND (m.home_team_id = ? OR m.away_team_id = ?) AND t.name LIKE ? ESCAPE '\\'"
        );
        assert_eq!(filter.params().len(), 4);
        assert_eq!(
            filter.params()[3],
            SqlValue::Text("%50\\%\\_off%".to_string())
        );
    }
}
