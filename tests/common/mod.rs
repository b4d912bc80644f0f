#![allow(dead_code)]

use axum::{body::Body, http::Request, http::StatusCode, Router};
use football_api::{router, AppState, Config};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

const SCHEMA: &str = r#"
CREATE TABLE leagues (
    league_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    country TEXT NOT NULL,
    country_id INTEGER,
    icon_url TEXT,
    cl_spot INTEGER,
    uel_spot INTEGER,
    relegation_spot INTEGER
);
CREATE TABLE stadiums (
    stadium_id INTEGER PRIMARY KEY,
    name TEXT,
    location TEXT,
    capacity REAL
);
CREATE TABLE coaches (
    coach_id INTEGER PRIMARY KEY,
    name TEXT,
    team_id INTEGER,
    nationality TEXT
);
CREATE TABLE teams (
    team_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    founded_year REAL,
    stadium_id INTEGER,
    league_id INTEGER,
    coach_id INTEGER,
    cresturl TEXT
);
CREATE TABLE players (
    player_id INTEGER PRIMARY KEY,
    team_id INTEGER,
    name TEXT NOT NULL,
    position TEXT,
    date_of_birth TEXT,
    nationality TEXT
);
CREATE TABLE seasons (
    season_id INTEGER PRIMARY KEY,
    league_id INTEGER,
    year TEXT
);
CREATE TABLE matches (
    match_id INTEGER PRIMARY KEY,
    season_id INTEGER,
    league_id INTEGER,
    matchday INTEGER,
    home_team_id INTEGER,
    away_team_id INTEGER,
    winner TEXT,
    utc_date TEXT
);
CREATE TABLE scores (
    score_id INTEGER PRIMARY KEY,
    match_id INTEGER UNIQUE,
    full_time_home INTEGER,
    full_time_away INTEGER,
    half_time_home INTEGER,
    half_time_away INTEGER
);
CREATE TABLE standings (
    standing_id INTEGER PRIMARY KEY,
    season_id INTEGER,
    league_id INTEGER,
    position INTEGER,
    team_id INTEGER,
    played_games INTEGER,
    won INTEGER,
    draw INTEGER,
    lost INTEGER,
    points INTEGER,
    goals_for INTEGER,
    goals_against INTEGER,
    goal_difference INTEGER,
    form TEXT
);
"#;

const DATA: &str = r#"
INSERT INTO leagues VALUES
    (1, 'Premier League', 'England', 10, 'pl.png', 4, 5, 18),
    (2, 'La Liga', 'Spain', 20, NULL, 4, 5, 18);

INSERT INTO stadiums VALUES
    (1, 'Emirates Stadium', 'London', 60704.0),
    (2, 'Anfield', 'Liverpool', 53394.0),
    (3, 'Santiago Bernabeu', 'Madrid', 83186.0);

INSERT INTO coaches VALUES
    (1, 'Mikel Arteta', 1, 'Spain'),
    (2, 'Jurgen Klopp', 2, 'Germany'),
    (3, 'Carlo Ancelotti', 3, 'Italy');

INSERT INTO teams VALUES
    (1, 'Arsenal FC', 1886.0, 1, 1, 1, 'arsenal.png'),
    (2, 'Liverpool FC', 1892.0, 2, 1, 2, 'liverpool.png'),
    (3, 'Real Madrid CF', 1902.0, 3, 2, 3, 'madrid.png'),
    (4, 'Burnley FC', 1882.0, NULL, 1, NULL, NULL),
    (5, 'Luton Town', 1885.0, NULL, 1, NULL, NULL),
    (6, 'FC Barcelona', 1899.0, NULL, 2, NULL, NULL);

INSERT INTO players VALUES
    (1, 1, 'Bukayo Saka', 'Offence', '2001-09-05', 'England'),
    (2, 1, 'Declan Rice', 'Midfield', '1999-01-14', 'England'),
    (3, 1, 'David Raya', 'Goalkeeper', '1995-09-15', 'Spain'),
    (4, 2, 'Mohamed Salah', 'Offence', '1992-06-15', 'Egypt');

INSERT INTO seasons VALUES (1, 1, '2023-2024'), (2, 2, '2023-2024');

INSERT INTO matches VALUES
    (1, 1, 1, 1, 1, 2, 'HOME_TEAM', '2023-08-12'),
    (2, 1, 1, 2, 2, 1, 'DRAW', '2023-08-19'),
    (3, 1, 1, 3, 4, 1, 'AWAY_TEAM', '2023-08-26'),
    (4, 2, 2, 1, 3, 6, 'HOME_TEAM', '2023-08-13'),
    (5, 1, 1, 4, 5, 2, NULL, '2023-09-02');

INSERT INTO scores VALUES
    (1, 1, 2, 1, 1, 0),
    (2, 2, 1, 1, 0, 1),
    (3, 3, 0, 3, 0, 2),
    (4, 4, 2, 0, 1, 0);

INSERT INTO standings VALUES
    (1, 1, 1, 1, 1, 3, 2, 1, 0, 7, 6, 2, 4, 'WDW'),
    (2, 1, 1, 2, 2, 3, 0, 1, 1, 1, 2, 3, -1, 'LD'),
    (3, 1, 1, 3, 4, 1, 0, 0, 1, 0, 0, 3, -3, 'L'),
    (4, 1, 1, 4, 5, 1, 0, 0, 0, 0, 0, 0, 0, NULL),
    (5, 2, 2, 1, 3, 1, 1, 0, 0, 3, 2, 0, 2, 'W'),
    (6, 2, 2, 2, 6, 1, 0, 0, 1, 0, 0, 2, -2, 'L');
"#;

/// A populated SQLite file that lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("sports_league.sqlite");

        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .expect("create fixture database");
        sqlx::raw_sql(SCHEMA).execute(&mut conn).await.expect("create schema");
        sqlx::raw_sql(DATA).execute(&mut conn).await.expect("insert fixture rows");
        conn.close().await.expect("close fixture connection");

        Self { _dir: dir, path }
    }

    pub fn config(&self) -> Config {
        Config {
            database_path: self.path.clone(),
            ..Config::default()
        }
    }

    pub fn app(&self) -> Router {
        router(AppState::new(self.config()))
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub fn ids(rows: &Value, key: &str) -> Vec<i64> {
    rows.as_array()
        .expect("array")
        .iter()
        .map(|row| row[key].as_i64().expect("integer id"))
        .collect()
}
