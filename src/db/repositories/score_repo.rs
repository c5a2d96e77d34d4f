//! Score repository

use chrono::{NaiveDate, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::{error::AppResult, handlers::leaderboard::response::LeaderboardEntry, models::Score};

/// Repository for weekly score database operations
pub struct ScoreRepository;

impl ScoreRepository {
    /// Add points to a user's score row for the given week.
    ///
    /// The row is created on first approval in that week; the UNIQUE
    /// constraint on (user_id, week_start) makes the upsert atomic, so
    /// concurrent approvals cannot produce duplicate rows.
    pub async fn add_points(
        conn: &mut SqliteConnection,
        user_id: &Uuid,
        week_start: NaiveDate,
        points: i64,
    ) -> AppResult<Score> {
        let score = sqlx::query_as::<_, Score>(
            r#"
            INSERT INTO scores (id, user_id, week_start, points, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, week_start)
            DO UPDATE SET points = points + excluded.points
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(week_start)
        .bind(points)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(score)
    }

    /// Find a user's score row for the given week
    pub async fn find_by_user_and_week(
        pool: &SqlitePool,
        user_id: &Uuid,
        week_start: NaiveDate,
    ) -> AppResult<Option<Score>> {
        let score = sqlx::query_as::<_, Score>(
            r#"SELECT * FROM scores WHERE user_id = $1 AND week_start = $2"#,
        )
        .bind(user_id)
        .bind(week_start)
        .fetch_optional(pool)
        .await?;

        Ok(score)
    }

    /// Top scorers for the given week, highest points first.
    ///
    /// Ties are broken by user id so the ordering is deterministic.
    pub async fn weekly_top(
        pool: &SqlitePool,
        week_start: NaiveDate,
        limit: i64,
    ) -> AppResult<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT u.display_name AS user, s.points
            FROM scores s
            JOIN users u ON u.id = s.user_id
            WHERE s.week_start = $1
            ORDER BY s.points DESC, s.user_id ASC
            LIMIT $2
            "#,
        )
        .bind(week_start)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
