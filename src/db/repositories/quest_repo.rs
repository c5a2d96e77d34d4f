//! Quest repository

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{error::AppResult, models::Quest};

/// Repository for quest database operations
pub struct QuestRepository;

impl QuestRepository {
    /// Create a new quest
    pub async fn create(
        pool: &SqlitePool,
        title: &str,
        description: &str,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
        points: i64,
    ) -> AppResult<Quest> {
        let quest = sqlx::query_as::<_, Quest>(
            r#"
            INSERT INTO quests (id, title, description, starts_on, ends_on, points, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(starts_on)
        .bind(ends_on)
        .bind(points)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(quest)
    }

    /// Find quest by ID
    pub async fn find_by_id(pool: &SqlitePool, id: &Uuid) -> AppResult<Option<Quest>> {
        let quest = sqlx::query_as::<_, Quest>(r#"SELECT * FROM quests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(quest)
    }

    /// List all quests, newest start date first
    pub async fn list_all(pool: &SqlitePool) -> AppResult<Vec<Quest>> {
        let quests =
            sqlx::query_as::<_, Quest>(r#"SELECT * FROM quests ORDER BY starts_on DESC"#)
                .fetch_all(pool)
                .await?;

        Ok(quests)
    }
}
