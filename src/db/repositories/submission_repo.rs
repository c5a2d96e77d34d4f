//! Submission repository

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

use crate::{error::AppResult, models::Submission};

/// Repository for submission database operations
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Create a new submission
    pub async fn create(
        pool: &SqlitePool,
        user_id: &Uuid,
        quest_id: &Uuid,
        text: &str,
        image_url: Option<&str>,
        status: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (id, user_id, quest_id, text, image_url, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(quest_id)
        .bind(text)
        .bind(image_url)
        .bind(status)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(submission)
    }

    /// Find submission by ID
    pub async fn find_by_id(pool: &SqlitePool, id: &Uuid) -> AppResult<Option<Submission>> {
        let submission =
            sqlx::query_as::<_, Submission>(r#"SELECT * FROM submissions WHERE id = $1"#)
                .bind(id)
                .fetch_optional(pool)
                .await?;

        Ok(submission)
    }

    /// Transition a submission from one status to another.
    ///
    /// The update is guarded on the current status, so a submission that
    /// has already been reviewed is left untouched and `None` is returned.
    pub async fn transition_status(
        conn: &mut SqliteConnection,
        id: &Uuid,
        from: &str,
        to: &str,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            UPDATE submissions
            SET status = $3
            WHERE id = $1 AND status = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(submission)
    }
}
