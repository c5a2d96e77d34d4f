//! Submission service

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    db::repositories::{QuestRepository, ScoreRepository, SubmissionRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::submissions::request::CreateSubmissionRequest,
    models::{Submission, SubmissionStatus},
    utils::time,
};

/// Submission service for business logic
pub struct SubmissionService;

impl SubmissionService {
    /// Create a new pending submission
    pub async fn create_submission(
        pool: &SqlitePool,
        payload: CreateSubmissionRequest,
    ) -> AppResult<Submission> {
        // Both referenced rows must exist
        UserRepository::find_by_id(pool, &payload.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        QuestRepository::find_by_id(pool, &payload.quest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quest not found".to_string()))?;

        SubmissionRepository::create(
            pool,
            &payload.user_id,
            &payload.quest_id,
            payload.text.as_deref().unwrap_or(""),
            payload.image_url.as_deref(),
            SubmissionStatus::Pending.as_str(),
        )
        .await
    }

    /// Approve a pending submission and credit the quest's points to the
    /// submitter's score row for the current week.
    ///
    /// Only a pending submission can be approved; a repeated approval
    /// returns a conflict instead of double-counting points. The status
    /// transition and the score upsert commit in one transaction.
    pub async fn approve_submission(pool: &SqlitePool, id: &Uuid) -> AppResult<Submission> {
        let submission = SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        if SubmissionStatus::parse(&submission.status).is_some_and(|s| s.is_final()) {
            return Err(AppError::Conflict(
                "Submission has already been reviewed".to_string(),
            ));
        }

        let quest = QuestRepository::find_by_id(pool, &submission.quest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quest not found".to_string()))?;

        let week_start = time::week_start_for(time::now_utc());

        let mut tx = pool.begin().await?;

        let approved = SubmissionRepository::transition_status(
            &mut tx,
            id,
            SubmissionStatus::Pending.as_str(),
            SubmissionStatus::Approved.as_str(),
        )
        .await?
        .ok_or_else(|| AppError::Conflict("Submission has already been reviewed".to_string()))?;

        ScoreRepository::add_points(&mut tx, &submission.user_id, week_start, quest.points)
            .await?;

        tx.commit().await?;

        tracing::info!(
            submission_id = %approved.id,
            user_id = %approved.user_id,
            points = quest.points,
            week_start = %week_start,
            "Submission approved"
        );

        Ok(approved)
    }

    /// Reject a pending submission. No points are credited.
    pub async fn reject_submission(pool: &SqlitePool, id: &Uuid) -> AppResult<Submission> {
        SubmissionRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let mut conn = pool.acquire().await?;

        SubmissionRepository::transition_status(
            &mut conn,
            id,
            SubmissionStatus::Pending.as_str(),
            SubmissionStatus::Rejected.as_str(),
        )
        .await?
        .ok_or_else(|| AppError::Conflict("Submission has already been reviewed".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;
    use crate::models::{Quest, Submission, User};

    async fn memory_pool() -> SqlitePool {
        // A single connection keeps every query on the same in-memory database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        crate::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    async fn seed_user(pool: &SqlitePool, email: &str, name: &str) -> User {
        UserRepository::create(pool, email, name, None).await.unwrap()
    }

    async fn seed_quest(pool: &SqlitePool, points: i64) -> Quest {
        QuestRepository::create(
            pool,
            "Weekly cleanup",
            "Tidy the common area",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            points,
        )
        .await
        .unwrap()
    }

    async fn seed_submission(pool: &SqlitePool, user: &User, quest: &Quest) -> Submission {
        SubmissionService::create_submission(
            pool,
            CreateSubmissionRequest {
                user_id: user.id,
                quest_id: quest.id,
                text: Some("done".to_string()),
                image_url: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_submission_requires_existing_rows() {
        let pool = memory_pool().await;
        let user = seed_user(&pool, "alice@example.com", "Alice").await;

        let err = SubmissionService::create_submission(
            &pool,
            CreateSubmissionRequest {
                user_id: user.id,
                quest_id: Uuid::new_v4(),
                text: None,
                image_url: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_approve_credits_quest_points_once() {
        let pool = memory_pool().await;
        let user = seed_user(&pool, "alice@example.com", "Alice").await;
        let quest = seed_quest(&pool, 15).await;
        let submission = seed_submission(&pool, &user, &quest).await;

        let approved = SubmissionService::approve_submission(&pool, &submission.id)
            .await
            .unwrap();
        assert_eq!(approved.status, SubmissionStatus::Approved.as_str());

        let week_start = time::week_start_for(time::now_utc());
        let score = ScoreRepository::find_by_user_and_week(&pool, &user.id, week_start)
            .await
            .unwrap()
            .expect("Score row should exist after approval");
        assert_eq!(score.points, 15);

        // A second approval must not double-count
        let err = SubmissionService::approve_submission(&pool, &submission.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let score = ScoreRepository::find_by_user_and_week(&pool, &user.id, week_start)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(score.points, 15);
    }

    #[tokio::test]
    async fn test_approvals_accumulate_in_one_score_row() {
        let pool = memory_pool().await;
        let user = seed_user(&pool, "alice@example.com", "Alice").await;
        let quest = seed_quest(&pool, 10).await;

        let first = seed_submission(&pool, &user, &quest).await;
        let second = seed_submission(&pool, &user, &quest).await;

        SubmissionService::approve_submission(&pool, &first.id).await.unwrap();
        SubmissionService::approve_submission(&pool, &second.id).await.unwrap();

        let week_start = time::week_start_for(time::now_utc());
        let score = ScoreRepository::find_by_user_and_week(&pool, &user.id, week_start)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(score.points, 20);
    }

    #[tokio::test]
    async fn test_reject_is_terminal_and_scores_nothing() {
        let pool = memory_pool().await;
        let user = seed_user(&pool, "bob@example.com", "Bob").await;
        let quest = seed_quest(&pool, 10).await;
        let submission = seed_submission(&pool, &user, &quest).await;

        let rejected = SubmissionService::reject_submission(&pool, &submission.id)
            .await
            .unwrap();
        assert_eq!(rejected.status, SubmissionStatus::Rejected.as_str());

        // A rejected submission cannot be approved afterwards
        let err = SubmissionService::approve_submission(&pool, &submission.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let week_start = time::week_start_for(time::now_utc());
        let score = ScoreRepository::find_by_user_and_week(&pool, &user.id, week_start)
            .await
            .unwrap();
        assert!(score.is_none());
    }

    #[tokio::test]
    async fn test_approve_missing_submission_is_not_found() {
        let pool = memory_pool().await;

        let err = SubmissionService::approve_submission(&pool, &Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
