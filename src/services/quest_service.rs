//! Quest service

use sqlx::SqlitePool;

use crate::{
    constants::DEFAULT_QUEST_POINTS,
    db::repositories::QuestRepository,
    error::{AppError, AppResult},
    handlers::quests::request::CreateQuestRequest,
    models::Quest,
    utils::time,
};

/// Quest service for business logic
pub struct QuestService;

impl QuestService {
    /// List all quests, newest start date first
    pub async fn list_quests(pool: &SqlitePool) -> AppResult<Vec<Quest>> {
        QuestRepository::list_all(pool).await
    }

    /// Create a new quest
    pub async fn create_quest(pool: &SqlitePool, payload: CreateQuestRequest) -> AppResult<Quest> {
        let starts_on = time::parse_date(&payload.starts_on).ok_or_else(|| {
            AppError::Validation("starts_on must be an ISO date (YYYY-MM-DD)".to_string())
        })?;
        let ends_on = time::parse_date(&payload.ends_on).ok_or_else(|| {
            AppError::Validation("ends_on must be an ISO date (YYYY-MM-DD)".to_string())
        })?;

        if ends_on < starts_on {
            return Err(AppError::Validation(
                "ends_on must not be before starts_on".to_string(),
            ));
        }

        QuestRepository::create(
            pool,
            &payload.title,
            payload.description.as_deref().unwrap_or(""),
            starts_on,
            ends_on,
            payload.points.unwrap_or(DEFAULT_QUEST_POINTS),
        )
        .await
    }
}
