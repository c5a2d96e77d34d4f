//! Quest response DTOs

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::models::Quest;

/// Quest in list responses
#[derive(Debug, Serialize)]
pub struct QuestResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub points: i64,
}

impl From<Quest> for QuestResponse {
    fn from(quest: Quest) -> Self {
        Self {
            id: quest.id,
            title: quest.title,
            description: quest.description,
            starts_on: quest.starts_on,
            ends_on: quest.ends_on,
            points: quest.points,
        }
    }
}

/// Quest creation response
#[derive(Debug, Serialize)]
pub struct CreateQuestResponse {
    pub id: Uuid,
}
