//! Quest handler implementations

use axum::{extract::State, http::StatusCode, Json};

use crate::{error::AppResult, extract::ValidatedJson, services::QuestService, state::AppState};

use super::{
    request::CreateQuestRequest,
    response::{CreateQuestResponse, QuestResponse},
};

/// List all quests, newest start date first
pub async fn list_quests(State(state): State<AppState>) -> AppResult<Json<Vec<QuestResponse>>> {
    let quests = QuestService::list_quests(state.db()).await?;

    Ok(Json(quests.into_iter().map(QuestResponse::from).collect()))
}

/// Create a new quest
pub async fn create_quest(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateQuestRequest>,
) -> AppResult<(StatusCode, Json<CreateQuestResponse>)> {
    let quest = QuestService::create_quest(state.db(), payload).await?;

    Ok((StatusCode::CREATED, Json(CreateQuestResponse { id: quest.id })))
}
