//! Quest request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_QUEST_TITLE_LENGTH;

/// Quest creation request
///
/// Dates arrive as ISO strings and are parsed by the service so a
/// malformed date maps to a validation failure rather than a
/// deserialization one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestRequest {
    #[validate(length(min = 1, max = MAX_QUEST_TITLE_LENGTH))]
    pub title: String,

    pub description: Option<String>,

    pub starts_on: String,

    pub ends_on: String,

    pub points: Option<i64>,
}
