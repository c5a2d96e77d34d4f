//! Score model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Weekly score database model
///
/// At most one row exists per (user_id, week_start) pair; the row is
/// created lazily on the first approval in that week.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Score {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub points: i64,
    pub created_at: DateTime<Utc>,
}
