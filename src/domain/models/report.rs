use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Report {
    pub id: String,
    pub reporter_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(reporter_id: String, title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            reporter_id,
            title,
            description,
            created_at: Utc::now(),
        }
    }
}
