use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Venue-hosted event, owned by an approved manager and visible to every
/// authenticated caller.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PublicEvent {
    pub id: String,
    pub manager_id: String,
    pub init_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub country: String,
    pub city: String,
    pub street: String,
    pub number: String,
    pub postal_code: String,
    pub cost: f64,
    pub description: String,
    pub photos_json: String,
    pub created_at: DateTime<Utc>,
}

impl PublicEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        manager_id: String,
        init_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        country: String,
        city: String,
        street: String,
        number: String,
        postal_code: String,
        cost: f64,
        description: String,
        photos: &[String],
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            manager_id,
            init_date,
            end_date,
            country,
            city,
            street,
            number,
            postal_code,
            cost,
            description,
            photos_json: serde_json::to_string(photos).unwrap_or_else(|_| "[]".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn photos(&self) -> Vec<String> {
        serde_json::from_str(&self.photos_json).unwrap_or_default()
    }
}
