use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const LOCAL_TYPES: &[&str] = &["BAR", "DISCO", "PUB", "RESTAURANT"];

/// Venue manager account. Created without a credential; a supervisor's
/// approval generates one. `approved` is NULL while the request is pending.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Manager {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_verified: bool,
    pub password_hash: Option<String>,
    pub country: String,
    pub city: String,
    pub street: String,
    pub number: String,
    pub postal_code: String,
    pub local_type: String,
    pub photos_json: String,
    pub approved: Option<bool>,
    pub decided_at: Option<DateTime<Utc>>,
    pub decided_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Manager {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        country: String,
        city: String,
        street: String,
        number: String,
        postal_code: String,
        local_type: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            email_verified: false,
            password_hash: None,
            country,
            city,
            street,
            number,
            postal_code,
            local_type,
            photos_json: "[]".to_string(),
            approved: None,
            decided_at: None,
            decided_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.approved.is_none()
    }
}
