use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct PrivateEvent {
    pub id: String,
    pub creator_id: String,
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

impl PrivateEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        creator_id: String,
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
            creator_id,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Denied,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Pending => "PENDING",
            InviteStatus::Accepted => "ACCEPTED",
            InviteStatus::Denied => "DENIED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(InviteStatus::Pending),
            "ACCEPTED" => Some(InviteStatus::Accepted),
            "DENIED" => Some(InviteStatus::Denied),
            _ => None,
        }
    }
}

/// One entry of an event's invitee list. No row exists before an invite is
/// issued; `(event_id, participant_id)` is unique.
#[derive(Debug, Clone)]
pub struct Invitation {
    pub event_id: String,
    pub participant_id: String,
    pub status: InviteStatus,
    pub invited_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct InvitationRecord {
    pub event_id: String,
    pub participant_id: String,
    pub status: String,
    pub invited_at: DateTime<Utc>,
}

impl TryFrom<InvitationRecord> for Invitation {
    type Error = ApiError;

    fn try_from(record: InvitationRecord) -> Result<Self, Self::Error> {
        let status = InviteStatus::parse(&record.status).ok_or_else(|| {
            ApiError::Internal(format!(
                "invitation ({}, {}) has unknown status '{}'",
                record.event_id, record.participant_id, record.status
            ))
        })?;

        Ok(Invitation {
            event_id: record.event_id,
            participant_id: record.participant_id,
            status,
            invited_at: record.invited_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        for status in [InviteStatus::Pending, InviteStatus::Accepted, InviteStatus::Denied] {
            assert_eq!(InviteStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(InviteStatus::parse("MAYBE"), None);
    }

    #[test]
    fn photos_default_to_empty_on_bad_json() {
        let mut event = PrivateEvent::new(
            "p1".into(),
            Utc::now(),
            Utc::now(),
            String::new(), String::new(), String::new(), String::new(), String::new(),
            0.0,
            "desc".into(),
            &["a.jpg".to_string()],
        );
        assert_eq!(event.photos(), vec!["a.jpg".to_string()]);
        event.photos_json = "not json".into();
        assert!(event.photos().is_empty());
    }
}
