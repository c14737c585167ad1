use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use crate::error::ApiError;

/// Identity path for a participant account. Exactly one of the two exists,
/// mirrored in the database by a CHECK over the nullable column pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Password { hash: String },
    External { provider_id: String },
}

impl Credential {
    pub fn password_hash(&self) -> Option<&str> {
        match self {
            Credential::Password { hash } => Some(hash),
            Credential::External { .. } => None,
        }
    }

    pub fn provider_id(&self) -> Option<&str> {
        match self {
            Credential::Password { .. } => None,
            Credential::External { provider_id } => Some(provider_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub birth_date: Option<NaiveDate>,
    pub credential: Credential,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(
        name: String,
        surname: String,
        username: String,
        email: String,
        birth_date: Option<NaiveDate>,
        credential: Credential,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            surname,
            username,
            email,
            email_verified: false,
            birth_date,
            credential,
            created_at: Utc::now(),
        }
    }
}

/// Flat row as stored; converted with `TryFrom` so the credential invariant
/// is checked on every read.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ParticipantRecord {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub username: String,
    pub email: String,
    pub email_verified: bool,
    pub birth_date: Option<NaiveDate>,
    pub password_hash: Option<String>,
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ParticipantRecord> for Participant {
    type Error = ApiError;

    fn try_from(record: ParticipantRecord) -> Result<Self, Self::Error> {
        let credential = match (record.password_hash, record.external_id) {
            (Some(hash), None) => Credential::Password { hash },
            (None, Some(provider_id)) => Credential::External { provider_id },
            _ => {
                return Err(ApiError::Internal(format!(
                    "participant {} has an inconsistent credential record",
                    record.id
                )))
            }
        };

        Ok(Participant {
            id: record.id,
            name: record.name,
            surname: record.surname,
            username: record.username,
            email: record.email,
            email_verified: record.email_verified,
            birth_date: record.birth_date,
            credential,
            created_at: record.created_at,
        })
    }
}
