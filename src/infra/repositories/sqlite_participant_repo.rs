use crate::domain::{
    models::participant::{Participant, ParticipantRecord},
    ports::ParticipantRepository,
};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteParticipantRepo {
    pool: SqlitePool,
}

impl SqliteParticipantRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepo {
    async fn create(&self, participant: &Participant) -> Result<Participant, ApiError> {
        let record = sqlx::query_as::<_, ParticipantRecord>(
            r#"INSERT INTO participants (
                id, name, surname, username, email, email_verified,
                birth_date, password_hash, external_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&participant.id)
            .bind(&participant.name)
            .bind(&participant.surname)
            .bind(&participant.username)
            .bind(&participant.email)
            .bind(participant.email_verified)
            .bind(participant.birth_date)
            .bind(participant.credential.password_hash())
            .bind(participant.credential.provider_id())
            .bind(participant.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)?;

        record.try_into()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Participant>, ApiError> {
        sqlx::query_as::<_, ParticipantRecord>(
            "SELECT * FROM participants WHERE id = ?",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)?
            .map(Participant::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Participant>, ApiError> {
        sqlx::query_as::<_, ParticipantRecord>(
            "SELECT * FROM participants WHERE username = ?",
        )
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)?
            .map(Participant::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Participant>, ApiError> {
        sqlx::query_as::<_, ParticipantRecord>(
            "SELECT * FROM participants WHERE email = ?",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)?
            .map(Participant::try_from)
            .transpose()
    }
}
