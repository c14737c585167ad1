use crate::domain::{
    models::private_event::{Invitation, InvitationRecord, InviteStatus, PrivateEvent},
    ports::PrivateEventRepository,
};
use crate::error::ApiError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresPrivateEventRepo {
    pool: PgPool,
}

impl PostgresPrivateEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrivateEventRepository for PostgresPrivateEventRepo {
    async fn create(&self, event: &PrivateEvent) -> Result<PrivateEvent, ApiError> {
        sqlx::query_as::<_, PrivateEvent>(
            r#"INSERT INTO private_events (
                id, creator_id, init_date, end_date, country, city, street,
                number, postal_code, cost, description, photos_json, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *"#,
        )
            .bind(&event.id)
            .bind(&event.creator_id)
            .bind(event.init_date)
            .bind(event.end_date)
            .bind(&event.country)
            .bind(&event.city)
            .bind(&event.street)
            .bind(&event.number)
            .bind(&event.postal_code)
            .bind(event.cost)
            .bind(&event.description)
            .bind(&event.photos_json)
            .bind(event.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PrivateEvent>, ApiError> {
        sqlx::query_as::<_, PrivateEvent>(
            "SELECT * FROM private_events WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn list_created_by(&self, participant_id: &str) -> Result<Vec<PrivateEvent>, ApiError> {
        sqlx::query_as::<_, PrivateEvent>(
            "SELECT * FROM private_events WHERE creator_id = $1 ORDER BY init_date",
        )
            .bind(participant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn list_invited(&self, participant_id: &str) -> Result<Vec<PrivateEvent>, ApiError> {
        sqlx::query_as::<_, PrivateEvent>(
            r#"SELECT e.* FROM private_events e
               JOIN invitations i ON i.event_id = e.id
               WHERE i.participant_id = $1 AND e.creator_id <> $1
               ORDER BY e.init_date"#,
        )
            .bind(participant_id)
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn update(&self, event: &PrivateEvent) -> Result<PrivateEvent, ApiError> {
        sqlx::query_as::<_, PrivateEvent>(
            r#"UPDATE private_events SET
                init_date=$1, end_date=$2, country=$3, city=$4, street=$5,
                number=$6, postal_code=$7, cost=$8, description=$9
               WHERE id=$10 RETURNING *"#,
        )
            .bind(event.init_date)
            .bind(event.end_date)
            .bind(&event.country)
            .bind(&event.city)
            .bind(&event.street)
            .bind(&event.number)
            .bind(&event.postal_code)
            .bind(event.cost)
            .bind(&event.description)
            .bind(&event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await.map_err(ApiError::Database)?;

        sqlx::query("DELETE FROM invitations WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(ApiError::Database)?;

        let result = sqlx::query("DELETE FROM private_events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(ApiError::Database)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Private event not found".into()));
        }

        tx.commit().await.map_err(ApiError::Database)?;
        Ok(())
    }

    async fn add_invitees(&self, event_id: &str, participant_ids: &[String]) -> Result<Vec<String>, ApiError> {
        let mut tx = self.pool.begin().await.map_err(ApiError::Database)?;
        let mut added = Vec::new();

        for participant_id in participant_ids {
            let result = sqlx::query(
                r#"INSERT INTO invitations (event_id, participant_id, status, invited_at)
                   VALUES ($1, $2, 'PENDING', $3)
                   ON CONFLICT (event_id, participant_id) DO NOTHING"#,
            )
                .bind(event_id)
                .bind(participant_id)
                .bind(Utc::now())
                .execute(&mut *tx)
                .await
                .map_err(ApiError::Database)?;

            if result.rows_affected() > 0 {
                added.push(participant_id.clone());
            }
        }

        tx.commit().await.map_err(ApiError::Database)?;
        Ok(added)
    }

    async fn find_invitation(&self, event_id: &str, participant_id: &str) -> Result<Option<Invitation>, ApiError> {
        sqlx::query_as::<_, InvitationRecord>(
            "SELECT * FROM invitations WHERE event_id = $1 AND participant_id = $2",
        )
            .bind(event_id)
            .bind(participant_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)?
            .map(Invitation::try_from)
            .transpose()
    }

    async fn list_invitations(&self, event_id: &str) -> Result<Vec<Invitation>, ApiError> {
        sqlx::query_as::<_, InvitationRecord>(
            "SELECT * FROM invitations WHERE event_id = $1 ORDER BY invited_at, participant_id",
        )
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::Database)?
            .into_iter()
            .map(Invitation::try_from)
            .collect()
    }

    async fn set_invitation_status(&self, event_id: &str, participant_id: &str, status: InviteStatus) -> Result<bool, ApiError> {
        let result = sqlx::query(
            "UPDATE invitations SET status = $1 WHERE event_id = $2 AND participant_id = $3 AND status = 'PENDING'",
        )
            .bind(status.as_str())
            .bind(event_id)
            .bind(participant_id)
            .execute(&self.pool)
            .await
            .map_err(ApiError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
