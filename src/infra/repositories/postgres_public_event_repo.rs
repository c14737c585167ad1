use crate::domain::{models::public_event::PublicEvent, ports::PublicEventRepository};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPublicEventRepo {
    pool: PgPool,
}

impl PostgresPublicEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublicEventRepository for PostgresPublicEventRepo {
    async fn create(&self, event: &PublicEvent) -> Result<PublicEvent, ApiError> {
        sqlx::query_as::<_, PublicEvent>(
            r#"INSERT INTO public_events (
                id, manager_id, init_date, end_date, country, city, street,
                number, postal_code, cost, description, photos_json, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *"#,
        )
            .bind(&event.id)
            .bind(&event.manager_id)
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

    async fn find_by_id(&self, id: &str) -> Result<Option<PublicEvent>, ApiError> {
        sqlx::query_as::<_, PublicEvent>("SELECT * FROM public_events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn list(&self) -> Result<Vec<PublicEvent>, ApiError> {
        sqlx::query_as::<_, PublicEvent>("SELECT * FROM public_events ORDER BY init_date")
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn update(&self, event: &PublicEvent) -> Result<PublicEvent, ApiError> {
        sqlx::query_as::<_, PublicEvent>(
            r#"UPDATE public_events SET
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
        let result = sqlx::query("DELETE FROM public_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(ApiError::Database)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}
