use crate::domain::{models::public_event::PublicEvent, ports::PublicEventRepository};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePublicEventRepo {
    pool: SqlitePool,
}

impl SqlitePublicEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublicEventRepository for SqlitePublicEventRepo {
    async fn create(&self, event: &PublicEvent) -> Result<PublicEvent, ApiError> {
        sqlx::query_as::<_, PublicEvent>(
            r#"INSERT INTO public_events (
                id, manager_id, init_date, end_date, country, city, street,
                number, postal_code, cost, description, photos_json, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, PublicEvent>("SELECT * FROM public_events WHERE id = ?")
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
                init_date=?, end_date=?, country=?, city=?, street=?,
                number=?, postal_code=?, cost=?, description=?
               WHERE id=? RETURNING *"#,
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
        let result = sqlx::query("DELETE FROM public_events WHERE id = ?")
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
