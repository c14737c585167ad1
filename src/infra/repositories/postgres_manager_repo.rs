use crate::domain::{models::manager::Manager, ports::ManagerRepository};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresManagerRepo {
    pool: PgPool,
}

impl PostgresManagerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManagerRepository for PostgresManagerRepo {
    async fn create(&self, manager: &Manager) -> Result<Manager, ApiError> {
        sqlx::query_as::<_, Manager>(
            r#"INSERT INTO managers (
                id, name, email, email_verified, password_hash, country, city,
                street, number, postal_code, local_type, photos_json,
                approved, decided_at, decided_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *"#,
        )
            .bind(&manager.id)
            .bind(&manager.name)
            .bind(&manager.email)
            .bind(manager.email_verified)
            .bind(&manager.password_hash)
            .bind(&manager.country)
            .bind(&manager.city)
            .bind(&manager.street)
            .bind(&manager.number)
            .bind(&manager.postal_code)
            .bind(&manager.local_type)
            .bind(&manager.photos_json)
            .bind(manager.approved)
            .bind(manager.decided_at)
            .bind(&manager.decided_by)
            .bind(manager.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Manager>, ApiError> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, ApiError> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn list_pending(&self) -> Result<Vec<Manager>, ApiError> {
        sqlx::query_as::<_, Manager>(
            "SELECT * FROM managers WHERE approved IS NULL ORDER BY created_at",
        )
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn update(&self, manager: &Manager) -> Result<Manager, ApiError> {
        sqlx::query_as::<_, Manager>(
            r#"UPDATE managers SET
                name=$1, email_verified=$2, password_hash=$3, country=$4, city=$5,
                street=$6, number=$7, postal_code=$8, local_type=$9, photos_json=$10,
                approved=$11, decided_at=$12, decided_by=$13
               WHERE id=$14 RETURNING *"#,
        )
            .bind(&manager.name)
            .bind(manager.email_verified)
            .bind(&manager.password_hash)
            .bind(&manager.country)
            .bind(&manager.city)
            .bind(&manager.street)
            .bind(&manager.number)
            .bind(&manager.postal_code)
            .bind(&manager.local_type)
            .bind(&manager.photos_json)
            .bind(manager.approved)
            .bind(manager.decided_at)
            .bind(&manager.decided_by)
            .bind(&manager.id)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)
    }
}
