use crate::domain::{models::manager::Manager, ports::ManagerRepository};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteManagerRepo {
    pool: SqlitePool,
}

impl SqliteManagerRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManagerRepository for SqliteManagerRepo {
    async fn create(&self, manager: &Manager) -> Result<Manager, ApiError> {
        sqlx::query_as::<_, Manager>(
            r#"INSERT INTO managers (
                id, name, email, email_verified, password_hash, country, city,
                street, number, postal_code, local_type, photos_json,
                approved, decided_at, decided_by, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Manager>, ApiError> {
        sqlx::query_as::<_, Manager>("SELECT * FROM managers WHERE email = ?")
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
                name=?, email_verified=?, password_hash=?, country=?, city=?,
                street=?, number=?, postal_code=?, local_type=?, photos_json=?,
                approved=?, decided_at=?, decided_by=?
               WHERE id=? RETURNING *"#,
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
