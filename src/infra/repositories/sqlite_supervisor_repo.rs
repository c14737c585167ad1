use crate::domain::{models::supervisor::Supervisor, ports::SupervisorRepository};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSupervisorRepo {
    pool: SqlitePool,
}

impl SqliteSupervisorRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupervisorRepository for SqliteSupervisorRepo {
    async fn create(&self, supervisor: &Supervisor) -> Result<Supervisor, ApiError> {
        sqlx::query_as::<_, Supervisor>(
            r#"INSERT INTO supervisors (id, name, email, password_hash, created_at)
               VALUES (?, ?, ?, ?, ?) RETURNING *"#,
        )
            .bind(&supervisor.id)
            .bind(&supervisor.name)
            .bind(&supervisor.email)
            .bind(&supervisor.password_hash)
            .bind(supervisor.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Supervisor>, ApiError> {
        sqlx::query_as::<_, Supervisor>("SELECT * FROM supervisors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Supervisor>, ApiError> {
        sqlx::query_as::<_, Supervisor>("SELECT * FROM supervisors WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(ApiError::Database)
    }
}
