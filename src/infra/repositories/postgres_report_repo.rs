use crate::domain::{models::report::Report, ports::ReportRepository};
use crate::error::ApiError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresReportRepo {
    pool: PgPool,
}

impl PostgresReportRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepo {
    async fn create(&self, report: &Report) -> Result<Report, ApiError> {
        sqlx::query_as::<_, Report>(
            r#"INSERT INTO reports (id, reporter_id, title, description, created_at)
               VALUES ($1, $2, $3, $4, $5) RETURNING *"#,
        )
            .bind(&report.id)
            .bind(&report.reporter_id)
            .bind(&report.title)
            .bind(&report.description)
            .bind(report.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(ApiError::Database)
    }

    async fn list(&self) -> Result<Vec<Report>, ApiError> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(ApiError::Database)
    }
}
