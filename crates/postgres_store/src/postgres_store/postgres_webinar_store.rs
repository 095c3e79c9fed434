use std::time::Duration;

use command_use_case::port::webinar_repository;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use write_model::{aggregate::Webinar, value_object::WebinarId};

use crate::{converter, schema::WebinarRow};

const SELECT_WEBINAR: &str = r#"
SELECT id, organizer_id, title, start_date, end_date, seats
FROM webinars
WHERE id = $1
"#;

#[derive(Clone)]
pub struct PostgresWebinarStore {
    pool: PgPool,
}

impl PostgresWebinarStore {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("database migrations completed");
        Ok(())
    }

    async fn fetch_row(&self, id: &WebinarId) -> Result<Option<WebinarRow>, sqlx::Error> {
        sqlx::query_as::<_, WebinarRow>(SELECT_WEBINAR)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
    }
}

#[async_trait::async_trait]
impl command_use_case::port::WebinarRepository for PostgresWebinarStore {
    #[tracing::instrument(level = tracing::Level::DEBUG, err(Debug), skip(self))]
    async fn create(&self, webinar: &Webinar) -> Result<(), webinar_repository::Error> {
        let row = converter::row_from_webinar(webinar);
        sqlx::query(
            r#"
INSERT INTO webinars (id, organizer_id, title, start_date, end_date, seats)
VALUES ($1, $2, $3, $4, $5, $6)
"#,
        )
        .bind(row.id)
        .bind(row.organizer_id)
        .bind(row.title)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.seats)
        .execute(&self.pool)
        .await
        .map_err(webinar_repository::Error::new)?;
        Ok(())
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, err(Debug), skip(self))]
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, webinar_repository::Error> {
        self.fetch_row(id)
            .await
            .map_err(webinar_repository::Error::new)?
            .map(converter::webinar_from_row)
            .transpose()
            .map_err(webinar_repository::Error::from)
    }

    #[tracing::instrument(level = tracing::Level::DEBUG, err(Debug), skip(self))]
    async fn update(&self, webinar: &Webinar) -> Result<(), webinar_repository::Error> {
        let row = converter::row_from_webinar(webinar);
        let result = sqlx::query(
            r#"
UPDATE webinars
SET organizer_id = $2, title = $3, start_date = $4, end_date = $5, seats = $6
WHERE id = $1
"#,
        )
        .bind(row.id)
        .bind(row.organizer_id)
        .bind(row.title)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.seats)
        .execute(&self.pool)
        .await
        .map_err(webinar_repository::Error::new)?;
        if result.rows_affected() == 0 {
            return Err(webinar_repository::Error::new(format!(
                "webinar {} not found",
                webinar.id()
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl query_use_case::port::WebinarReader for PostgresWebinarStore {
    async fn get(
        &self,
        id: &WebinarId,
    ) -> Result<Option<query_use_case::port::WebinarQueryData>, Box<dyn std::error::Error + Send + Sync>>
    {
        self.fetch_row(id)
            .await?
            .map(converter::query_data_from_row)
            .transpose()
    }
}
