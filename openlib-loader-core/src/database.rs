use {
    std::str::FromStr,
    async_trait::async_trait,
    anyhow::{anyhow, Result},
    sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    crate::{
        config::DatabaseConfig,
        entity::{AuthorEntity, WorkEntity},
        store::CatalogStore,
    },
};

pub struct Database {
    pool: sqlx::postgres::PgPool,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let connection_string = config.connection_string()
            .ok_or(anyhow!("database connection string is not set"))?;
        let mut options = PgConnectOptions::from_str(connection_string)?;
        if let Some(ca_cert) = config.ca_cert() {
            options = options
                .ssl_mode(PgSslMode::VerifyFull)
                .ssl_root_cert(ca_cert);
        }

        Ok(Self {
            pool: PgPoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?,
        })
    }
}

#[async_trait]
impl CatalogStore for Database {
    async fn save_author(&self, author: &AuthorEntity) -> Result<()> {
        sqlx::query("insert into authors (id, name, personal_name) values ($1, $2, $3) on conflict (id) do update set name = excluded.name, personal_name = excluded.personal_name")
            .bind(author.id())
            .bind(author.name())
            .bind(author.personal_name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn author_by_id(&self, id: &str) -> Result<Option<AuthorEntity>> {
        Ok(sqlx::query_as("select id, name, personal_name from authors where id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn save_work(&self, work: &WorkEntity) -> Result<()> {
        sqlx::query("insert into works (id, title, description, publish_date, cover_ids, author_ids, author_names) values ($1, $2, $3, $4, $5, $6, $7) on conflict (id) do update set title = excluded.title, description = excluded.description, publish_date = excluded.publish_date, cover_ids = excluded.cover_ids, author_ids = excluded.author_ids, author_names = excluded.author_names")
            .bind(work.id())
            .bind(work.title())
            .bind(work.description())
            .bind(work.publish_date())
            .bind(work.cover_ids())
            .bind(work.author_ids())
            .bind(work.author_names())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn work_by_id(&self, id: &str) -> Result<Option<WorkEntity>> {
        Ok(sqlx::query_as("select id, title, description, publish_date, cover_ids, author_ids, author_names from works where id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }
}
