use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    domain::{
        book::mapping::book_field_registry,
        common::{BookshelfConfig, services::Service},
        sieve::services::SieveProcessor,
    },
    infrastructure::{
        book::PostgresBookRepository,
        db::{
            postgres::{Postgres, PostgresConfig},
            schema::{create_schema, seed_catalog},
        },
        health::PostgresHealthCheckRepository,
    },
};

pub type BookshelfService = Service<PostgresBookRepository, PostgresHealthCheckRepository>;

pub async fn create_service(config: BookshelfConfig) -> Result<BookshelfService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    create_service_with_connection(postgres.get_db(), config).await
}

/// Wires the service on an existing connection, creating the schema first and
/// seeding the catalog when enabled.
pub async fn create_service_with_connection(
    db: DatabaseConnection,
    config: BookshelfConfig,
) -> Result<BookshelfService, anyhow::Error> {
    create_schema(&db).await?;

    if config.database.seed {
        let inserted = seed_catalog(&db).await?;
        info!(inserted, "Catalog seed finished");
    }

    let registry = book_field_registry()?;

    Ok(Service::new(
        PostgresBookRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        SieveProcessor::new(registry, config.sieve),
    ))
}
