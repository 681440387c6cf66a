use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Select, SelectTwo,
};
use tracing::error;

use crate::{
    domain::{
        book::{entities::Book, ports::BookRepository, value_objects::PriceRange},
        common::entities::app_errors::CoreError,
        sieve::{
            services::apply,
            value_objects::{SieveQuery, SieveStages},
        },
    },
    entity::{
        books::{Column, Entity},
        publishers,
    },
    infrastructure::{book::columns::BookColumns, sieve::SeaOrmSieve},
};

#[derive(Debug, Clone)]
pub struct PostgresBookRepository {
    pub db: DatabaseConnection,
}

impl PostgresBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn with_publisher(select: Select<Entity>) -> SelectTwo<Entity, publishers::Entity> {
        select.find_also_related(publishers::Entity)
    }

    async fn fetch(
        &self,
        select: Select<Entity>,
        query: &SieveQuery,
    ) -> Result<Vec<Book>, CoreError> {
        let select = apply(
            SeaOrmSieve::new(Self::with_publisher(select), BookColumns),
            query,
            SieveStages::all(),
        )?
        .into_inner();

        let rows = select.all(&self.db).await.map_err(|e| {
            error!("Failed to fetch books: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(rows.into_iter().map(Book::from).collect())
    }
}

impl BookRepository for PostgresBookRepository {
    async fn fetch_books(&self, query: SieveQuery) -> Result<Vec<Book>, CoreError> {
        self.fetch(Entity::find(), &query).await
    }

    async fn count_books(&self, query: SieveQuery) -> Result<u64, CoreError> {
        let select = apply(
            SeaOrmSieve::new(Self::with_publisher(Entity::find()), BookColumns),
            &query,
            SieveStages::filtering_only(),
        )?
        .into_inner();

        select.count(&self.db).await.map_err(|e| {
            error!("Failed to count books: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn fetch_books_in_price_range(
        &self,
        query: SieveQuery,
        range: PriceRange,
    ) -> Result<Vec<Book>, CoreError> {
        let select = Entity::find()
            .filter(Column::Price.gte(range.min))
            .filter(Column::Price.lte(range.max));

        self.fetch(select, &query).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Book>, CoreError> {
        let row = Self::with_publisher(Entity::find_by_id(id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get book by id: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(row.map(Book::from))
    }
}
