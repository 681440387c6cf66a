use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Schema,
    sea_query::TableCreateStatement,
};
use tracing::info;

use crate::entity::{books, publishers};

struct SeedBook {
    id: i32,
    title: &'static str,
    author: &'static str,
    published: (i32, u32, u32),
    price_cents: i64,
    genre: &'static str,
    is_available: bool,
    page_count: i32,
    isbn: &'static str,
    publisher_id: i32,
}

const CATALOG: [SeedBook; 5] = [
    SeedBook {
        id: 1,
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        published: (1925, 4, 10),
        price_cents: 1299,
        genre: "Fiction",
        is_available: true,
        page_count: 180,
        isbn: "978-0743273565",
        publisher_id: 1,
    },
    SeedBook {
        id: 2,
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        published: (1960, 7, 11),
        price_cents: 1499,
        genre: "Fiction",
        is_available: true,
        page_count: 281,
        isbn: "978-0061120084",
        publisher_id: 2,
    },
    SeedBook {
        id: 3,
        title: "1984",
        author: "George Orwell",
        published: (1949, 6, 8),
        price_cents: 1199,
        genre: "Science Fiction",
        is_available: false,
        page_count: 328,
        isbn: "978-0451524935",
        publisher_id: 3,
    },
    SeedBook {
        id: 4,
        title: "The Hobbit",
        author: "J.R.R. Tolkien",
        published: (1937, 9, 21),
        price_cents: 1599,
        genre: "Fantasy",
        is_available: true,
        page_count: 310,
        isbn: "978-0547928227",
        publisher_id: 1,
    },
    SeedBook {
        id: 5,
        title: "Pride and Prejudice",
        author: "Jane Austen",
        published: (1813, 1, 28),
        price_cents: 999,
        genre: "Romance",
        is_available: true,
        page_count: 432,
        isbn: "978-0141439518",
        publisher_id: 2,
    },
];

/// Creates the catalog tables when they do not exist yet.
pub async fn create_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements: [TableCreateStatement; 2] = [
        schema
            .create_table_from_entity(publishers::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(books::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for statement in &statements {
        db.execute(backend.build(statement)).await?;
    }

    Ok(())
}

/// Inserts the demo catalog when the books table is empty. Returns the number
/// of books inserted.
pub async fn seed_catalog<C: ConnectionTrait>(db: &C) -> Result<u64, DbErr> {
    if books::Entity::find().count(db).await? > 0 {
        return Ok(0);
    }

    let publisher_models = [
        (1, "Penguin Random House", "USA"),
        (2, "HarperCollins", "UK"),
        (3, "Simon & Schuster", "USA"),
    ]
    .map(|(id, name, country)| publishers::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        country: Set(country.to_string()),
    });

    publishers::Entity::insert_many(publisher_models)
        .exec(db)
        .await?;

    let mut book_models = Vec::with_capacity(CATALOG.len());
    for seed in &CATALOG {
        let (year, month, day) = seed.published;
        book_models.push(books::ActiveModel {
            id: Set(seed.id),
            title: Set(seed.title.to_string()),
            author: Set(seed.author.to_string()),
            published_date: Set(midnight(year, month, day)?),
            price: Set(Decimal::new(seed.price_cents, 2)),
            genre: Set(seed.genre.to_string()),
            is_available: Set(seed.is_available),
            page_count: Set(seed.page_count),
            isbn: Set(seed.isbn.to_string()),
            publisher_id: Set(seed.publisher_id),
        });
    }

    let inserted = book_models.len() as u64;
    books::Entity::insert_many(book_models)
        .exec(db)
        .await?;

    info!(books = inserted, "Seeded book catalog");

    Ok(inserted)
}

fn midnight(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, DbErr> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DbErr::Custom(format!("invalid date {year}-{month}-{day}")))
}
