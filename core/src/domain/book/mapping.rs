use crate::domain::{
    book::entities::Book,
    sieve::{
        entities::errors::SieveError,
        mapping::{AccessPath, Capabilities, FieldMappingRegistry, FieldMappingRegistryBuilder},
        value_objects::FieldKind,
    },
};

/// Relation hop from a book to its publisher.
pub const PUBLISHER_RELATION: &str = "publisher";

/// Public sieve names for books. Paths use storage column names; `id`,
/// `isbn` and `publisherId` are not exposed.
pub fn register_book_fields(builder: FieldMappingRegistryBuilder) -> FieldMappingRegistryBuilder {
    builder
        .register::<Book>(
            "title",
            AccessPath::property("title"),
            FieldKind::Text,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "author",
            AccessPath::property("author"),
            FieldKind::Text,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "publishedDate",
            AccessPath::property("published_date"),
            FieldKind::DateTime,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "price",
            AccessPath::property("price"),
            FieldKind::Decimal,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "genre",
            AccessPath::property("genre"),
            FieldKind::Text,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "isAvailable",
            AccessPath::property("is_available"),
            FieldKind::Boolean,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "pageCount",
            AccessPath::property("page_count"),
            FieldKind::Integer,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "publisher.name",
            AccessPath::related(PUBLISHER_RELATION, "name"),
            FieldKind::Text,
            Capabilities::FILTER_AND_SORT,
        )
        .register::<Book>(
            "publisher.country",
            AccessPath::related(PUBLISHER_RELATION, "country"),
            FieldKind::Text,
            Capabilities::FILTER_AND_SORT,
        )
}

pub fn book_field_registry() -> Result<FieldMappingRegistry, SieveError> {
    register_book_fields(FieldMappingRegistry::builder()).build()
}
