use std::str::FromStr;

use sea_orm::sea_query::{Expr, SimpleExpr};

use crate::{
    domain::{book::mapping::PUBLISHER_RELATION, sieve::mapping::AccessPath},
    entity::{books, publishers},
    infrastructure::sieve::ColumnResolver,
};

/// Resolves book access paths against `books` joined with `publishers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookColumns;

impl ColumnResolver for BookColumns {
    fn resolve(&self, path: &AccessPath) -> Option<SimpleExpr> {
        match path.segments() {
            [column] => books::Column::from_str(column)
                .ok()
                .map(|column| Expr::col((books::Entity, column)).into()),
            [relation, column] if *relation == PUBLISHER_RELATION => {
                publishers::Column::from_str(column)
                    .ok()
                    .map(|column| Expr::col((publishers::Entity, column)).into())
            }
            _ => None,
        }
    }

    fn identity(&self) -> SimpleExpr {
        Expr::col((books::Entity, books::Column::Id)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{book::mapping::book_field_registry, book::entities::Book};

    #[test]
    fn test_every_registered_book_field_resolves() {
        let registry = book_field_registry().unwrap();

        for mapping in registry.mappings::<Book>() {
            assert!(
                BookColumns.resolve(&mapping.path).is_some(),
                "{} is not mapped to a column",
                mapping.public_name
            );
        }
    }

    #[test]
    fn test_unknown_paths() {
        assert!(BookColumns.resolve(&AccessPath::property("missing")).is_none());
        assert!(
            BookColumns
                .resolve(&AccessPath::related("author", "name"))
                .is_none()
        );
    }
}
