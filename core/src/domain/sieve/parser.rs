//! Turns the raw `filters` and `sorts` query strings into typed clauses
//! checked against the field mapping registry.

use super::{
    entities::errors::{SieveError, SieveOperation},
    mapping::{FieldMappingRegistry, SieveEntity},
    value_objects::{FieldValue, FilterClause, FilterOperator, SortClause, SortDirection},
};

/// Operator tokens, longest first so that `!@=` wins over `!=` and `>=`
/// over `>` at the same position.
const OPERATORS: &[(&str, FilterOperator)] = &[
    ("!_-=", FilterOperator::NotEndsWith),
    ("!@=", FilterOperator::NotContains),
    ("!_=", FilterOperator::NotStartsWith),
    ("_-=", FilterOperator::EndsWith),
    ("==", FilterOperator::Equals),
    ("!=", FilterOperator::NotEquals),
    (">=", FilterOperator::GreaterOrEqual),
    ("<=", FilterOperator::LessOrEqual),
    ("@=", FilterOperator::Contains),
    ("_=", FilterOperator::StartsWith),
    (">", FilterOperator::GreaterThan),
    ("<", FilterOperator::LessThan),
];

const CASE_INSENSITIVE_SUFFIX: char = '*';

pub fn parse_filters<E: SieveEntity>(
    registry: &FieldMappingRegistry,
    raw: Option<&str>,
) -> Result<Vec<FilterClause>, SieveError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    split_unescaped(raw)
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .map(|token| parse_filter_clause::<E>(registry, &token))
        .collect()
}

fn parse_filter_clause<E: SieveEntity>(
    registry: &FieldMappingRegistry,
    token: &str,
) -> Result<FilterClause, SieveError> {
    let (start, symbol, operator) =
        find_operator(token).ok_or_else(|| SieveError::InvalidFilterSyntax(token.to_string()))?;

    let field = token[..start].trim();
    if field.is_empty() {
        return Err(SieveError::InvalidFilterSyntax(token.to_string()));
    }

    let mut value = &token[start + symbol.len()..];
    let case_insensitive = value.starts_with(CASE_INSENSITIVE_SUFFIX);
    if case_insensitive {
        value = &value[CASE_INSENSITIVE_SUFFIX.len_utf8()..];
    }

    let mapping = registry
        .resolve::<E>(field)
        .filter(|mapping| mapping.can_filter)
        .ok_or_else(|| SieveError::UnknownField {
            field: field.to_string(),
            operation: SieveOperation::Filter,
        })?;

    let value = if operator.is_substring() {
        FieldValue::Text(value.to_string())
    } else {
        mapping
            .kind
            .coerce(value)
            .ok_or_else(|| SieveError::ValueCoercion {
                field: mapping.public_name.clone(),
                value: value.to_string(),
                expected: mapping.kind.name(),
            })?
    };

    Ok(FilterClause {
        field: mapping.public_name.clone(),
        path: mapping.path.clone(),
        kind: mapping.kind,
        operator,
        value,
        case_insensitive,
    })
}

fn find_operator(token: &str) -> Option<(usize, &'static str, FilterOperator)> {
    token.char_indices().find_map(|(index, _)| {
        let rest = &token[index..];
        OPERATORS
            .iter()
            .find(|(symbol, _)| rest.starts_with(symbol))
            .map(|(symbol, operator)| (index, *symbol, *operator))
    })
}

/// Splits on commas not preceded by a backslash. `\,` yields a literal comma
/// and `\\` a literal backslash; any other backslash is kept as written.
fn split_unescaped(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.peek() {
                Some(&next) if next == ',' || next == '\\' => {
                    current.push(next);
                    chars.next();
                }
                _ => current.push(c),
            },
            ',' => tokens.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    tokens.push(current);

    tokens
}

pub fn parse_sorts<E: SieveEntity>(
    registry: &FieldMappingRegistry,
    raw: Option<&str>,
) -> Result<Vec<SortClause>, SieveError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut clauses: Vec<SortClause> = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (direction, field) = match token.strip_prefix('-') {
            Some(field) => (SortDirection::Desc, field.trim()),
            None => (SortDirection::Asc, token),
        };

        let mapping = registry
            .resolve::<E>(field)
            .filter(|mapping| mapping.can_sort)
            .ok_or_else(|| SieveError::UnknownField {
                field: field.to_string(),
                operation: SieveOperation::Sort,
            })?;

        if clauses.iter().any(|c| c.field == mapping.public_name) {
            continue;
        }

        clauses.push(SortClause {
            field: mapping.public_name.clone(),
            path: mapping.path.clone(),
            direction,
            position: clauses.len(),
        });
    }

    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sieve::{
        mapping::{AccessPath, Capabilities},
        value_objects::FieldKind,
    };
    use rust_decimal_macros::dec;

    struct Item;

    impl SieveEntity for Item {
        const ENTITY: &'static str = "item";
    }

    fn registry() -> FieldMappingRegistry {
        FieldMappingRegistry::builder()
            .register::<Item>(
                "title",
                AccessPath::property("title"),
                FieldKind::Text,
                Capabilities::FILTER_AND_SORT,
            )
            .register::<Item>(
                "price",
                AccessPath::property("price"),
                FieldKind::Decimal,
                Capabilities::FILTER_AND_SORT,
            )
            .register::<Item>(
                "isAvailable",
                AccessPath::property("is_available"),
                FieldKind::Boolean,
                Capabilities::FILTER,
            )
            .register::<Item>(
                "publisher.name",
                AccessPath::related("publisher", "name"),
                FieldKind::Text,
                Capabilities::FILTER_AND_SORT,
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_absent_or_empty_input_yields_no_clauses() {
        let registry = registry();
        assert!(parse_filters::<Item>(&registry, None).unwrap().is_empty());
        assert!(parse_filters::<Item>(&registry, Some("")).unwrap().is_empty());
        assert!(parse_sorts::<Item>(&registry, Some(" , ")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_multiple_filters() {
        let clauses =
            parse_filters::<Item>(&registry(), Some("price>10,title@=Great,")).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].field, "price");
        assert_eq!(clauses[0].operator, FilterOperator::GreaterThan);
        assert_eq!(clauses[0].value, FieldValue::Decimal(dec!(10)));
        assert_eq!(clauses[1].operator, FilterOperator::Contains);
        assert_eq!(clauses[1].value, FieldValue::Text("Great".to_string()));
    }

    #[test]
    fn test_longest_operator_wins() {
        let registry = registry();
        let cases = [
            ("price>=10", FilterOperator::GreaterOrEqual),
            ("price<=10", FilterOperator::LessOrEqual),
            ("title!@=a", FilterOperator::NotContains),
            ("title!_=a", FilterOperator::NotStartsWith),
            ("title!_-=a", FilterOperator::NotEndsWith),
            ("title_-=a", FilterOperator::EndsWith),
            ("title_=a", FilterOperator::StartsWith),
            ("title!=a", FilterOperator::NotEquals),
        ];

        for (raw, expected) in cases {
            let clauses = parse_filters::<Item>(&registry, Some(raw)).unwrap();
            assert_eq!(clauses[0].operator, expected, "{raw}");
        }
    }

    #[test]
    fn test_first_operator_splits_field_from_value() {
        let clauses = parse_filters::<Item>(&registry(), Some("title==a==b")).unwrap();
        assert_eq!(clauses[0].value, FieldValue::Text("a==b".to_string()));
    }

    #[test]
    fn test_escaped_comma_stays_in_value() {
        let clauses =
            parse_filters::<Item>(&registry(), Some(r"title==Hello\, World,price<20")).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0].value,
            FieldValue::Text("Hello, World".to_string())
        );
    }

    #[test]
    fn test_case_insensitive_suffix() {
        let clauses = parse_filters::<Item>(&registry(), Some("title@=*great")).unwrap();
        assert!(clauses[0].case_insensitive);
        assert_eq!(clauses[0].value, FieldValue::Text("great".to_string()));
    }

    #[test]
    fn test_field_names_are_trimmed_and_case_insensitive() {
        let clauses = parse_filters::<Item>(&registry(), Some(" ISAVAILABLE ==false")).unwrap();
        assert_eq!(clauses[0].field, "isAvailable");
        assert_eq!(clauses[0].value, FieldValue::Boolean(false));
    }

    #[test]
    fn test_nested_field() {
        let clauses =
            parse_filters::<Item>(&registry(), Some("publisher.name==Penguin")).unwrap();
        assert_eq!(clauses[0].path.relation(), Some("publisher"));
    }

    #[test]
    fn test_unknown_filter_field() {
        let err = parse_filters::<Item>(&registry(), Some("isbn==123")).unwrap_err();
        assert_eq!(
            err,
            SieveError::UnknownField {
                field: "isbn".to_string(),
                operation: SieveOperation::Filter
            }
        );
    }

    #[test]
    fn test_missing_operator_or_field() {
        let registry = registry();
        assert!(matches!(
            parse_filters::<Item>(&registry, Some("title")),
            Err(SieveError::InvalidFilterSyntax(_))
        ));
        assert!(matches!(
            parse_filters::<Item>(&registry, Some("==Fiction")),
            Err(SieveError::InvalidFilterSyntax(_))
        ));
    }

    #[test]
    fn test_value_that_does_not_coerce() {
        let err = parse_filters::<Item>(&registry(), Some("price>cheap")).unwrap_err();
        assert_eq!(
            err,
            SieveError::ValueCoercion {
                field: "price".to_string(),
                value: "cheap".to_string(),
                expected: "decimal"
            }
        );
    }

    #[test]
    fn test_substring_on_numeric_field_keeps_text() {
        let clauses = parse_filters::<Item>(&registry(), Some("price@=.99")).unwrap();
        assert_eq!(clauses[0].kind, FieldKind::Decimal);
        assert_eq!(clauses[0].value, FieldValue::Text(".99".to_string()));
    }

    #[test]
    fn test_parse_sorts() {
        let clauses = parse_sorts::<Item>(&registry(), Some("-price, title")).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].field, "price");
        assert!(clauses[0].is_descending());
        assert_eq!(clauses[1].field, "title");
        assert_eq!(clauses[1].direction, SortDirection::Asc);
        assert_eq!(clauses[1].position, 1);
    }

    #[test]
    fn test_repeated_sort_field_keeps_first() {
        let clauses = parse_sorts::<Item>(&registry(), Some("price,-Price,title")).unwrap();

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].direction, SortDirection::Asc);
        assert_eq!(clauses[1].field, "title");
        assert_eq!(clauses[1].position, 1);
    }

    #[test]
    fn test_sort_on_filter_only_field() {
        let err = parse_sorts::<Item>(&registry(), Some("isAvailable")).unwrap_err();
        assert_eq!(
            err,
            SieveError::UnknownField {
                field: "isAvailable".to_string(),
                operation: SieveOperation::Sort
            }
        );
    }
}
