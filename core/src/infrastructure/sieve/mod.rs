//! sea-orm adapter for the sieve stages.
//!
//! Every user supplied value ends up as a bound parameter; column
//! references only ever come from a [`ColumnResolver`].

use sea_orm::{
    Order, QueryFilter, QueryOrder, QuerySelect, Value,
    sea_query::{Alias, BinOper, Func, LikeExpr, SimpleExpr},
};

use crate::domain::sieve::{
    entities::errors::SieveError,
    mapping::AccessPath,
    ports::SieveTarget,
    value_objects::{FieldKind, FieldValue, FilterClause, FilterOperator, SortClause},
};

const LIKE_ESCAPE: char = '\\';

/// Maps access paths of one entity to column expressions of its query.
pub trait ColumnResolver {
    fn resolve(&self, path: &AccessPath) -> Option<SimpleExpr>;

    fn identity(&self) -> SimpleExpr;
}

/// A sea-orm select wrapped so that it can receive the sieve stages.
#[derive(Debug, Clone)]
pub struct SeaOrmSieve<Q, R> {
    query: Q,
    resolver: R,
}

impl<Q, R> SeaOrmSieve<Q, R>
where
    Q: QueryFilter + QueryOrder + QuerySelect,
    R: ColumnResolver,
{
    pub fn new(query: Q, resolver: R) -> Self {
        Self { query, resolver }
    }

    pub fn into_inner(self) -> Q {
        self.query
    }

    fn column(&self, path: &AccessPath) -> Result<SimpleExpr, SieveError> {
        self.resolver
            .resolve(path)
            .ok_or_else(|| SieveError::UnmappedPath(path.to_string()))
    }
}

impl<Q, R> SieveTarget for SeaOrmSieve<Q, R>
where
    Q: QueryFilter + QueryOrder + QuerySelect,
    R: ColumnResolver,
{
    fn filter(self, clause: &FilterClause) -> Result<Self, SieveError> {
        let column = self.column(&clause.path)?;
        let condition = condition(column, clause);

        Ok(Self {
            query: self.query.filter(condition),
            resolver: self.resolver,
        })
    }

    fn sort(self, clause: &SortClause) -> Result<Self, SieveError> {
        let column = self.column(&clause.path)?;
        let order = if clause.is_descending() {
            Order::Desc
        } else {
            Order::Asc
        };

        Ok(Self {
            query: self.query.order_by(column, order),
            resolver: self.resolver,
        })
    }

    fn order_by_identity(self) -> Self {
        let identity = self.resolver.identity();

        Self {
            query: self.query.order_by(identity, Order::Asc),
            resolver: self.resolver,
        }
    }

    fn paginate(self, skip: u64, take: u64) -> Self {
        Self {
            query: self.query.offset(skip).limit(take),
            resolver: self.resolver,
        }
    }
}

fn condition(column: SimpleExpr, clause: &FilterClause) -> SimpleExpr {
    if clause.operator.is_substring() {
        return like_condition(column, clause);
    }

    let fold_case = clause.case_insensitive && clause.kind == FieldKind::Text;
    let column = if fold_case { lower(column) } else { column };
    let value = bound_value(&clause.value, fold_case);

    let operator = match clause.operator {
        FilterOperator::Equals => BinOper::Equal,
        FilterOperator::NotEquals => BinOper::NotEqual,
        FilterOperator::GreaterThan => BinOper::GreaterThan,
        FilterOperator::GreaterOrEqual => BinOper::GreaterThanOrEqual,
        FilterOperator::LessThan => BinOper::SmallerThan,
        _ => BinOper::SmallerThanOrEqual,
    };

    column.binary(operator, value)
}

fn like_condition(column: SimpleExpr, clause: &FilterClause) -> SimpleExpr {
    let text = match clause.kind {
        FieldKind::Text => column,
        _ => column.cast_as(Alias::new("TEXT")),
    };

    let raw = match &clause.value {
        FieldValue::Text(value) => value.clone(),
        other => display(other),
    };

    let (text, raw) = if clause.case_insensitive {
        (lower(text), raw.to_lowercase())
    } else {
        (text, raw)
    };

    let escaped = escape_like(&raw);
    let pattern = match clause.operator {
        FilterOperator::StartsWith | FilterOperator::NotStartsWith => format!("{escaped}%"),
        FilterOperator::EndsWith | FilterOperator::NotEndsWith => format!("%{escaped}"),
        _ => format!("%{escaped}%"),
    };
    let like = LikeExpr::new(pattern).escape(LIKE_ESCAPE);

    if clause.operator.is_negated() {
        text.not_like(like)
    } else {
        text.like(like)
    }
}

fn lower(expr: SimpleExpr) -> SimpleExpr {
    Func::lower(expr).into()
}

fn bound_value(value: &FieldValue, fold_case: bool) -> Value {
    match value {
        FieldValue::Text(text) if fold_case => text.to_lowercase().into(),
        FieldValue::Text(text) => text.clone().into(),
        FieldValue::Integer(number) => (*number).into(),
        FieldValue::Decimal(number) => (*number).into(),
        FieldValue::Boolean(flag) => (*flag).into(),
        FieldValue::DateTime(at) => at.naive_utc().into(),
    }
}

fn display(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Integer(number) => number.to_string(),
        FieldValue::Decimal(number) => number.to_string(),
        FieldValue::Boolean(flag) => flag.to_string(),
        FieldValue::DateTime(at) => at.naive_utc().to_string(),
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
