use super::{
    entities::errors::SieveError,
    value_objects::{FilterClause, SortClause},
};

/// A lazy storage query that can receive the sieve stages.
///
/// Every method consumes the query and returns the narrowed one; nothing is
/// executed until the owner of the query runs it.
pub trait SieveTarget: Sized {
    fn filter(self, clause: &FilterClause) -> Result<Self, SieveError>;

    fn sort(self, clause: &SortClause) -> Result<Self, SieveError>;

    /// Ascending order on the entity identity, appended after the sort keys.
    fn order_by_identity(self) -> Self;

    fn paginate(self, skip: u64, take: u64) -> Self;
}
