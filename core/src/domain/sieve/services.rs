use std::sync::Arc;

use tracing::debug;

use crate::domain::common::SieveConfig;

use super::{
    entities::errors::SieveError,
    mapping::{FieldMappingRegistry, SieveEntity},
    parser::{parse_filters, parse_sorts},
    ports::SieveTarget,
    value_objects::{SieveModel, SieveQuery, SieveStages},
};

/// Validates sieve requests against the registry.
#[derive(Debug, Clone)]
pub struct SieveProcessor {
    registry: Arc<FieldMappingRegistry>,
    options: SieveConfig,
}

impl SieveProcessor {
    pub fn new(registry: FieldMappingRegistry, options: SieveConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            options,
        }
    }

    /// Parses a request for entity `E`. Missing page is 1, missing page size
    /// falls back to the configured default and is capped by the maximum.
    pub fn parse<E: SieveEntity>(&self, model: &SieveModel) -> Result<SieveQuery, SieveError> {
        let page = model.page.unwrap_or(1);
        let page_size = model
            .page_size
            .unwrap_or(self.options.default_page_size as i64);

        if page < 1 || page_size < 1 {
            return Err(SieveError::InvalidPagination { page, page_size });
        }

        let page_size = match self.options.max_page_size {
            Some(max) => (page_size as u64).min(max),
            None => page_size as u64,
        };

        let filters = parse_filters::<E>(&self.registry, model.filters.as_deref())?;
        let sorts = parse_sorts::<E>(&self.registry, model.sorts.as_deref())?;

        debug!(
            entity = E::ENTITY,
            filters = filters.len(),
            sorts = sorts.len(),
            page,
            page_size,
            "parsed sieve request"
        );

        Ok(SieveQuery {
            filters,
            sorts,
            page: page as u64,
            page_size,
        })
    }
}

/// Runs the enabled stages of `query` against `source`.
///
/// Sorting always ends with the identity order so that pages are stable,
/// and is the only order when the query has no sort keys.
pub fn apply<T: SieveTarget>(
    source: T,
    query: &SieveQuery,
    stages: SieveStages,
) -> Result<T, SieveError> {
    if stages.pagination && (query.page < 1 || query.page_size < 1) {
        return Err(SieveError::InvalidPagination {
            page: query.page as i64,
            page_size: query.page_size as i64,
        });
    }

    let mut target = source;

    if stages.filtering {
        for clause in &query.filters {
            target = target.filter(clause)?;
        }
    }

    if stages.sorting {
        for clause in &query.sorts {
            target = target.sort(clause)?;
        }
        target = target.order_by_identity();
    }

    if stages.pagination {
        target = target.paginate(query.skip(), query.take());
    }

    Ok(target)
}
