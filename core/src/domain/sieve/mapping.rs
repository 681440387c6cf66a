//! Declares which fields of an entity can be filtered and sorted, under
//! which public name, and how each name reaches the stored value.
//!
//! The registry is assembled once at startup and shared read-only
//! afterwards. Public names are matched case-insensitively.

use std::collections::HashMap;
use std::fmt;

use super::{entities::errors::SieveError, value_objects::FieldKind};

/// Implemented by entity types that can be queried through the sieve.
pub trait SieveEntity {
    /// Tag keying the entity's mappings in the registry.
    const ENTITY: &'static str;
}

/// Property hops from the queried entity to a scalar value.
///
/// Either a single property of the entity itself, or a declared relation
/// followed by one of the related entity's properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessPath(Vec<&'static str>);

impl AccessPath {
    pub fn new(segments: impl IntoIterator<Item = &'static str>) -> Self {
        Self(segments.into_iter().collect())
    }

    pub fn property(name: &'static str) -> Self {
        Self(vec![name])
    }

    pub fn related(relation: &'static str, property: &'static str) -> Self {
        Self(vec![relation, property])
    }

    pub fn segments(&self) -> &[&'static str] {
        &self.0
    }

    /// The relation hop, when the path leaves the root entity.
    pub fn relation(&self) -> Option<&'static str> {
        match self.0.as_slice() {
            [relation, _] => Some(relation),
            _ => None,
        }
    }

    pub fn property_name(&self) -> Option<&'static str> {
        self.0.last().copied()
    }

    fn is_valid(&self) -> bool {
        (1..=2).contains(&self.0.len()) && self.0.iter().all(|s| !s.is_empty())
    }
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub filter: bool,
    pub sort: bool,
}

impl Capabilities {
    pub const FILTER_AND_SORT: Self = Self {
        filter: true,
        sort: true,
    };
    pub const FILTER: Self = Self {
        filter: true,
        sort: false,
    };
    pub const SORT: Self = Self {
        filter: false,
        sort: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub public_name: String,
    pub path: AccessPath,
    pub kind: FieldKind,
    pub can_filter: bool,
    pub can_sort: bool,
}

#[derive(Debug, Default)]
pub struct FieldMappingRegistry {
    entities: HashMap<&'static str, HashMap<String, FieldMapping>>,
}

impl FieldMappingRegistry {
    pub fn builder() -> FieldMappingRegistryBuilder {
        FieldMappingRegistryBuilder::default()
    }

    pub fn resolve<E: SieveEntity>(&self, public_name: &str) -> Option<&FieldMapping> {
        self.entities
            .get(E::ENTITY)
            .and_then(|fields| fields.get(&public_name.trim().to_lowercase()))
    }

    /// All mappings registered for `E`, in no particular order.
    pub fn mappings<E: SieveEntity>(&self) -> impl Iterator<Item = &FieldMapping> {
        self.entities
            .get(E::ENTITY)
            .into_iter()
            .flat_map(|fields| fields.values())
    }
}

#[derive(Debug, Default)]
pub struct FieldMappingRegistryBuilder {
    entries: Vec<(&'static str, FieldMapping)>,
}

impl FieldMappingRegistryBuilder {
    pub fn register<E: SieveEntity>(
        mut self,
        public_name: &str,
        path: AccessPath,
        kind: FieldKind,
        capabilities: Capabilities,
    ) -> Self {
        self.entries.push((
            E::ENTITY,
            FieldMapping {
                public_name: public_name.to_string(),
                path,
                kind,
                can_filter: capabilities.filter,
                can_sort: capabilities.sort,
            },
        ));
        self
    }

    pub fn build(self) -> Result<FieldMappingRegistry, SieveError> {
        let mut entities: HashMap<&'static str, HashMap<String, FieldMapping>> = HashMap::new();

        for (entity, mapping) in self.entries {
            if mapping.public_name.trim().is_empty() || !mapping.path.is_valid() {
                return Err(SieveError::InvalidAccessPath {
                    field: mapping.public_name,
                });
            }

            let fields = entities.entry(entity).or_default();
            let key = mapping.public_name.to_lowercase();
            if fields.contains_key(&key) {
                return Err(SieveError::DuplicateField {
                    entity,
                    field: mapping.public_name,
                });
            }
            fields.insert(key, mapping);
        }

        Ok(FieldMappingRegistry { entities })
    }
}
