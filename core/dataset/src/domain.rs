//! FILENAME: core/dataset/src/domain.rs
//! Facet Domain - The set of distinct values observed for one facet.
//!
//! Each distinct value is stored once and referenced by a `ValueId`.
//! Ids are handed out in first-seen order, so iterating ids `0..len`
//! yields the values in the order they first appeared in the source.

use rustc_hash::FxHashMap;

use crate::facet::Facet;

/// A reference to an interned value within a facet's domain.
pub type ValueId = u32;

/// Distinct values of a single facet, in first-seen order.
#[derive(Debug, Clone)]
pub struct FacetDomain {
    /// The facet this domain belongs to.
    pub facet: Facet,

    /// Map from value to its id (for deduplication during build).
    value_to_id: FxHashMap<String, ValueId>,

    /// Ordered list of distinct values (indexed by ValueId).
    id_to_value: Vec<String>,
}

impl FacetDomain {
    pub fn new(facet: Facet) -> Self {
        FacetDomain {
            facet,
            value_to_id: FxHashMap::default(),
            id_to_value: Vec::new(),
        }
    }

    /// Interns a value and returns its ValueId.
    /// If the value already exists, returns the existing id.
    pub fn intern(&mut self, value: &str) -> ValueId {
        if let Some(&id) = self.value_to_id.get(value) {
            return id;
        }

        let id = self.id_to_value.len() as ValueId;
        self.id_to_value.push(value.to_string());
        self.value_to_id.insert(value.to_string(), id);
        id
    }

    /// Looks up the id of a value, if it was observed.
    pub fn id_of(&self, value: &str) -> Option<ValueId> {
        self.value_to_id.get(value).copied()
    }

    /// Gets the value for a given id.
    pub fn value(&self, id: ValueId) -> Option<&str> {
        self.id_to_value.get(id as usize).map(String::as_str)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.value_to_id.contains_key(value)
    }

    /// All distinct values in first-seen order.
    pub fn values(&self) -> &[String] {
        &self.id_to_value
    }

    /// Returns the number of distinct values.
    pub fn len(&self) -> usize {
        self.id_to_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_value.is_empty()
    }
}
