use std::collections::HashSet;

use ardesk_core::domain::Record;

use crate::error::{Result, StoreError};

/// An ordered, read-only collection of one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Validates every record and rejects duplicate ids; order is kept.
    pub fn new(records: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            record
                .validate()
                .map_err(|source| StoreError::InvalidRecord {
                    id: record.id().to_string(),
                    source,
                })?;
            if !seen.insert(record.id().clone()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self { records })
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn require(&self, id: &T::Id) -> Result<&T> {
        self.get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
