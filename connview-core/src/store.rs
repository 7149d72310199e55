//! Profile store boundary.
//!
//! The store owns the profile records and the pre-built group hierarchy;
//! the catalog only consumes them. A [`MemoryProfileStore`] is provided as
//! the reference implementation and as the backing store for tests.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};
use crate::models::{GroupHierarchy, ProfileRecord};

/// Source of profile records and the group hierarchy
pub trait ProfileStore {
    /// Enumerates all profile records
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying collection cannot be read. The
    /// catalog recovers from this with an empty result set.
    fn enumerate(&self) -> StoreResult<Vec<ProfileRecord>>;

    /// Returns the pre-built folder hierarchy for tree layout
    fn group_hierarchy(&self) -> GroupHierarchy;

    /// Loads a single profile by identity
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is missing or cannot be read.
    fn load(&self, filename: &str) -> StoreResult<ProfileRecord>;

    /// Deletes a single profile by identity
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is missing or cannot be removed.
    fn delete(&mut self, filename: &str) -> StoreResult<()>;
}

/// In-memory profile store
///
/// Keeps records in insertion order (enumeration order is meaningful to
/// the flat layout) and derives the hierarchy from an explicit path list.
#[derive(Debug, Default, Clone)]
pub struct MemoryProfileStore {
    records: Vec<ProfileRecord>,
    group_paths: Vec<String>,
}

impl MemoryProfileStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any existing record with the same identity
    pub fn insert(&mut self, record: ProfileRecord) {
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|r| r.filename == record.filename)
        {
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    /// Declares a folder path for the supplied hierarchy
    pub fn add_group_path(&mut self, path: impl Into<String>) {
        self.group_paths.push(path.into());
    }

    /// Returns the number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn enumerate(&self) -> StoreResult<Vec<ProfileRecord>> {
        Ok(self.records.clone())
    }

    fn group_hierarchy(&self) -> GroupHierarchy {
        GroupHierarchy::from_paths(&self.group_paths)
    }

    fn load(&self, filename: &str) -> StoreResult<ProfileRecord> {
        self.records
            .iter()
            .find(|r| r.filename == filename)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(filename.to_string()))
    }

    fn delete(&mut self, filename: &str) -> StoreResult<()> {
        let before = self.records.len();
        self.records.retain(|r| r.filename != filename);
        if self.records.len() == before {
            return Err(StoreError::NotFound(filename.to_string()));
        }
        Ok(())
    }
}

/// A store wrapper that injects failures for specific identities
///
/// Exists for exercising the batch-abort error path without a real broken
/// backing store; reads and deletes of poisoned identities fail, everything
/// else passes through.
#[derive(Debug, Default, Clone)]
pub struct FaultyProfileStore {
    inner: MemoryProfileStore,
    unreadable: HashMap<String, String>,
}

impl FaultyProfileStore {
    /// Wraps a memory store
    #[must_use]
    pub fn new(inner: MemoryProfileStore) -> Self {
        Self {
            inner,
            unreadable: HashMap::new(),
        }
    }

    /// Marks an identity as unreadable with the given reason
    pub fn poison(&mut self, filename: impl Into<String>, reason: impl Into<String>) {
        self.unreadable.insert(filename.into(), reason.into());
    }

    fn check(&self, filename: &str) -> StoreResult<()> {
        match self.unreadable.get(filename) {
            Some(reason) => Err(StoreError::Read {
                filename: filename.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl ProfileStore for FaultyProfileStore {
    fn enumerate(&self) -> StoreResult<Vec<ProfileRecord>> {
        self.inner.enumerate()
    }

    fn group_hierarchy(&self) -> GroupHierarchy {
        self.inner.group_hierarchy()
    }

    fn load(&self, filename: &str) -> StoreResult<ProfileRecord> {
        self.check(filename)?;
        self.inner.load(filename)
    }

    fn delete(&mut self, filename: &str) -> StoreResult<()> {
        self.check(filename)?;
        self.inner.delete(filename)
    }
}
