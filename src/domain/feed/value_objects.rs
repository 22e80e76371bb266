// src/domain/feed/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedEntryId(pub i64);

impl FeedEntryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("entry id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<FeedEntryId> for i64 {
    fn from(value: FeedEntryId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContent(String);

impl EntryContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<EntryContent> for String {
    fn from(value: EntryContent) -> Self {
        value.0
    }
}

impl fmt::Display for EntryContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A vote tally. Counters are set, not incremented, so the only invariant
/// is that a tally is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VoteCount(i64);

impl VoteCount {
    pub const ZERO: VoteCount = VoteCount(0);

    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            Err(DomainError::Validation(
                "vote count cannot be negative".into(),
            ))
        } else {
            Ok(Self(value))
        }
    }
}

impl From<VoteCount> for i64 {
    fn from(value: VoteCount) -> Self {
        value.0
    }
}
