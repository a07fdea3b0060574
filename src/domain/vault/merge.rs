use super::types::{Password, Tag};
use std::collections::HashSet;

/// Records that carry a store-unique identifier.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Password {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Tag {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug)]
pub struct MergeOutcome<T> {
    /// New records, in the incoming order.
    pub accepted: Vec<T>,
    pub skipped: usize,
}

impl<T> MergeOutcome<T> {
    pub fn is_noop(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Splits `incoming` into records whose id is not yet known and records to drop.
///
/// Existing records always win. Within `incoming`, the first occurrence of an id wins.
pub fn merge_by_id<T: Identified>(existing: &[T], incoming: Vec<T>) -> MergeOutcome<T> {
    if incoming.is_empty() {
        return MergeOutcome {
            accepted: Vec::new(),
            skipped: 0,
        };
    }

    let mut seen: HashSet<String> = existing.iter().map(|r| r.id().to_string()).collect();
    let mut accepted = Vec::new();
    let mut skipped = 0;

    for record in incoming {
        if seen.insert(record.id().to_string()) {
            accepted.push(record);
        } else {
            skipped += 1;
        }
    }

    MergeOutcome { accepted, skipped }
}

pub fn merge_passwords(existing: &[Password], incoming: Vec<Password>) -> MergeOutcome<Password> {
    merge_by_id(existing, incoming)
}

pub fn merge_tags(existing: &[Tag], incoming: Vec<Tag>) -> MergeOutcome<Tag> {
    merge_by_id(existing, incoming)
}
