// SPDX-License-Identifier: MPL-2.0
//! Viewer instance identifiers.
//!
//! Ids only keep viewers distinguishable: they route messages and label log
//! events, and carry no other meaning.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewerId(u64);

impl ViewerId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "viewer#{}", self.0)
    }
}

/// Monotonic id source owned by the composition root.
#[derive(Debug, Default)]
pub struct IdGenerator {
    issued: u64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id. The first id is 1.
    pub fn next_id(&mut self) -> ViewerId {
        self.issued += 1;
        ViewerId(self.issued)
    }
}
