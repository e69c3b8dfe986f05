// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run-scoped identifiers for semantic surfaces
//!
//! Ids come from a monotonic counter, so the same input always produces the
//! same output. Ids already taken by the document (city object ids) are
//! reserved up front and skipped, which keeps every `gml:id` of one output
//! document unique.

use rustc_hash::FxHashSet;

/// Monotonic id source for one conversion run
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    next: u64,
    issued: u64,
    reserved: FxHashSet<String>,
}

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
            issued: 0,
            reserved: FxHashSet::default(),
        }
    }

    /// Never hand out any of `ids`
    pub fn reserve<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Next fresh id, e.g. `sem-0`, `sem-1`, ...
    pub fn next_id(&mut self) -> String {
        loop {
            let id = format!("{}-{}", self.prefix, self.next);
            self.next += 1;
            if !self.reserved.contains(&id) {
                self.issued += 1;
                return id;
            }
        }
    }

    /// `count` fresh ids, in order
    pub fn allocate(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.next_id()).collect()
    }

    /// Number of ids handed out so far
    #[inline]
    pub fn issued(&self) -> u64 {
        self.issued
    }
}
